//! Hill climbing configuration.

use crate::error::ConfigError;

/// Configuration for greedy hill climbing.
///
/// # Examples
///
/// ```
/// use hashtune::climb::ClimbConfig;
///
/// let config = ClimbConfig::default()
///     .with_iterations(500)
///     .with_step_size(2)
///     .with_seed(7);
/// assert_eq!(config.iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Number of perturb-and-evaluate steps.
    pub iterations: usize,

    /// Amount added to or subtracted from each parameter per step.
    pub step_size: i64,

    /// Random seed (None for the crate default).
    pub seed: Option<u64>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            step_size: 1,
            seed: None,
        }
    }
}

impl ClimbConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_step_size(mut self, step: i64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.step_size <= 0 {
            return Err(ConfigError::BadStepSize(self.step_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClimbConfig::default();
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.step_size, 1);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = ClimbConfig::default().with_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn test_validate_bad_step() {
        let config = ClimbConfig::default().with_step_size(0);
        assert_eq!(config.validate(), Err(ConfigError::BadStepSize(0)));
    }
}
