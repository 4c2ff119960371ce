//! Simulated annealing configuration.

use crate::error::ConfigError;

/// Configuration for simulated annealing with geometric cooling.
///
/// Unlike a temperature-driven schedule, the run length is a fixed
/// iteration count; temperature only shapes the acceptance probability.
///
/// # Examples
///
/// ```
/// use hashtune::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of perturb-and-evaluate steps.
    pub iterations: usize,

    /// Amount added to or subtracted from each parameter per step.
    pub step_size: i64,

    /// Starting temperature. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// Factor applied to the temperature after every iteration.
    pub cooling_rate: f64,

    /// Floor for the temperature so the acceptance test never divides by
    /// zero.
    pub min_temperature: f64,

    /// Random seed (None for the crate default).
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            step_size: 1,
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            min_temperature: 1e-12,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_step_size(mut self, step: i64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
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
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveTemperature {
                name: "initial_temperature",
                value: self.initial_temperature,
            });
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature {
                name: "min_temperature",
                value: self.min_temperature,
            });
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ConfigError::BadCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
