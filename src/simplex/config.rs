//! Nelder-Mead configuration.

use crate::error::ConfigError;

/// Configuration for the Nelder-Mead simplex search.
///
/// Defaults follow the standard coefficients (reflection 1, expansion 2,
/// contraction 0.5, shrink 0.5) and a budget of `200 * n` iterations and
/// evaluations for the three-dimensional parameter space.
///
/// # Examples
///
/// ```
/// use hashtune::simplex::SimplexConfig;
///
/// let config = SimplexConfig::default()
///     .with_max_iterations(100)
///     .with_tolerances(1e-3, 1e-3)
///     .with_seed(1);
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplexConfig {
    /// Maximum simplex updates.
    pub max_iterations: usize,

    /// Maximum objective evaluations. Checked between iterations, so a
    /// run may overshoot by the evaluations of one shrink step.
    pub max_evaluations: usize,

    /// Convergence tolerance on vertex spread (max-norm from the best vertex).
    pub xatol: f64,

    /// Convergence tolerance on cost spread.
    pub fatol: f64,

    /// Initial vertex offset, relative to the coordinate's value.
    pub relative_step: f64,

    /// Initial vertex value for a coordinate that starts at zero.
    pub zero_step: f64,

    /// Reflection coefficient (rho > 0).
    pub reflection: f64,

    /// Expansion coefficient (chi > 1, chi > rho).
    pub expansion: f64,

    /// Contraction coefficient (0 < psi < 1).
    pub contraction: f64,

    /// Shrink coefficient (0 < sigma < 1).
    pub shrink: f64,

    /// Random seed for the initial guess (None for the crate default).
    pub seed: Option<u64>,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iterations: 600,
            max_evaluations: 600,
            xatol: 1e-4,
            fatol: 1e-4,
            relative_step: 0.05,
            zero_step: 0.00025,
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
            seed: None,
        }
    }
}

impl SimplexConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets both convergence tolerances.
    pub fn with_tolerances(mut self, xatol: f64, fatol: f64) -> Self {
        self.xatol = xatol;
        self.fatol = fatol;
        self
    }

    /// Sets the relative initial offset and the step used for zero
    /// coordinates.
    pub fn with_initial_step(mut self, relative: f64, zero: f64) -> Self {
        self.relative_step = relative;
        self.zero_step = zero;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 || self.max_evaluations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        let bad = |name: &'static str, value: f64| ConfigError::BadSimplexCoefficient { name, value };
        if !(self.reflection > 0.0) {
            return Err(bad("reflection", self.reflection));
        }
        if !(self.expansion > 1.0 && self.expansion > self.reflection) {
            return Err(bad("expansion", self.expansion));
        }
        if !(self.contraction > 0.0 && self.contraction < 1.0) {
            return Err(bad("contraction", self.contraction));
        }
        if !(self.shrink > 0.0 && self.shrink < 1.0) {
            return Err(bad("shrink", self.shrink));
        }
        if !(self.relative_step > 0.0 && self.relative_step.is_finite()) {
            return Err(bad("relative_step", self.relative_step));
        }
        if !(self.zero_step > 0.0 && self.zero_step.is_finite()) {
            return Err(bad("zero_step", self.zero_step));
        }
        for (name, value) in [("xatol", self.xatol), ("fatol", self.fatol)] {
            if !(value >= 0.0) {
                return Err(ConfigError::BadTolerance { name, value });
            }
        }
        Ok(())
    }
}
