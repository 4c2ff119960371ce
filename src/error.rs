//! Configuration errors.

use thiserror::Error;

/// An invalid tunable passed to the cost model, a search runner or the
/// workload generator.
///
/// Evaluation itself never fails; every error in this crate is caught
/// before a search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("iterations must be positive")]
    ZeroIterations,

    #[error("step_size must be positive, got {0}")]
    BadStepSize(i64),

    #[error("load factor threshold must be finite and at least 2^-32, got {0}")]
    BadLoadFactor(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositiveTemperature { name: &'static str, value: f64 },

    #[error("min_temperature ({min}) must be less than initial_temperature ({initial})")]
    TemperatureOrder { min: f64, initial: f64 },

    #[error("cooling_rate must be in (0, 1], got {0}")]
    BadCoolingRate(f64),

    #[error("simplex coefficient {name} out of range: {value}")]
    BadSimplexCoefficient { name: &'static str, value: f64 },

    #[error("tolerance {name} must be non-negative, got {value}")]
    BadTolerance { name: &'static str, value: f64 },

    #[error("key range [1, {0}] is empty")]
    EmptyKeyRange(u64),
}
