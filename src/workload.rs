//! Random key workloads.

use rand::Rng;

use crate::error::ConfigError;

/// Number of keys in the default workload.
pub const DEFAULT_KEY_COUNT: usize = 100;

/// Largest key in the default workload.
pub const DEFAULT_MAX_KEY: u64 = 1000;

/// Draws `count` keys uniformly from `[1, max_key]`. Duplicates are kept.
pub fn generate_keys<R: Rng>(count: usize, max_key: u64, rng: &mut R) -> Result<Vec<u64>, ConfigError> {
    if max_key == 0 {
        return Err(ConfigError::EmptyKeyRange(max_key));
    }
    Ok((0..count).map(|_| rng.random_range(1..=max_key)).collect())
}
