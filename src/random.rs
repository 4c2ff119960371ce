//! Seeded random number generation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when a configuration does not carry one.
pub const DEFAULT_SEED: u64 = 42;

/// The generator driving every search in this crate.
pub type SearchRng = ChaCha8Rng;

/// Creates a deterministic generator from a seed.
///
/// The same seed always produces the same stream on every platform, so a
/// seeded search is reproducible bit for bit.
pub fn create_rng(seed: u64) -> SearchRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to
/// [`DEFAULT_SEED`].
pub fn rng_for(seed: Option<u64>) -> SearchRng {
    create_rng(seed.unwrap_or(DEFAULT_SEED))
}
