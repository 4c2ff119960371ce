//! Cost evaluation over a key set.

use super::table::{IntegerHash, LinearHash, RealHash, SimulatedTable};
use crate::error::ConfigError;
use crate::params::{HashParams, MIN_CAPACITY};

/// Load factor above which the simulated table rehashes.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor threshold, 2^-32.
///
/// Any capacity of at least 2^32 satisfies it with a single entry, so a
/// table never needs more than 32 doublings to get back under it.
pub const MIN_LOAD_FACTOR: f64 = 1.0 / 4_294_967_296.0;

/// What gets re-hashed when the table grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RehashMode {
    /// Re-insert each entry using its old bucket index as the key.
    ///
    /// Entries redistribute by stale indices rather than by the keys that
    /// produced them, so costs after a rehash depend on `a`, `b` and the
    /// previous capacity rather than on the keys.
    #[default]
    Quirk,

    /// Re-insert each entry using the original key stored in the bucket.
    Rekey,
}

/// Counters observed after inserting a key set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMetrics {
    /// Number of times the table doubled.
    pub rehash_count: u32,
    /// Writes that landed in an already occupied bucket, rehash
    /// re-insertions included.
    pub collision_count: u64,
    /// Occupied buckets at the end.
    pub occupied: usize,
    /// Final capacity.
    pub capacity: u64,
    /// `collision_count / occupied`, or 0 for an empty table.
    pub collision_rate: f64,
}

impl CostMetrics {
    /// Scalar cost: `rehash_count + collision_rate`. Lower is better.
    pub fn cost(&self) -> f64 {
        self.rehash_count as f64 + self.collision_rate
    }
}

/// Evaluates hash parameters by simulating a resizing table.
///
/// The model is stateless: every call builds and discards its own table,
/// so a single model can be shared freely between searches.
///
/// # Examples
///
/// ```
/// use hashtune::cost::CostModel;
/// use hashtune::params::HashParams;
///
/// let model = CostModel::default();
/// let cost = model.evaluate(&HashParams::new(1, 0, 4), &[1, 1, 1]);
/// assert!((cost - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    load_factor_threshold: f64,
    rehash_mode: RehashMode,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            load_factor_threshold: DEFAULT_LOAD_FACTOR,
            rehash_mode: RehashMode::default(),
        }
    }
}

impl CostModel {
    /// Creates a model with a custom load factor threshold and rehash mode.
    ///
    /// The threshold must be finite and at least [`MIN_LOAD_FACTOR`].
    pub fn new(load_factor_threshold: f64, rehash_mode: RehashMode) -> Result<Self, ConfigError> {
        if !load_factor_threshold.is_finite() || load_factor_threshold < MIN_LOAD_FACTOR {
            return Err(ConfigError::BadLoadFactor(load_factor_threshold));
        }
        Ok(Self {
            load_factor_threshold,
            rehash_mode,
        })
    }

    pub fn with_rehash_mode(mut self, mode: RehashMode) -> Self {
        self.rehash_mode = mode;
        self
    }

    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    pub fn rehash_mode(&self) -> RehashMode {
        self.rehash_mode
    }

    /// Inserts `keys` in order and reports the resulting counters.
    pub fn metrics(&self, params: &HashParams, keys: &[u64]) -> CostMetrics {
        self.simulate(IntegerHash::new(params.a(), params.b()), params.m(), keys)
    }

    /// Cost of `params` over `keys`. Lower is better.
    pub fn evaluate(&self, params: &HashParams, keys: &[u64]) -> f64 {
        self.metrics(params, keys).cost()
    }

    /// Like [`CostModel::metrics`], with real coefficients `a` and `b`.
    ///
    /// Buckets are real remainders `(a * key + b) mod capacity`, so keys
    /// that integer coefficients would merge can stay apart. `m` is floored
    /// at [`MIN_CAPACITY`].
    pub fn metrics_real(&self, a: f64, b: f64, m: u64, keys: &[u64]) -> CostMetrics {
        self.simulate(RealHash::new(a, b), m.max(MIN_CAPACITY), keys)
    }

    /// Cost of real coefficients `a`, `b` with initial capacity `m`.
    pub fn evaluate_real(&self, a: f64, b: f64, m: u64, keys: &[u64]) -> f64 {
        self.metrics_real(a, b, m, keys).cost()
    }

    fn simulate<H: LinearHash>(&self, hash: H, capacity: u64, keys: &[u64]) -> CostMetrics {
        let mut table =
            SimulatedTable::new(hash, capacity, self.load_factor_threshold, self.rehash_mode);
        for &key in keys {
            table.insert(key);
        }

        let occupied = table.occupied();
        let collision_rate = if occupied == 0 {
            0.0
        } else {
            table.collisions() as f64 / occupied as f64
        };

        CostMetrics {
            rehash_count: table.rehashes(),
            collision_count: table.collisions(),
            occupied,
            capacity: table.capacity(),
            collision_rate,
        }
    }
}
