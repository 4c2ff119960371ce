//! Cost model for hash parameters.
//!
//! Simulates a table that starts at capacity `m`, hashes each key with
//! `(a * key + b) mod capacity`, counts writes into occupied buckets and
//! doubles its capacity whenever the load factor exceeds a threshold.
//! The cost of a parameter set is `rehash_count + collisions / occupied`.

mod model;
mod table;

pub use model::{CostMetrics, CostModel, RehashMode, DEFAULT_LOAD_FACTOR, MIN_LOAD_FACTOR};
