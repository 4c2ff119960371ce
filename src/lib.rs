//! Parameter tuning for a linear-congruential hash in a resizing table.
//!
//! The hash is `h(k) = (a * k + b) mod capacity`, where the table starts
//! at capacity `m` and doubles whenever its load factor exceeds 0.75.
//! A parameter set is scored by simulating that table over a key set:
//!
//! - **Cost model** ([`cost`]): counts rehashes and writes into occupied
//!   buckets; cost is `rehash_count + collisions / occupied`.
//! - **Hill climbing** ([`climb`]): greedy local search over `±step`
//!   moves.
//! - **Simulated annealing** ([`anneal`]): Metropolis acceptance with
//!   geometric cooling.
//! - **Nelder-Mead** ([`simplex`]): derivative-free simplex search over
//!   the real point `(a, b, m)`.
//!
//! All three strategies implement [`search::Optimizer`] and treat the
//! cost as an opaque [`search::Objective`].
//!
//! # Examples
//!
//! ```
//! use hashtune::climb::{ClimbConfig, ClimbRunner};
//! use hashtune::cost::CostModel;
//! use hashtune::search::TableObjective;
//!
//! let keys: Vec<u64> = (1..=100).map(|k| k * 7919 % 1000 + 1).collect();
//! let objective = TableObjective::new(CostModel::default(), &keys);
//! let config = ClimbConfig::default().with_iterations(200).with_seed(42);
//!
//! let result = ClimbRunner::run(&objective, &config).unwrap();
//! assert!(result.best_cost.is_finite());
//! println!("{} -> {}", result.best, result.best_cost);
//! ```

pub mod anneal;
pub mod climb;
pub mod cost;
pub mod error;
pub mod params;
pub mod random;
pub mod search;
pub mod simplex;
pub mod workload;

pub use error::ConfigError;
pub use params::HashParams;
