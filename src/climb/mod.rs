//! Greedy hill climbing.
//!
//! Repeatedly perturbs the best parameters found so far and keeps a
//! neighbour only when it is strictly cheaper. No uphill or sideways move
//! is ever taken, so the search stops improving at the first local
//! minimum.

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::ClimbRunner;
