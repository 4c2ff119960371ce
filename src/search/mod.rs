//! The objective and optimizer interfaces every strategy plugs into.

mod strategy;
mod types;

pub use strategy::Strategy;
pub use types::{Objective, Optimizer, SearchResult, TableObjective};
