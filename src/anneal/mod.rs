//! Simulated Annealing over hash parameters.
//!
//! Perturbs the *current* parameters each iteration and moves to the
//! neighbour when it is cheaper, or with probability
//! `exp(-delta / temperature)` when it is not. The temperature cools
//! geometrically after every iteration; the best parameters seen are
//! tracked separately from the current ones.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{accept, AnnealRunner};
