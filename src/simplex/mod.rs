//! Nelder-Mead simplex search.
//!
//! A derivative-free direct search over the real point `(a, b, m)`. The
//! objective sees the real `a` and `b` through [`Objective::cost_at`];
//! only `m` is truncated and floored at 2. The reported parameters
//! truncate `a` and `b` as well, while `best_point` and `best_cost` keep
//! the real vertex.
//!
//! [`Objective::cost_at`]: crate::search::Objective::cost_at

mod config;
mod runner;

pub use config::SimplexConfig;
pub use runner::SimplexRunner;
