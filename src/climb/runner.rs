//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting parameters; they become the best so far
//! 2. Repeat a fixed number of times:
//!    a. Perturb the best parameters by `±step_size` per field
//!    b. Evaluate the neighbour
//!    c. Keep it only if its cost is strictly lower
//! 3. Return the best parameters
//!
//! Equal or worse neighbours are never accepted, so the search settles in
//! the first local minimum whose whole neighbourhood is no better.

use rand::Rng;
use tracing::{debug, info};

use super::config::ClimbConfig;
use crate::error::ConfigError;
use crate::params::{perturb, HashParams};
use crate::random::rng_for;
use crate::search::{Objective, Optimizer, SearchResult};

/// Executes greedy hill climbing.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs from a random starting point drawn with the configured seed.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &ClimbConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        let initial = HashParams::random(&mut rng);
        Ok(climb(objective, initial, config, &mut rng))
    }

    /// Runs from the given starting point.
    pub fn run_from<O: Objective + ?Sized>(
        objective: &O,
        initial: HashParams,
        config: &ClimbConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        Ok(climb(objective, initial, config, &mut rng))
    }
}

fn climb<O: Objective + ?Sized, R: Rng>(
    objective: &O,
    initial: HashParams,
    config: &ClimbConfig,
    rng: &mut R,
) -> SearchResult {
    let mut best = initial;
    let mut best_cost = objective.cost(&best);
    let mut improvements = 0usize;

    let mut cost_history = Vec::with_capacity(config.iterations + 1);
    cost_history.push(best_cost);

    for iteration in 0..config.iterations {
        let candidate = perturb(&best, config.step_size, rng);
        let candidate_cost = objective.cost(&candidate);

        if candidate_cost < best_cost {
            debug!(iteration, cost = candidate_cost, params = %candidate, "hill climb improved");
            best = candidate;
            best_cost = candidate_cost;
            improvements += 1;
        }

        cost_history.push(best_cost);
    }

    info!(best = %best, cost = best_cost, improvements, "hill climb finished");

    SearchResult {
        best,
        best_point: best.to_point(),
        best_cost,
        iterations: config.iterations,
        evaluations: config.iterations + 1,
        accepted_moves: improvements,
        converged: false,
        cost_history,
    }
}

impl Optimizer for ClimbConfig {
    fn name(&self) -> &'static str {
        "hill_climbing"
    }

    fn search(
        &self,
        objective: &dyn Objective,
        initial: HashParams,
    ) -> Result<SearchResult, ConfigError> {
        ClimbRunner::run_from(objective, initial, self)
    }

    fn run(&self, objective: &dyn Objective) -> Result<SearchResult, ConfigError> {
        ClimbRunner::run(objective, self)
    }
}
