//! Simulated annealing execution loop.

use rand::Rng;
use tracing::{debug, info};

use super::config::AnnealConfig;
use crate::error::ConfigError;
use crate::params::{perturb, HashParams};
use crate::random::rng_for;
use crate::search::{Objective, Optimizer, SearchResult};

/// Metropolis acceptance test.
///
/// Improvements (`delta < 0`) are always accepted. Otherwise the move is
/// accepted when `draw`, a uniform sample from `[0, 1)`, falls below
/// `exp(-delta / temperature)`. A non-positive temperature rejects every
/// non-improving move.
///
/// # Examples
///
/// ```
/// use hashtune::anneal::accept;
///
/// assert!(accept(-0.5, 1.0, 0.99));
/// assert!(accept(1.0, 1.0, 0.3));   // exp(-1) ~ 0.368
/// assert!(!accept(1.0, 1.0, 0.4));
/// assert!(!accept(1.0, 0.0, 0.0));
/// ```
pub fn accept(delta: f64, temperature: f64, draw: f64) -> bool {
    if delta < 0.0 {
        return true;
    }
    temperature > 0.0 && draw < (-delta / temperature).exp()
}

/// Geometric cooling step, floored at `min_temperature`.
fn cool(temperature: f64, config: &AnnealConfig) -> f64 {
    (temperature * config.cooling_rate).max(config.min_temperature)
}

/// Executes simulated annealing.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs from a random starting point drawn with the configured seed.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &AnnealConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        let initial = HashParams::random(&mut rng);
        Ok(anneal(objective, initial, config, &mut rng))
    }

    /// Runs from the given starting point.
    pub fn run_from<O: Objective + ?Sized>(
        objective: &O,
        initial: HashParams,
        config: &AnnealConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        Ok(anneal(objective, initial, config, &mut rng))
    }
}

fn anneal<O: Objective + ?Sized, R: Rng>(
    objective: &O,
    initial: HashParams,
    config: &AnnealConfig,
    rng: &mut R,
) -> SearchResult {
    let mut current = initial;
    let mut current_cost = objective.cost(&current);
    let mut best = current;
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature;
    let mut accepted_moves = 0usize;

    let mut cost_history = Vec::with_capacity(config.iterations + 1);
    cost_history.push(best_cost);

    for iteration in 0..config.iterations {
        let neighbor = perturb(&current, config.step_size, rng);
        let neighbor_cost = objective.cost(&neighbor);
        let delta = neighbor_cost - current_cost;

        // The uniform draw is only consumed for non-improving moves.
        if delta < 0.0 || accept(delta, temperature, rng.random()) {
            current = neighbor;
            current_cost = neighbor_cost;
            accepted_moves += 1;
        }

        if current_cost < best_cost {
            debug!(iteration, cost = current_cost, params = %current, temperature, "annealing improved");
            best = current;
            best_cost = current_cost;
        }

        cost_history.push(best_cost);
        temperature = cool(temperature, config);
    }

    info!(
        best = %best,
        cost = best_cost,
        accepted_moves,
        final_temperature = temperature,
        "simulated annealing finished"
    );

    SearchResult {
        best,
        best_point: best.to_point(),
        best_cost,
        iterations: config.iterations,
        evaluations: config.iterations + 1,
        accepted_moves,
        converged: false,
        cost_history,
    }
}

impl Optimizer for AnnealConfig {
    fn name(&self) -> &'static str {
        "simulated_annealing"
    }

    fn search(
        &self,
        objective: &dyn Objective,
        initial: HashParams,
    ) -> Result<SearchResult, ConfigError> {
        AnnealRunner::run_from(objective, initial, self)
    }

    fn run(&self, objective: &dyn Objective) -> Result<SearchResult, ConfigError> {
        AnnealRunner::run(objective, self)
    }
}
