//! Strategy selection for callers that run several searches in turn.

use crate::anneal::AnnealConfig;
use crate::climb::ClimbConfig;
use crate::error::ConfigError;
use crate::params::HashParams;
use crate::simplex::SimplexConfig;

use super::types::{Objective, Optimizer, SearchResult};

/// One of the built-in search strategies with its configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    HillClimbing(ClimbConfig),
    SimulatedAnnealing(AnnealConfig),
    NelderMead(SimplexConfig),
}

impl Strategy {
    /// All three strategies with default settings and a shared seed.
    pub fn defaults(seed: Option<u64>) -> Vec<Strategy> {
        let mut climb = ClimbConfig::default();
        let mut anneal = AnnealConfig::default();
        let mut simplex = SimplexConfig::default();
        climb.seed = seed;
        anneal.seed = seed;
        simplex.seed = seed;
        vec![
            Strategy::HillClimbing(climb),
            Strategy::SimulatedAnnealing(anneal),
            Strategy::NelderMead(simplex),
        ]
    }

    fn optimizer(&self) -> &dyn Optimizer {
        match self {
            Strategy::HillClimbing(c) => c,
            Strategy::SimulatedAnnealing(c) => c,
            Strategy::NelderMead(c) => c,
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(_) => "Hill Climbing",
            Strategy::SimulatedAnnealing(_) => "Simulated Annealing",
            Strategy::NelderMead(_) => "Nelder-Mead",
        }
    }
}

impl Optimizer for Strategy {
    fn name(&self) -> &'static str {
        self.optimizer().name()
    }

    fn search(
        &self,
        objective: &dyn Objective,
        initial: HashParams,
    ) -> Result<SearchResult, ConfigError> {
        self.optimizer().search(objective, initial)
    }

    fn run(&self, objective: &dyn Objective) -> Result<SearchResult, ConfigError> {
        self.optimizer().run(objective)
    }
}
