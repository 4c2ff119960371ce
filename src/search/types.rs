//! Objective and optimizer traits shared by every strategy.

use crate::cost::CostModel;
use crate::error::ConfigError;
use crate::params::{capacity_from_real, HashParams};

/// A cost function over hash parameters. Lower is better.
///
/// Strategies treat the objective as a black box. Hill climbing and
/// annealing call [`Objective::cost`]; the simplex works on real points
/// and calls [`Objective::cost_at`].
pub trait Objective {
    /// Computes the cost of `params`.
    fn cost(&self, params: &HashParams) -> f64;

    /// Computes the cost of a real point `[a, b, m]`.
    ///
    /// The default truncates the point with [`HashParams::from_point`].
    fn cost_at(&self, point: [f64; 3]) -> f64 {
        self.cost(&HashParams::from_point(point))
    }
}

/// The table-simulation objective: a [`CostModel`] bound to a key set.
#[derive(Debug, Clone, Copy)]
pub struct TableObjective<'a> {
    model: CostModel,
    keys: &'a [u64],
}

impl<'a> TableObjective<'a> {
    pub fn new(model: CostModel, keys: &'a [u64]) -> Self {
        Self { model, keys }
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    pub fn keys(&self) -> &'a [u64] {
        self.keys
    }
}

impl Objective for TableObjective<'_> {
    fn cost(&self, params: &HashParams) -> f64 {
        self.model.evaluate(params, self.keys)
    }

    /// Hashes with the real `a` and `b`; only `m` becomes an integer.
    fn cost_at(&self, point: [f64; 3]) -> f64 {
        let [a, b, m] = point;
        self.model.evaluate_real(a, b, capacity_from_real(m), self.keys)
    }
}

/// Outcome of a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best parameters found.
    pub best: HashParams,

    /// The best point as searched. For the simplex this keeps the real
    /// `a` and `b` that `best` truncates.
    pub best_point: [f64; 3],

    /// Cost of `best_point`. Equal to the cost of `best` for the integer
    /// strategies.
    pub best_cost: f64,

    /// Search iterations executed.
    pub iterations: usize,

    /// Objective evaluations, the initial one included.
    pub evaluations: usize,

    /// Moves that replaced the current solution (or simplex vertex).
    pub accepted_moves: usize,

    /// Whether the search stopped on its own convergence test rather than
    /// on its budget.
    pub converged: bool,

    /// Best cost known after each iteration; entry 0 is the best cost
    /// before the first iteration.
    pub cost_history: Vec<f64>,
}

/// A search strategy that minimizes an [`Objective`].
///
/// All strategies are interchangeable behind this trait.
pub trait Optimizer {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Minimizes `objective` starting from `initial`.
    fn search(
        &self,
        objective: &dyn Objective,
        initial: HashParams,
    ) -> Result<SearchResult, ConfigError>;

    /// Minimizes `objective` from a random starting point drawn with the
    /// strategy's own seed.
    fn run(&self, objective: &dyn Objective) -> Result<SearchResult, ConfigError>;
}
