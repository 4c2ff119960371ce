//! Nelder-Mead execution loop.
//!
//! # Algorithm
//!
//! 1. Build an initial simplex of `n + 1` points around the starting guess
//! 2. Sort vertices by cost; stop if both the vertex spread and the cost
//!    spread are within tolerance
//! 3. Reflect the worst vertex through the centroid of the others
//!    a. Better than the best: try expanding further
//!    b. Better than the second worst: keep the reflection
//!    c. Otherwise contract (outside or inside); if that fails, shrink
//!    every vertex toward the best
//! 4. Repeat until converged or out of budget
//!
//! # Reference
//!
//! Nelder, J. A. & Mead, R. (1965). "A simplex method for function
//! minimization", *The Computer Journal* 7(4), 308-313.

use tracing::{debug, info};

use super::config::SimplexConfig;
use crate::error::ConfigError;
use crate::params::HashParams;
use crate::random::rng_for;
use crate::search::{Objective, Optimizer, SearchResult};

const DIM: usize = 3;

type Point = [f64; DIM];

/// Objective over real points, counting evaluations.
struct Evaluator<'a, O: ?Sized> {
    objective: &'a O,
    evaluations: usize,
}

impl<O: Objective + ?Sized> Evaluator<'_, O> {
    fn eval(&mut self, point: &Point) -> f64 {
        self.evaluations += 1;
        self.objective.cost_at(*point)
    }
}

/// Executes Nelder-Mead simplex search.
pub struct SimplexRunner;

impl SimplexRunner {
    /// Runs from a random starting point drawn with the configured seed.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &SimplexConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        let initial = HashParams::random(&mut rng);
        Ok(nelder_mead(objective, initial, config))
    }

    /// Runs from the given starting point.
    pub fn run_from<O: Objective + ?Sized>(
        objective: &O,
        initial: HashParams,
        config: &SimplexConfig,
    ) -> Result<SearchResult, ConfigError> {
        config.validate()?;
        Ok(nelder_mead(objective, initial, config))
    }
}

fn nelder_mead<O: Objective + ?Sized>(
    objective: &O,
    initial: HashParams,
    config: &SimplexConfig,
) -> SearchResult {
    let rho = config.reflection;
    let chi = config.expansion;
    let psi = config.contraction;
    let sigma = config.shrink;

    let mut evaluator = Evaluator {
        objective,
        evaluations: 0,
    };

    let x0 = initial.to_point();
    let mut simplex: Vec<(Point, f64)> = Vec::with_capacity(DIM + 1);
    simplex.push((x0, evaluator.eval(&x0)));
    for k in 0..DIM {
        let mut y = x0;
        y[k] = if x0[k] != 0.0 {
            x0[k] * (1.0 + config.relative_step)
        } else {
            config.zero_step
        };
        simplex.push((y, evaluator.eval(&y)));
    }
    sort_vertices(&mut simplex);

    let mut cost_history = vec![simplex[0].1];
    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut converged = false;

    while iterations < config.max_iterations && evaluator.evaluations < config.max_evaluations {
        if is_converged(&simplex, config) {
            converged = true;
            break;
        }

        let worst = simplex[DIM].0;
        let worst_cost = simplex[DIM].1;
        let second_worst_cost = simplex[DIM - 1].1;
        let best_cost = simplex[0].1;
        let centroid = centroid(&simplex[..DIM]);

        let xr = along(&centroid, &worst, rho);
        let fxr = evaluator.eval(&xr);

        let mut replacement = None;
        if fxr < best_cost {
            let xe = along(&centroid, &worst, rho * chi);
            let fxe = evaluator.eval(&xe);
            replacement = Some(if fxe < fxr { (xe, fxe) } else { (xr, fxr) });
        } else if fxr < second_worst_cost {
            replacement = Some((xr, fxr));
        } else if fxr < worst_cost {
            let xc = along(&centroid, &worst, psi * rho);
            let fxc = evaluator.eval(&xc);
            if fxc <= fxr {
                replacement = Some((xc, fxc));
            }
        } else {
            let xcc = along(&centroid, &worst, -psi);
            let fxcc = evaluator.eval(&xcc);
            if fxcc < worst_cost {
                replacement = Some((xcc, fxcc));
            }
        }

        match replacement {
            Some(vertex) => {
                simplex[DIM] = vertex;
                accepted_moves += 1;
            }
            None => {
                let best = simplex[0].0;
                for vertex in simplex.iter_mut().skip(1) {
                    for k in 0..DIM {
                        vertex.0[k] = best[k] + sigma * (vertex.0[k] - best[k]);
                    }
                    vertex.1 = evaluator.eval(&vertex.0);
                }
            }
        }

        sort_vertices(&mut simplex);
        iterations += 1;

        if simplex[0].1 < best_cost {
            debug!(iterations, cost = simplex[0].1, point = ?simplex[0].0, "simplex improved");
        }
        cost_history.push(simplex[0].1);
    }

    let (point, best_cost) = simplex[0];
    let best = HashParams::from_point(point);

    info!(
        best = %best,
        point = ?point,
        cost = best_cost,
        iterations,
        evaluations = evaluator.evaluations,
        converged,
        "simplex search finished"
    );

    SearchResult {
        best,
        best_point: point,
        best_cost,
        iterations,
        evaluations: evaluator.evaluations,
        accepted_moves,
        converged,
        cost_history,
    }
}

/// Stable sort by cost, so ties keep the older vertex first.
fn sort_vertices(simplex: &mut [(Point, f64)]) {
    simplex.sort_by(|x, y| x.1.total_cmp(&y.1));
}

fn is_converged(simplex: &[(Point, f64)], config: &SimplexConfig) -> bool {
    let (best, best_cost) = simplex[0];
    let x_spread = simplex[1..]
        .iter()
        .flat_map(|(p, _)| p.iter().zip(best.iter()).map(|(x, b)| (x - b).abs()))
        .fold(0.0f64, f64::max);
    let f_spread = simplex[1..]
        .iter()
        .map(|(_, c)| (c - best_cost).abs())
        .fold(0.0f64, f64::max);
    x_spread <= config.xatol && f_spread <= config.fatol
}

fn centroid(vertices: &[(Point, f64)]) -> Point {
    let mut c = [0.0; DIM];
    for (p, _) in vertices {
        for k in 0..DIM {
            c[k] += p[k];
        }
    }
    let n = vertices.len() as f64;
    c.map(|x| x / n)
}

/// `centroid + t * (centroid - worst)`.
fn along(centroid: &Point, worst: &Point, t: f64) -> Point {
    let mut p = [0.0; DIM];
    for k in 0..DIM {
        p[k] = centroid[k] + t * (centroid[k] - worst[k]);
    }
    p
}

impl Optimizer for SimplexConfig {
    fn name(&self) -> &'static str {
        "nelder_mead"
    }

    fn search(
        &self,
        objective: &dyn Objective,
        initial: HashParams,
    ) -> Result<SearchResult, ConfigError> {
        SimplexRunner::run_from(objective, initial, self)
    }

    fn run(&self, objective: &dyn Objective) -> Result<SearchResult, ConfigError> {
        SimplexRunner::run(objective, self)
    }
}
