//! Runs every search strategy over a random key workload and prints the
//! best parameters each one found.

use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hashtune::anneal::AnnealConfig;
use hashtune::climb::ClimbConfig;
use hashtune::cost::{CostModel, RehashMode, DEFAULT_LOAD_FACTOR};
use hashtune::random::create_rng;
use hashtune::search::{Optimizer, Strategy, TableObjective};
use hashtune::simplex::SimplexConfig;
use hashtune::workload::{generate_keys, DEFAULT_KEY_COUNT, DEFAULT_MAX_KEY};

/// Tune linear-congruential hash parameters for a resizing table.
#[derive(Parser, Debug)]
#[command(name = "hashtune", version)]
struct Cli {
    /// Number of random keys to insert.
    #[arg(long, default_value_t = DEFAULT_KEY_COUNT)]
    keys: usize,

    /// Keys are drawn uniformly from [1, max-key].
    #[arg(long, default_value_t = DEFAULT_MAX_KEY)]
    max_key: u64,

    /// Seed for the workload and every strategy. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Iterations for hill climbing and simulated annealing.
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Per-field step for hill climbing and simulated annealing.
    #[arg(long, default_value_t = 1)]
    step_size: i64,

    /// Starting temperature for simulated annealing.
    #[arg(long, default_value_t = 100.0)]
    initial_temperature: f64,

    /// Geometric cooling factor for simulated annealing.
    #[arg(long, default_value_t = 0.95)]
    cooling_rate: f64,

    /// Load factor above which the simulated table rehashes (at least 2^-32).
    #[arg(long, default_value_t = DEFAULT_LOAD_FACTOR)]
    load_factor: f64,

    /// Re-hash original keys on resize instead of old bucket indices.
    #[arg(long)]
    rekey: bool,
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    let mode = if cli.rekey {
        RehashMode::Rekey
    } else {
        RehashMode::Quirk
    };
    let model = CostModel::new(cli.load_factor, mode)?;

    let mut rng = create_rng(seed);
    let keys = generate_keys(cli.keys, cli.max_key, &mut rng)?;
    let objective = TableObjective::new(model, &keys);
    info!(
        seed,
        keys = objective.keys().len(),
        max_key = cli.max_key,
        load_factor = objective.model().load_factor_threshold(),
        mode = ?objective.model().rehash_mode(),
        "workload ready"
    );

    let strategies = [
        Strategy::HillClimbing(
            ClimbConfig::default()
                .with_iterations(cli.iterations)
                .with_step_size(cli.step_size)
                .with_seed(seed),
        ),
        Strategy::SimulatedAnnealing(
            AnnealConfig::default()
                .with_iterations(cli.iterations)
                .with_step_size(cli.step_size)
                .with_initial_temperature(cli.initial_temperature)
                .with_cooling_rate(cli.cooling_rate)
                .with_seed(seed),
        ),
        Strategy::NelderMead(SimplexConfig::default().with_seed(seed)),
    ];

    for strategy in &strategies {
        println!("{}:", strategy.label());
        let result = strategy.run(&objective)?;
        println!("Parameters: {}, Cost: {}", result.best, result.best_cost);
    }

    Ok(())
}
