use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use set_odds::{estimate_sampled, MonteCarloDriver, ProbabilityEstimate, SimulationConfig};

/// Estimator to run for each hand size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play full games and count rounds with a full hand.
    Game,
    /// Sample independent hands from the catalog.
    Sampled,
}

/// Odds of finding a matching triple in a SET-style card game.
#[derive(Debug, Parser)]
#[command(name = "set-odds", author, version, about = "Monte Carlo odds of a matching triple")]
struct Cli {
    /// Number of games (or samples) per hand size.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1000)]
    games: usize,

    /// Smallest hand size to report.
    #[arg(long, value_name = "CARDS", default_value_t = 12)]
    min_hand: usize,

    /// Largest hand size to report (defaults to --min-hand).
    #[arg(long, value_name = "CARDS")]
    max_hand: Option<usize>,

    /// Root RNG seed for a reproducible run.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Estimator to use.
    #[arg(long, value_enum, default_value_t = Mode::Game)]
    mode: Mode,

    /// Print estimates as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_estimate(mode: Mode, config: SimulationConfig) -> set_odds::Result<ProbabilityEstimate> {
    match mode {
        Mode::Game => MonteCarloDriver::new(config)?.run(),
        Mode::Sampled => estimate_sampled(&config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let max_hand = cli.max_hand.unwrap_or(cli.min_hand);
    anyhow::ensure!(
        cli.min_hand <= max_hand,
        "--min-hand ({}) is larger than --max-hand ({max_hand})",
        cli.min_hand
    );

    let mut estimates = Vec::new();
    for hand_size in cli.min_hand..=max_hand {
        let mut config = SimulationConfig::new(hand_size, cli.games);
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed);
        }
        let estimate = run_estimate(cli.mode, config)
            .with_context(|| format!("estimating hand size {hand_size}"))?;
        estimates.push(estimate);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
        return Ok(());
    }

    println!("Number of games: {}", cli.games);
    println!("Monte Carlo odds of at least one matching triple in N cards ({:?} mode)", cli.mode);
    println!();
    println!("Num cards  \t|  Probability");
    println!("-------------------------------");
    for estimate in &estimates {
        println!("{}\t\t|  {:.3}", estimate.hand_size, estimate.probability);
    }
    println!();
    if let [single] = estimates.as_slice() {
        println!("Trials: {}  Successes: {}  Seed: {}", single.trials, single.successes, single.seed);
    }

    Ok(())
}
