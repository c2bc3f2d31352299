//! `strmatch`: evolve a random string into a target string.
//!
//! ```text
//! strmatch <individuals> <selection> <crossover-probability> \
//!          <mutation-probability> <generations> <display-interval>
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_strmatch::ga::{Alphabet, ConsoleReporter, GaConfig, GaRunner, Selection, Target, DEFAULT_TARGET};

/// String-matching genetic algorithm.
///
/// Prints the best candidate every DISPLAY_INTERVAL generations and stops
/// when the target is matched or the generation budget is spent.
#[derive(Parser, Debug)]
#[command(name = "strmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Population size (even, at least 2)
    individuals: usize,

    /// Selection strategy: rs (rank), bs (Boltzmann) or ts (tournament)
    selection: String,

    /// Probability of crossing a parent pair, in [0, 1]
    crossover_probability: f64,

    /// Per-character mutation probability, in [0, 1]
    mutation_probability: f64,

    /// Generation budget
    generations: usize,

    /// Report every N generations
    display_interval: usize,

    /// Random seed (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Target string
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let selection: Selection = cli.selection.parse().context("invalid selection type")?;
    let target = Target::new(&cli.target).context("invalid target")?;

    let mut config = GaConfig::default()
        .with_population_size(cli.individuals)
        .with_selection(selection)
        .with_crossover_rate(cli.crossover_probability)
        .with_mutation_rate(cli.mutation_probability)
        .with_max_generations(cli.generations)
        .with_display_interval(cli.display_interval);
    config.seed = cli.seed;

    let mut reporter = ConsoleReporter::stdout();
    GaRunner::run(&target, &Alphabet::standard(), &config, &mut reporter)
        .context("invalid configuration")?;

    Ok(())
}
