use std::io;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use still_life::Grid;
use still_life::Simulation;
use still_life::io::ConsoleObserver;
use still_life::io::KeyPrompt;
use still_life::io::LinePrompt;
use still_life::simulation::Prompt;

/// Conway's Game of Life on a small bounded board.
///
/// Every generation is printed, and the simulation stops once the board stops changing or when
/// `q` is typed at the prompt.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Number of columns on the board
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Seed for the first generation. Random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the live neighbor count of every cell before each step
    #[arg(long)]
    show_neighbors: bool,

    /// Answer the prompt with a single keypress instead of a line of input
    #[arg(long)]
    keypress: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout belongs to the board, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let grid = Grid::random(args.rows.into(), args.cols.into(), &mut rng)
        .context("Failed to create the first generation")?;

    let mut prompt: Box<dyn Prompt> = if args.keypress {
        Box::new(KeyPrompt::new(io::stdout()))
    } else {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    };
    let mut observer = ConsoleObserver::new(io::stdout(), args.show_neighbors);

    let mut sim = Simulation::new(grid);
    let termination = sim
        .run(prompt.as_mut(), &mut observer)
        .context("Failed to talk to the console")?;

    info!(?termination, generation = sim.generation(), "exiting");

    Ok(())
}
