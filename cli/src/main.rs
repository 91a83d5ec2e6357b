use std::io;

use anyhow::Context;
use bombs_core::{Coord, Game, GameConfig};
use clap::Parser;

mod command;
mod render;
mod session;

const MAX_SIDE: Coord = 10;
const MAX_BOMB_LIKELIHOOD: f64 = 0.5;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper for the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows, at most 10
    #[arg(default_value_t = 8)]
    rows: Coord,

    /// Number of columns, at most 10
    #[arg(default_value_t = 8)]
    cols: Coord,

    /// Chance of any single cell hiding a bomb, at most 0.5
    #[arg(default_value_t = 0.12)]
    likelihood: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board without colors
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// Grid size and bomb likelihood clamped to what the terminal game allows.
    fn config(&self) -> anyhow::Result<GameConfig> {
        let rows = self.rows.clamp(1, MAX_SIDE);
        let cols = self.cols.clamp(1, MAX_SIDE);
        let likelihood = if self.likelihood.is_nan() {
            0.0
        } else {
            self.likelihood.clamp(0.0, MAX_BOMB_LIKELIHOOD)
        };
        GameConfig::new((rows, cols), likelihood).context("Invalid game configuration")
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = args.config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let game = Game::new(config, seed).context("Could not create game")?;
    let mut session = session::Session::new(game, !args.no_color);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Terminal I/O failed")?;

    log::debug!("Session ended in state {:?}", session.game().state());
    Ok(())
}
