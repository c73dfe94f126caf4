#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    cli::{self, BOARD_SIZE_PROMPT, READY_MSG},
    init_logging, GameEngine,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Sink a randomly placed fleet on a square board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Board side length, 5 to 26 (prompted for when omitted)")]
    size: Option<usize>,
    #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let size = match args.size {
        Some(size) => cli::validate_board_size(size)?,
        None => {
            write!(stdout, "{}", BOARD_SIZE_PROMPT)?;
            stdout.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            cli::parse_board_size(&line)?
        }
    };

    let mut rng = match args.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut engine = GameEngine::new(size, &mut rng)?;
    writeln!(stdout, "{}", READY_MSG)?;
    cli::run_game(&mut engine, input, &mut stdout, io::stderr())?;
    engine.into_board().destroy();
    Ok(())
}
