#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{init_logging, run_cli, simulate_match, CliDisplay, NullDisplay, RoundController};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game in the terminal.
    Play,
    /// Play random rounds and print the match history as JSON.
    Sim {
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            init_logging(LevelFilter::Warn);
            println!("Tic-Tac-Toe: X moves first. Enter a cell like B2 or '2 2'.");
            let mut controller = RoundController::new(CliDisplay::stdout());
            let stdin = std::io::stdin();
            run_cli(stdin.lock(), &mut controller)?;
        }
        Commands::Sim { rounds, seed } => {
            init_logging(LevelFilter::Info);
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let report =
                simulate_match(&mut rng, rounds, NullDisplay).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
