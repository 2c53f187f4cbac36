//! Battle simulator command-line front end.
//!
//! Run with: `battle <command>`. Settings come from the environment (and a
//! `.env` file when present): `BATTLE_DATA_DIR`, `BATTLE_SEED`,
//! `BATTLE_WORKERS`, plus `RUST_LOG` for log filtering.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Powers, Scenarios, Simulate};

/// Naval battle power calculator and simulator
#[derive(Parser)]
#[command(name = "battle")]
#[command(about = "Power calculation and phase replay for naval battles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the scenarios of the data directory
    Scenarios(Scenarios),

    /// Show every power category of each ship in a scenario
    Powers(Powers),

    /// Resolve scenarios through the full phase pipeline
    Simulate(Simulate),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scenarios(cmd) => cmd.execute(),
        Command::Powers(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute().await,
    }
}
