//! Subcommand implementations.

mod powers;
mod scenarios;
mod simulate;

pub use powers::Powers;
pub use scenarios::Scenarios;
pub use simulate::Simulate;

use std::path::PathBuf;

use battle_runtime::RuntimeConfig;

/// Output format shared by the reporting commands.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Summary,
    /// Full JSON output
    Json,
}

/// Runtime settings from the environment, with the data directory optionally
/// overridden on the command line.
fn runtime_config(data_dir: Option<PathBuf>) -> anyhow::Result<RuntimeConfig> {
    let config = RuntimeConfig::from_env()?;
    Ok(match data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}
