//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into battle-core types;
//! [`ContentFactory`] ties them to a data directory.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod scenario;

pub use catalog::{EquipmentLoader, ShipLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use scenario::{FleetSpec, ScenarioLoader, ScenarioSpec, ShipSpec, SlotSpec, SquadronSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
