//! Content factory for building oracles and engagements from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, EquipmentMaster, MasterSnapshot, ShipMaster};

use crate::loaders::{
    ConfigLoader, EquipmentLoader, LoadResult, ScenarioLoader, ScenarioSpec, ShipLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// ├── ships.ron
/// └── scenarios/
///     ├── night_skirmish.ron
///     └── combined_day.ron
/// ```
#[derive(Debug, Clone)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`, or the default when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<EquipmentMaster>> {
        let path = self.data_dir.join("equipment.ron");
        EquipmentLoader::load(&path)
    }

    /// Load the ship catalog from `ships.ron`.
    pub fn load_ships(&self) -> LoadResult<Vec<ShipMaster>> {
        let path = self.data_dir.join("ships.ron");
        ShipLoader::load(&path)
    }

    /// Load both catalogs into one snapshot.
    pub fn load_master(&self) -> LoadResult<MasterSnapshot> {
        let equipment = self.load_equipment()?;
        let ships = self.load_ships()?;
        tracing::debug!(
            equipment = equipment.len(),
            ships = ships.len(),
            "master data loaded"
        );
        Ok(MasterSnapshot::from_records(equipment, ships))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<ScenarioSpec> {
        let path = self.scenario_dir().join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Names of every scenario in `scenarios/`, sorted.
    pub fn scenario_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.scenario_dir();
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            anyhow::anyhow!("Failed to read scenario directory {}: {}", dir.display(), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn scenario_dir(&self) -> PathBuf {
        self.data_dir.join("scenarios")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let factory = ContentFactory::new("/nonexistent/battle-data");
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
        assert!(factory.load_master().is_err());
    }
}
