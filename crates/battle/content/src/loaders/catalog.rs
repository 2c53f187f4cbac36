//! Equipment and ship catalog loaders.

use std::path::Path;

use battle_core::{EquipmentMaster, ShipMaster};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub items: Vec<EquipmentMaster>,
}

/// Ship catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipCatalog {
    pub ships: Vec<ShipMaster>,
}

/// Loader for the equipment catalog.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment master records from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentMaster>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EquipmentMaster>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}

/// Loader for the ship catalog.
pub struct ShipLoader;

impl ShipLoader {
    /// Load ship master records from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ShipMaster>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ShipMaster>> {
        let catalog: ShipCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ship catalog RON: {}", e))?;
        Ok(catalog.ships)
    }
}
