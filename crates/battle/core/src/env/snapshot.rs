//! In-memory master data.
//!
//! [`MasterSnapshot`] captures ship and equipment tables in ordered maps and
//! implements both lookup oracles, so loaders and tests can hand the engine
//! a self-contained catalog.

use std::collections::BTreeMap;

use super::{EquipmentId, EquipmentMaster, EquipmentOracle, ShipId, ShipMaster, ShipOracle};

/// Snapshot of the ship and equipment master tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasterSnapshot {
    pub equipment: BTreeMap<EquipmentId, EquipmentMaster>,
    pub ships: BTreeMap<ShipId, ShipMaster>,
}

impl MasterSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from record lists; later duplicates win.
    pub fn from_records(
        equipment: impl IntoIterator<Item = EquipmentMaster>,
        ships: impl IntoIterator<Item = ShipMaster>,
    ) -> Self {
        Self {
            equipment: equipment.into_iter().map(|e| (e.id, e)).collect(),
            ships: ships.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn insert_equipment(&mut self, record: EquipmentMaster) {
        self.equipment.insert(record.id, record);
    }

    pub fn insert_ship(&mut self, record: ShipMaster) {
        self.ships.insert(record.id, record);
    }
}

impl EquipmentOracle for MasterSnapshot {
    fn equipment(&self, id: EquipmentId) -> Option<EquipmentMaster> {
        self.equipment.get(&id).cloned()
    }
}

impl ShipOracle for MasterSnapshot {
    fn ship(&self, id: ShipId) -> Option<ShipMaster> {
        self.ships.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicates_replace_earlier_records() {
        let snapshot = MasterSnapshot::from_records(
            [
                EquipmentMaster::new(EquipmentId(2), "12.7cm Twin Gun", 1),
                EquipmentMaster::new(EquipmentId(2), "12.7cm Twin Gun Mount", 1),
            ],
            [],
        );
        let record = snapshot.equipment(EquipmentId(2)).unwrap();
        assert_eq!(record.name, "12.7cm Twin Gun Mount");
        assert!(snapshot.ship(ShipId(1)).is_none());
    }
}
