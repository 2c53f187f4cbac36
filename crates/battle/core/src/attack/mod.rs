//! Special-attack classification for day and night battle.
mod kind;
mod resolver;
mod target;

pub use kind::{DayAttackKind, NightAttackKind, TorpedoCutinKind};
pub use resolver::{resolve_day_attack, resolve_night_attack, resolve_torpedo_cutin};
pub use target::{SpecialAttacks, TargetClass};

use crate::env::{EquipmentId, HullClass, ShipId};
use crate::equipment::{CategoryCounts, CategoryTag, EquippedItem};
use crate::ship::Combatant;

/// Fleet oiler that operates carrier aircraft.
pub const AIR_CAPABLE_OILER: ShipId = ShipId(352);
/// Late-model bow torpedoes carried by submarines.
pub const LATE_MODEL_TORPEDO_IDS: [EquipmentId; 2] = [EquipmentId(213), EquipmentId(214)];
/// Submarine-mounted radars.
pub const SUBMARINE_RADAR_IDS: [EquipmentId; 2] = [EquipmentId(210), EquipmentId(211)];

/// What the resolver needs to know about an attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loadout {
    pub ship: ShipId,
    pub hull: HullClass,
    pub counts: CategoryCounts,
    pub late_model_torpedoes: u8,
    pub submarine_radars: u8,
}

impl Loadout {
    pub fn from_tags(
        ship: ShipId,
        hull: HullClass,
        tags: impl IntoIterator<Item = CategoryTag>,
    ) -> Self {
        Self {
            ship,
            hull,
            counts: CategoryCounts::from_tags(tags),
            late_model_torpedoes: 0,
            submarine_radars: 0,
        }
    }

    pub fn from_items<'a>(
        ship: ShipId,
        hull: HullClass,
        items: impl IntoIterator<Item = &'a EquippedItem>,
    ) -> Self {
        let mut loadout = Self::from_tags(ship, hull, std::iter::empty());
        for item in items {
            loadout.counts.add(item.tag);
            if LATE_MODEL_TORPEDO_IDS.contains(&item.id()) {
                loadout.late_model_torpedoes += 1;
            }
            if SUBMARINE_RADAR_IDS.contains(&item.id()) {
                loadout.submarine_radars += 1;
            }
        }
        loadout
    }

    pub fn of(ship: &Combatant) -> Self {
        Self::from_items(ship.id(), ship.hull(), ship.items())
    }

    /// Carriers, plus the aircraft-operating oiler when it carries bombers.
    pub fn flies_strikes(&self) -> bool {
        self.hull.is_carrier()
            || (self.ship == AIR_CAPABLE_OILER
                && (self.counts.has(CategoryTag::CarrierDiveBomber)
                    || self.counts.has(CategoryTag::CarrierTorpedoBomber)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::test_support::{combatant, item, main_gun, torpedo};

    #[test]
    fn loadout_counts_special_ids() {
        let mut ship = combatant(HullClass::Submarine);
        ship.equip(0, item(213, 32, 0, Default::default()));
        ship.equip(1, item(210, 51, 0, Default::default()));
        let loadout = Loadout::of(&ship);
        assert_eq!(loadout.late_model_torpedoes, 1);
        assert_eq!(loadout.submarine_radars, 1);
        assert_eq!(loadout.counts.torpedoes(), 1);
        assert_eq!(resolve_torpedo_cutin(&loadout), TorpedoCutinKind::LateModelRadar);
    }

    #[test]
    fn loadout_reads_every_slot() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.equip(0, main_gun(0));
        ship.equip(3, torpedo(0));
        let loadout = Loadout::of(&ship);
        assert_eq!(loadout.counts.main_guns(), 1);
        assert_eq!(
            resolve_night_attack(&loadout, TargetClass::Surface, SpecialAttacks::Allowed),
            NightAttackKind::CutinMainTorpedo
        );
    }
}
