//! Combat snapshot of a single ship.
//!
//! A [`Combatant`] is built once from an external snapshot and is immutable
//! for the battle except for its HP, which only the battle state mutates.
mod builder;
mod meter;
mod stats;

pub use builder::{CombatantBuilder, CombatantError};
pub use meter::{Gauge, HpMeter};
pub use stats::{Modernization, StatTotals};

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{EquipmentId, EquipmentStats, HullClass, ShipId, ShipMaster};
use crate::equipment::{CategoryCounts, EquippedItem};

/// Position of a ship inside a combined formation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FleetRole {
    /// Single fleet.
    #[default]
    None,
    Main,
    Escort,
}

/// One regular equipment slot with its aircraft count.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub item: Option<EquippedItem>,
    /// Aircraft currently in the slot.
    pub aircraft: u8,
    /// Aircraft capacity of the slot.
    pub capacity: u8,
}

/// The extra slot opened by reinforcement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionSlot {
    #[default]
    Locked,
    Empty,
    Equipped(EquippedItem),
}

impl ExpansionSlot {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Locked)
    }

    pub fn item(&self) -> Option<&EquippedItem> {
        match self {
            Self::Equipped(item) => Some(item),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub master: ShipMaster,
    pub hp: HpMeter,
    pub ammo: Gauge,
    pub fuel: Gauge,
    pub slots: ArrayVec<Slot, { BattleConfig::MAX_REGULAR_SLOTS }>,
    pub expansion: ExpansionSlot,
    pub stats: StatTotals,
    pub modernization: Modernization,
    pub role: FleetRole,
}

impl Combatant {
    pub fn id(&self) -> ShipId {
        self.master.id
    }

    pub fn hull(&self) -> HullClass {
        self.master.hull
    }

    pub fn with_current_hp(mut self, current: u32) -> Self {
        self.hp = HpMeter::new(current, self.hp.max());
        self
    }

    pub fn with_role(mut self, role: FleetRole) -> Self {
        self.role = role;
        self
    }

    pub fn hp_ratio(&self) -> f64 {
        self.hp.ratio()
    }

    pub fn ammo_ratio(&self) -> f64 {
        self.ammo.ratio()
    }

    pub fn fuel_ratio(&self) -> f64 {
        self.fuel.ratio()
    }

    pub fn is_sunk(&self) -> bool {
        self.hp.is_sunk()
    }

    pub fn is_heavily_damaged(&self) -> bool {
        self.hp.is_heavily_damaged()
    }

    /// Every equipped item: regular slots in order, then the expansion slot.
    pub fn items(&self) -> impl Iterator<Item = &EquippedItem> {
        self.slots
            .iter()
            .filter_map(|slot| slot.item.as_ref())
            .chain(self.expansion.item())
    }

    /// Regular slots that hold an item, with their aircraft counts.
    pub fn loaded_slots(&self) -> impl Iterator<Item = (&EquippedItem, u8)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.item.as_ref().map(|item| (item, slot.aircraft)))
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::from_tags(self.items().map(|item| item.tag))
    }

    /// Number of equipped items whose master id is in `ids`.
    pub fn count_equipment(&self, ids: &[EquipmentId]) -> u32 {
        self.items().filter(|item| ids.contains(&item.id())).count() as u32
    }

    /// Sum of one stat over all equipped items.
    pub fn equipment_stat(&self, stat: impl Fn(&EquipmentStats) -> i32) -> i32 {
        self.items().map(|item| stat(&item.master.stats)).sum()
    }

    /// Total bomber stat of every equipped item.
    pub fn bomber_total(&self) -> i32 {
        self.equipment_stat(|s| s.bomber)
    }

    // Base values: master minimum plus modernization.

    pub fn base_firepower(&self) -> i32 {
        self.master.firepower.min + self.modernization.firepower
    }

    pub fn base_torpedo(&self) -> i32 {
        self.master.torpedo.min + self.modernization.torpedo
    }

    pub fn base_anti_air(&self) -> i32 {
        self.master.anti_air.min + self.modernization.anti_air
    }

    pub fn base_armor(&self) -> i32 {
        self.master.armor.min + self.modernization.armor
    }

    pub fn base_luck(&self) -> i32 {
        self.master.luck.min + self.modernization.luck
    }

    // Base values: totals with equipment subtracted.

    pub fn base_evasion(&self) -> i32 {
        self.stats.evasion - self.equipment_stat(|s| s.evasion)
    }

    pub fn base_asw(&self) -> i32 {
        self.stats.asw - self.equipment_stat(|s| s.asw)
    }

    pub fn base_los(&self) -> i32 {
        self.stats.los - self.equipment_stat(|s| s.los)
    }

    /// Remaining aircraft over total capacity, or 0 without capacity.
    pub fn aircraft_rate(&self) -> f64 {
        let (current, capacity) = self.slots.iter().fold((0u32, 0u32), |(c, m), slot| {
            (c + u32::from(slot.aircraft), m + u32::from(slot.capacity))
        });
        if capacity == 0 {
            0.0
        } else {
            f64::from(current) / f64::from(capacity)
        }
    }

    pub fn modernization_remaining(&self) -> Modernization {
        self.modernization.remaining(&self.master)
    }

    #[cfg(test)]
    pub(crate) fn equip(&mut self, index: usize, item: EquippedItem) {
        self.slots[index].item = Some(item);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn items_include_the_expansion_slot() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.equip(0, main_gun(0));
        ship.expansion = ExpansionSlot::Equipped(sonar(0));
        let ids: Vec<_> = ship.items().map(|item| item.id().0).collect();
        assert_eq!(ids, vec![2, 46]);
        assert!(ship.expansion.is_open());
    }

    #[test]
    fn base_asw_subtracts_equipment() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.stats.asw = 70;
        ship.equip(0, sonar(0));
        ship.equip(1, depth_charge(0));
        assert_eq!(ship.base_asw(), 52);
    }

    #[test]
    fn aircraft_rate_over_capacity() {
        let mut ship = combatant(HullClass::StandardCarrier);
        ship.slots[0].aircraft = 0;
        ship.slots[1].aircraft = 5;
        assert_eq!(ship.aircraft_rate(), 25.0 / 40.0);
    }

    #[test]
    fn modernization_remaining_never_negative() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.master.firepower = crate::env::StatRange::new(10, 29);
        ship.modernization.firepower = 25;
        assert_eq!(ship.modernization_remaining().firepower, 0);
        ship.modernization.firepower = 4;
        assert_eq!(ship.modernization_remaining().firepower, 15);
    }
}
