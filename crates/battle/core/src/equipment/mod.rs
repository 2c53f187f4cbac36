//! Equipped items and their classification.
//!
//! Master-data category codes are classified exactly once, when an
//! [`EquippedItem`] is built. Formulas then work on [`CategoryTag`]s and on
//! [`CategoryCounts`], the per-tag multiset of a loadout.

mod category;
mod classifier;

pub use category::CategoryTag;
pub use classifier::{DEPTH_CHARGE_IDS, classify};

use strum::EnumCount;

use crate::env::{EquipmentId, EquipmentMaster};

/// One occupied equipment slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub master: EquipmentMaster,
    /// Improvement level (0 = unimproved).
    pub level: u8,
    pub tag: CategoryTag,
}

impl EquippedItem {
    pub fn new(master: EquipmentMaster, level: u8) -> Self {
        let tag = classify(&master);
        Self { master, level, tag }
    }

    pub fn id(&self) -> EquipmentId {
        self.master.id
    }

    /// `sqrt(level)`, the base of every improvement bonus.
    pub fn level_root(&self) -> f64 {
        f64::from(self.level).sqrt()
    }
}

/// Land-based squadron joining the base air phases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squadron {
    pub item: EquippedItem,
    pub aircraft: u8,
}

impl Squadron {
    pub fn new(item: EquippedItem, aircraft: u8) -> Self {
        Self { item, aircraft }
    }

    /// Jet squadrons fly in the jet base-air phase instead of the regular one.
    pub fn is_jet(&self) -> bool {
        self.item.tag == CategoryTag::JetFighterBomber
    }
}

/// Multiset of category tags across a loadout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [u8; CategoryTag::COUNT],
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self {
            counts: [0; CategoryTag::COUNT],
        }
    }
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: impl IntoIterator<Item = CategoryTag>) -> Self {
        let mut counts = Self::new();
        for tag in tags {
            counts.add(tag);
        }
        counts
    }

    pub fn add(&mut self, tag: CategoryTag) {
        let slot = &mut self.counts[tag as usize];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, tag: CategoryTag) -> u8 {
        self.counts[tag as usize]
    }

    pub fn has(&self, tag: CategoryTag) -> bool {
        self.count(tag) > 0
    }

    /// Small, medium and large caliber main guns together.
    pub fn main_guns(&self) -> u8 {
        self.count(CategoryTag::SmallCaliberMainGun)
            + self.count(CategoryTag::MediumCaliberMainGun)
            + self.count(CategoryTag::LargeCaliberMainGun)
    }

    pub fn secondary_guns(&self) -> u8 {
        self.count(CategoryTag::SecondaryGun)
    }

    /// Surface torpedoes and submarine torpedoes together.
    pub fn torpedoes(&self) -> u8 {
        self.count(CategoryTag::Torpedo) + self.count(CategoryTag::SubmarineTorpedo)
    }

    pub fn radars(&self) -> u8 {
        self.count(CategoryTag::SmallRadar) + self.count(CategoryTag::LargeRadar)
    }

    pub fn spotters(&self) -> u8 {
        self.count(CategoryTag::SeaplaneRecon) + self.count(CategoryTag::SeaplaneBomber)
    }

    /// Regular and large sonars together.
    pub fn sonars(&self) -> u8 {
        self.count(CategoryTag::Sonar) + self.count(CategoryTag::LargeSonar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_families() {
        let counts = CategoryCounts::from_tags([
            CategoryTag::SmallCaliberMainGun,
            CategoryTag::LargeCaliberMainGun,
            CategoryTag::LargeCaliberMainGun,
            CategoryTag::SubmarineTorpedo,
            CategoryTag::Torpedo,
            CategoryTag::LargeSonar,
            CategoryTag::Sonar,
        ]);
        assert_eq!(counts.main_guns(), 3);
        assert_eq!(counts.torpedoes(), 2);
        assert_eq!(counts.sonars(), 2);
        assert_eq!(counts.count(CategoryTag::LargeSonar), 1);
        assert!(!counts.has(CategoryTag::Generic));
    }

    #[test]
    fn equipped_item_classifies_once() {
        let master = EquipmentMaster::new(EquipmentId(226), "Type 95 Depth Charge", 15);
        let item = EquippedItem::new(master, 4);
        assert_eq!(item.tag, CategoryTag::DepthCharge);
        assert_eq!(item.level_root(), 2.0);
    }
}
