//! Master-data records for ships and equipment.
//!
//! These mirror the static tables published by the game: per-hull stat
//! ranges and per-equipment stat contributions. They are read through
//! [`ShipOracle`] and [`EquipmentOracle`] and never appear in battle state.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Master id of an equipment type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EquipmentId(pub u16);

impl core::fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "equipment#{}", self.0)
    }
}

/// Master id of a ship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShipId(pub u16);

impl core::fmt::Display for ShipId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}

/// Hull classification of a ship.
///
/// Decides which special attacks a ship can perform, whether it substitutes
/// air attacks for shelling, and which flat fit bonuses apply.
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
pub enum HullClass {
    /// Coastal defense ship (DE)
    Escort,
    /// Destroyer (DD)
    #[default]
    Destroyer,
    /// Light cruiser (CL)
    LightCruiser,
    /// Torpedo cruiser (CLT)
    TorpedoCruiser,
    /// Heavy cruiser (CA)
    HeavyCruiser,
    /// Aviation cruiser (CAV)
    AviationCruiser,
    /// Light carrier (CVL)
    LightCarrier,
    /// Fast battleship (FBB)
    FastBattleship,
    /// Battleship (BB)
    Battleship,
    /// Aviation battleship (BBV)
    AviationBattleship,
    /// Standard carrier (CV)
    StandardCarrier,
    /// Super-dreadnought
    SuperDreadnought,
    /// Submarine (SS)
    Submarine,
    /// Submarine aircraft carrier (SSV)
    SubmarineCarrier,
    /// Transport (AP)
    Transport,
    /// Seaplane tender (AV)
    SeaplaneTender,
    /// Amphibious assault ship (LHA)
    AmphibiousAssault,
    /// Armored carrier (CVB)
    ArmoredCarrier,
    /// Repair ship (AR)
    RepairShip,
    /// Submarine tender (AS)
    SubmarineTender,
    /// Training cruiser (CT)
    TrainingCruiser,
    /// Fleet oiler (AO)
    FleetOiler,
    /// Land installation (enemy only)
    Installation,
}

impl HullClass {
    /// Maps the numeric ship-type code of the master tables.
    ///
    /// Returns `None` for codes outside the table.
    pub const fn from_code(code: u8) -> Option<Self> {
        let hull = match code {
            1 => Self::Escort,
            2 => Self::Destroyer,
            3 => Self::LightCruiser,
            4 => Self::TorpedoCruiser,
            5 => Self::HeavyCruiser,
            6 => Self::AviationCruiser,
            7 => Self::LightCarrier,
            8 => Self::FastBattleship,
            9 => Self::Battleship,
            10 => Self::AviationBattleship,
            11 => Self::StandardCarrier,
            12 => Self::SuperDreadnought,
            13 => Self::Submarine,
            14 => Self::SubmarineCarrier,
            15 => Self::Transport,
            16 => Self::SeaplaneTender,
            17 => Self::AmphibiousAssault,
            18 => Self::ArmoredCarrier,
            19 => Self::RepairShip,
            20 => Self::SubmarineTender,
            21 => Self::TrainingCruiser,
            22 => Self::FleetOiler,
            _ => return None,
        };
        Some(hull)
    }

    /// Carriers replace shelling with air attacks.
    pub const fn is_carrier(self) -> bool {
        matches!(
            self,
            Self::LightCarrier | Self::StandardCarrier | Self::ArmoredCarrier
        )
    }

    pub const fn is_submarine(self) -> bool {
        matches!(self, Self::Submarine | Self::SubmarineCarrier)
    }

    /// Hulls that answer submarines with aircraft instead of depth charges.
    pub const fn is_aviation(self) -> bool {
        matches!(
            self,
            Self::LightCarrier
                | Self::SeaplaneTender
                | Self::AmphibiousAssault
                | Self::AviationBattleship
                | Self::AviationCruiser
        )
    }

    /// Hulls eligible for the light-cruiser gun fit bonus.
    pub const fn is_light_cruiser_family(self) -> bool {
        matches!(
            self,
            Self::LightCruiser | Self::TorpedoCruiser | Self::TrainingCruiser
        )
    }
}

/// Inclusive stat range of a ship type (level 1 minimum, modernization cap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Increments still available through modernization.
    pub const fn span(&self) -> i32 {
        self.max - self.min
    }
}

/// Stat contributions of one equipment type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentStats {
    pub firepower: i32,
    pub torpedo: i32,
    pub bomber: i32,
    pub anti_air: i32,
    pub armor: i32,
    pub asw: i32,
    pub evasion: i32,
    pub los: i32,
}

/// Master record of an equipment type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentMaster {
    pub id: EquipmentId,
    pub name: String,
    /// Raw category code from the master tables (see [`crate::equipment::classify`]).
    pub category: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: EquipmentStats,
}

impl EquipmentMaster {
    pub fn new(id: EquipmentId, name: impl Into<String>, category: u16) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            stats: EquipmentStats::default(),
        }
    }

    pub fn with_stats(mut self, stats: EquipmentStats) -> Self {
        self.stats = stats;
        self
    }
}

/// Master record of a ship type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipMaster {
    pub id: ShipId,
    pub name: String,
    pub hull: HullClass,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub firepower: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub torpedo: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub anti_air: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evasion: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub asw: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub los: StatRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub luck: StatRange,
    pub ammo: u32,
    pub fuel: u32,
    /// Aircraft capacity of each regular slot; its length is the slot count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aircraft: ArrayVec<u8, { BattleConfig::MAX_REGULAR_SLOTS }>,
}

impl ShipMaster {
    /// Number of regular equipment slots.
    pub fn slot_count(&self) -> usize {
        self.aircraft.len()
    }

    /// Total aircraft the ship carries when fully supplied.
    pub fn aircraft_total(&self) -> u32 {
        self.aircraft.iter().map(|&n| u32::from(n)).sum()
    }
}

/// Oracle providing equipment master data.
pub trait EquipmentOracle: Send + Sync {
    fn equipment(&self, id: EquipmentId) -> Option<EquipmentMaster>;
}

/// Oracle providing ship master data.
pub trait ShipOracle: Send + Sync {
    fn ship(&self, id: ShipId) -> Option<ShipMaster>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_codes_map_to_classes() {
        assert_eq!(HullClass::from_code(3), Some(HullClass::LightCruiser));
        assert_eq!(HullClass::from_code(7), Some(HullClass::LightCarrier));
        assert_eq!(HullClass::from_code(13), Some(HullClass::Submarine));
        assert_eq!(HullClass::from_code(21), Some(HullClass::TrainingCruiser));
    }

    #[test]
    fn unknown_hull_code_is_rejected() {
        assert_eq!(HullClass::from_code(0), None);
        assert_eq!(HullClass::from_code(200), None);
    }

    #[test]
    fn default_ship_master_has_zero_id() {
        let master = ShipMaster::default();
        assert_eq!(master.id, ShipId::default());
        assert_eq!(master.id, ShipId(0));
        assert_eq!(master.hull, HullClass::Destroyer);
    }

    #[test]
    fn hull_families() {
        assert!(HullClass::ArmoredCarrier.is_carrier());
        assert!(!HullClass::SeaplaneTender.is_carrier());
        assert!(HullClass::SeaplaneTender.is_aviation());
        assert!(HullClass::SubmarineCarrier.is_submarine());
        assert!(HullClass::TorpedoCruiser.is_light_cruiser_family());
        assert!(!HullClass::HeavyCruiser.is_light_cruiser_family());
    }
}
