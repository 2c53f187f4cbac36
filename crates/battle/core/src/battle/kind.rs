//! Battle-type classification.
//!
//! Battle types arrive as raw flag sets. They are validated once into a
//! [`BattleTypeDescriptor`] before any phase runs.

use bitflags::bitflags;

use crate::error::{BattleError, ErrorSeverity};

bitflags! {
    /// Raw battle-type flags: exactly one time class, optionally combined.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BattleTypeFlags: u8 {
        const DAY      = 1 << 0;
        const NIGHT    = 1 << 1;
        const AIR_RAID = 1 << 2;
        const AERIAL   = 1 << 3;
        const COMBINED = 1 << 4;

        const TIME_CLASS = Self::DAY.bits()
            | Self::NIGHT.bits()
            | Self::AIR_RAID.bits()
            | Self::AERIAL.bits();
    }
}

/// Time-of-day class of a battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TimeOfDay {
    Day,
    Night,
    AirRaid,
    /// Two consecutive air-battle waves.
    AerialCombat,
}

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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Formation {
    #[default]
    Single,
    Combined,
}

/// Validated battle type: which phase table applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTypeDescriptor {
    pub time: TimeOfDay,
    pub formation: Formation,
}

/// Battle-type flags that name no phase table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleTypeError {
    #[error("unknown battle-type bits {0:#010b}")]
    UnknownBits(u8),

    #[error("battle type {0:?} has no time class")]
    MissingTimeClass(BattleTypeFlags),

    #[error("battle type {0:?} has more than one time class")]
    ConflictingTimeClass(BattleTypeFlags),
}

impl BattleError for BattleTypeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBits(_) => "BATTLE_TYPE_UNKNOWN_BITS",
            Self::MissingTimeClass(_) => "BATTLE_TYPE_MISSING_TIME_CLASS",
            Self::ConflictingTimeClass(_) => "BATTLE_TYPE_CONFLICTING_TIME_CLASS",
        }
    }
}

impl BattleTypeDescriptor {
    pub const fn new(time: TimeOfDay, formation: Formation) -> Self {
        Self { time, formation }
    }

    pub fn from_bits(bits: u8) -> Result<Self, BattleTypeError> {
        let flags = BattleTypeFlags::from_bits(bits).ok_or(BattleTypeError::UnknownBits(bits))?;
        Self::from_flags(flags)
    }

    pub fn from_flags(flags: BattleTypeFlags) -> Result<Self, BattleTypeError> {
        let time_bits = flags & BattleTypeFlags::TIME_CLASS;
        let time = if time_bits == BattleTypeFlags::DAY {
            TimeOfDay::Day
        } else if time_bits == BattleTypeFlags::NIGHT {
            TimeOfDay::Night
        } else if time_bits == BattleTypeFlags::AIR_RAID {
            TimeOfDay::AirRaid
        } else if time_bits == BattleTypeFlags::AERIAL {
            TimeOfDay::AerialCombat
        } else if time_bits.is_empty() {
            return Err(BattleTypeError::MissingTimeClass(flags));
        } else {
            return Err(BattleTypeError::ConflictingTimeClass(flags));
        };

        let formation = if flags.contains(BattleTypeFlags::COMBINED) {
            Formation::Combined
        } else {
            Formation::Single
        };
        Ok(Self::new(time, formation))
    }

    pub fn flags(&self) -> BattleTypeFlags {
        let time = match self.time {
            TimeOfDay::Day => BattleTypeFlags::DAY,
            TimeOfDay::Night => BattleTypeFlags::NIGHT,
            TimeOfDay::AirRaid => BattleTypeFlags::AIR_RAID,
            TimeOfDay::AerialCombat => BattleTypeFlags::AERIAL,
        };
        match self.formation {
            Formation::Single => time,
            Formation::Combined => time | BattleTypeFlags::COMBINED,
        }
    }

    pub fn is_combined(&self) -> bool {
        self.formation == Formation::Combined
    }
}

impl core::fmt::Display for BattleTypeDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.time, self.formation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_descriptors() {
        let descriptor =
            BattleTypeDescriptor::from_flags(BattleTypeFlags::AIR_RAID | BattleTypeFlags::COMBINED)
                .unwrap();
        assert_eq!(descriptor.time, TimeOfDay::AirRaid);
        assert_eq!(descriptor.formation, Formation::Combined);
        assert_eq!(
            descriptor.flags(),
            BattleTypeFlags::AIR_RAID | BattleTypeFlags::COMBINED
        );
        assert_eq!(descriptor.to_string(), "air_raid/combined");
    }

    #[test]
    fn rejects_unrecognized_combinations() {
        assert_eq!(
            BattleTypeDescriptor::from_bits(0b1000_0001),
            Err(BattleTypeError::UnknownBits(0b1000_0001))
        );
        assert!(matches!(
            BattleTypeDescriptor::from_flags(BattleTypeFlags::COMBINED),
            Err(BattleTypeError::MissingTimeClass(_))
        ));
        let err =
            BattleTypeDescriptor::from_flags(BattleTypeFlags::DAY | BattleTypeFlags::NIGHT)
                .unwrap_err();
        assert_eq!(err.error_code(), "BATTLE_TYPE_CONFLICTING_TIME_CLASS");
    }
}
