//! Phase tables.
//!
//! Every battle type maps to a fixed, ordered list of phases. Initial and
//! Searching always come first.

use super::kind::{BattleTypeDescriptor, Formation, TimeOfDay};
use super::roster::FleetSlot;

/// One named stage of an engagement.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum PhaseKind {
    Initial,
    Searching,
    JetBaseAirAttack,
    JetAirBattle,
    BaseAirAttack,
    AirBattle,
    AirBattle2,
    OpeningAntiSubmarine,
    OpeningTorpedo,
    Shelling1,
    Shelling2,
    Shelling3,
    ClosingTorpedo,
    NightBattle,
}

impl PhaseKind {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Searching => "Searching",
            Self::JetBaseAirAttack => "Jet Base Air Attack",
            Self::JetAirBattle => "Jet Air Battle",
            Self::BaseAirAttack => "Base Air Attack",
            Self::AirBattle => "Air Battle",
            Self::AirBattle2 => "Air Battle (2nd wave)",
            Self::OpeningAntiSubmarine => "Opening Anti-Submarine",
            Self::OpeningTorpedo => "Opening Torpedo",
            Self::Shelling1 => "Shelling (1st round)",
            Self::Shelling2 => "Shelling (2nd round)",
            Self::Shelling3 => "Shelling (3rd round)",
            Self::ClosingTorpedo => "Closing Torpedo",
            Self::NightBattle => "Night Battle",
        }
    }

    /// Strikes are chosen from the state at phase start and land together.
    pub const fn is_simultaneous(self) -> bool {
        !matches!(
            self,
            Self::Shelling1 | Self::Shelling2 | Self::Shelling3 | Self::NightBattle
        )
    }

    /// Fleet that acts in this phase; `None` means every fleet.
    ///
    /// A single-fleet battle only ever fields the main fleet.
    pub const fn acting_fleet(self, formation: Formation) -> Option<FleetSlot> {
        match (self, formation) {
            (_, Formation::Single) => Some(FleetSlot::Main),
            (
                Self::JetBaseAirAttack
                | Self::JetAirBattle
                | Self::BaseAirAttack
                | Self::AirBattle
                | Self::AirBattle2,
                Formation::Combined,
            ) => None,
            (Self::Shelling2 | Self::Shelling3, Formation::Combined) => Some(FleetSlot::Main),
            (_, Formation::Combined) => Some(FleetSlot::Escort),
        }
    }
}

/// A phase at its position in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    pub kind: PhaseKind,
    /// Zero-based position in the sequence.
    pub ordinal: u8,
}

impl Phase {
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{} {}", self.ordinal, self.kind.display_name())
    }
}

use PhaseKind::*;

const AIR_PHASES: [PhaseKind; 6] = [
    Initial,
    Searching,
    JetBaseAirAttack,
    JetAirBattle,
    BaseAirAttack,
    AirBattle,
];

const DAY_SINGLE: [PhaseKind; 11] = [
    Initial,
    Searching,
    JetBaseAirAttack,
    JetAirBattle,
    BaseAirAttack,
    AirBattle,
    OpeningAntiSubmarine,
    OpeningTorpedo,
    Shelling1,
    Shelling2,
    ClosingTorpedo,
];

const DAY_COMBINED: [PhaseKind; 12] = [
    Initial,
    Searching,
    JetBaseAirAttack,
    JetAirBattle,
    BaseAirAttack,
    AirBattle,
    OpeningAntiSubmarine,
    OpeningTorpedo,
    Shelling1,
    ClosingTorpedo,
    Shelling2,
    Shelling3,
];

const NIGHT: [PhaseKind; 3] = [Initial, Searching, NightBattle];

const AERIAL: [PhaseKind; 7] = [
    Initial,
    Searching,
    JetBaseAirAttack,
    JetAirBattle,
    BaseAirAttack,
    AirBattle,
    AirBattle2,
];

/// Phase kinds of a battle type, in execution order.
pub fn phase_kinds(descriptor: BattleTypeDescriptor) -> &'static [PhaseKind] {
    match (descriptor.time, descriptor.formation) {
        (TimeOfDay::Day, Formation::Single) => &DAY_SINGLE,
        (TimeOfDay::Day, Formation::Combined) => &DAY_COMBINED,
        (TimeOfDay::Night, _) => &NIGHT,
        (TimeOfDay::AirRaid, _) => &AIR_PHASES,
        (TimeOfDay::AerialCombat, _) => &AERIAL,
    }
}

/// Ordered phases of a battle type.
pub fn phase_sequence(descriptor: BattleTypeDescriptor) -> Vec<Phase> {
    phase_kinds(descriptor)
        .iter()
        .enumerate()
        .map(|(ordinal, &kind)| Phase {
            kind,
            ordinal: ordinal as u8,
        })
        .collect()
}
