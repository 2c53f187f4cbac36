use crate::env::HullClass;
use crate::ship::Combatant;

/// What the attacker is shooting at.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TargetClass {
    #[default]
    Surface,
    Submarine,
    Installation,
}

impl TargetClass {
    pub fn of(target: &Combatant) -> Self {
        match target.hull() {
            HullClass::Installation => Self::Installation,
            hull if hull.is_submarine() => Self::Submarine,
            _ => Self::Surface,
        }
    }
}

/// Whether special attacks (cut-ins, double attacks) are considered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialAttacks {
    #[default]
    Allowed,
    Suppressed,
}

impl SpecialAttacks {
    pub const fn allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}
