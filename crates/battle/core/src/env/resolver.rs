//! Damage resolution seam.
//!
//! Phases supply the predicted power of a strike together with the
//! engagement context. Turning that into an applied HP delta (hit roll,
//! variance, defender mitigation) belongs to the collaborator behind
//! [`DamageResolver`].

use crate::battle::{Attacker, ParticipantIndex, PhaseKind, StrikeKind};
use crate::config::EngagementForm;
use crate::ship::{FleetRole, HpMeter};

/// One strike handed to the damage resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strike {
    pub phase: PhaseKind,
    pub attacker: Attacker,
    pub defender: ParticipantIndex,
    pub kind: StrikeKind,
    /// Predicted power from the power formulas.
    pub power: u32,
    pub form: EngagementForm,
    pub role: FleetRole,
    /// Defender HP before this strike.
    pub defender_hp: HpMeter,
    /// Defender armor total, for mitigation.
    pub defender_armor: i32,
    /// Position of this strike within the resolution; a stable seed source.
    pub sequence: u32,
}

/// Turns a predicted strike into an applied HP delta.
///
/// Implementations must be deterministic for a given [`Strike`] so a
/// resolution can be replayed. The returned value is clamped to the
/// defender's remaining HP by the battle state.
pub trait DamageResolver: Send + Sync {
    fn resolve(&self, strike: &Strike) -> u32;
}

/// Resolver applying the predicted power unchanged.
///
/// Useful for upper-bound estimates and for tests that need the power
/// values to flow straight into HP.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerAsDamage;

impl DamageResolver for PowerAsDamage {
    fn resolve(&self, strike: &Strike) -> u32 {
        strike.power
    }
}
