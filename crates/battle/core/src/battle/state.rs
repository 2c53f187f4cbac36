//! Per-engagement battle state.
//!
//! [`BattleState`] holds the running HP of every participant and the
//! append-only damage log. One resolution owns it exclusively; phases take
//! it by value and hand it back.

use super::kind::Formation;
use super::phase::PhaseKind;
use super::roster::{Engagement, FleetSlot, ParticipantIndex};
use crate::attack::{DayAttackKind, NightAttackKind};
use crate::ship::HpMeter;

/// Who delivered a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attacker {
    Ship(ParticipantIndex),
    /// Land-based squadron, by its index in the engagement.
    Squadron(u8),
}

impl core::fmt::Display for Attacker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ship(index) => write!(f, "{index}"),
            Self::Squadron(index) => write!(f, "squadron#{index}"),
        }
    }
}

/// Delivery of a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrikeKind {
    AirStrike,
    JetStrike,
    BaseAirStrike,
    Torpedo,
    AntiSubmarine,
    Shelling(DayAttackKind),
    Night(NightAttackKind),
}

/// One applied strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEvent {
    pub phase: PhaseKind,
    pub attacker: Attacker,
    pub defender: ParticipantIndex,
    pub kind: StrikeKind,
    /// Predicted power handed to the damage resolver.
    pub power: u32,
    /// HP actually removed, after clamping to the defender's remaining HP.
    pub damage: u32,
    pub hp_after: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    hp: Vec<(ParticipantIndex, HpMeter)>,
    events: Vec<DamageEvent>,
}

impl BattleState {
    /// Initial state: every participant at its snapshot HP, no events.
    pub fn from_engagement(engagement: &Engagement) -> Self {
        Self {
            hp: engagement
                .participants()
                .map(|(index, ship)| (index, ship.hp))
                .collect(),
            events: Vec::new(),
        }
    }

    /// Initial state for a battle fought in `formation`. A single-fleet
    /// battle leaves escort fleets out of the HP table.
    pub fn for_formation(engagement: &Engagement, formation: Formation) -> Self {
        let mut state = Self::from_engagement(engagement);
        if formation == Formation::Single {
            state.hp.retain(|(index, _)| index.fleet == FleetSlot::Main);
        }
        state
    }

    pub fn hp(&self, index: ParticipantIndex) -> Option<HpMeter> {
        self.hp
            .iter()
            .find(|(candidate, _)| *candidate == index)
            .map(|&(_, hp)| hp)
    }

    pub fn is_afloat(&self, index: ParticipantIndex) -> bool {
        self.hp(index).is_some_and(|hp| !hp.is_sunk())
    }

    /// Every participant with its current HP.
    pub fn participants(&self) -> impl Iterator<Item = (ParticipantIndex, HpMeter)> + '_ {
        self.hp.iter().copied()
    }

    pub fn events(&self) -> &[DamageEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DamageEvent> {
        self.events
    }

    /// Total damage taken by one participant so far.
    pub fn damage_taken(&self, index: ParticipantIndex) -> u32 {
        self.events
            .iter()
            .filter(|event| event.defender == index)
            .map(|event| event.damage)
            .sum()
    }

    /// Applies `damage` to the defender and appends the event.
    ///
    /// Returns `None` without recording anything when the defender is not
    /// part of this state.
    pub fn apply(
        &mut self,
        phase: PhaseKind,
        attacker: Attacker,
        defender: ParticipantIndex,
        kind: StrikeKind,
        power: u32,
        damage: u32,
    ) -> Option<DamageEvent> {
        let (_, hp) = self.hp.iter_mut().find(|(index, _)| *index == defender)?;
        let damage = hp.take(damage);
        let event = DamageEvent {
            phase,
            attacker,
            defender,
            kind,
            power,
            damage,
            hp_after: hp.current(),
        };
        self.events.push(event);
        Some(event)
    }

    /// True when no participant has more HP here than in `earlier` and the
    /// event log extends it.
    pub fn follows(&self, earlier: &BattleState) -> bool {
        let hp_monotone = earlier.hp.iter().all(|&(index, before)| {
            self.hp(index)
                .is_some_and(|now| now.current() <= before.current())
        });
        hp_monotone && self.events.starts_with(&earlier.events)
    }
}
