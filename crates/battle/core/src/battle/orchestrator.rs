//! Battle orchestration.
//!
//! The [`BattleOrchestrator`] is the only place a [`BattleState`] is created
//! and threaded through the phases of one engagement. It validates the
//! battle type and the roster up front, then runs every phase of the
//! sequence in order.

use tracing::{debug, debug_span, warn};

use super::emulate::{PhaseContext, PhaseEmulation};
use super::error::ResolveError;
use super::kind::{BattleTypeDescriptor, BattleTypeFlags, Formation};
use super::phase::{Phase, phase_sequence};
use super::roster::{Engagement, FleetSlot, ParticipantIndex, Side};
use super::state::{BattleState, DamageEvent};
use crate::env::BattleEnv;

/// Final state of one resolution together with the phases that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub descriptor: BattleTypeDescriptor,
    pub phases: Vec<Phase>,
    pub state: BattleState,
}

impl BattleOutcome {
    pub fn events(&self) -> &[DamageEvent] {
        self.state.events()
    }

    /// Remaining HP of one participant.
    pub fn hp(&self, index: ParticipantIndex) -> Option<u32> {
        self.state.hp(index).map(|hp| hp.current())
    }

    /// Participants of `side` still afloat.
    pub fn survivors(&self, side: Side) -> impl Iterator<Item = ParticipantIndex> + '_ {
        self.state
            .participants()
            .filter(move |(index, hp)| index.side == side && !hp.is_sunk())
            .map(|(index, _)| index)
    }

    /// Damage dealt to `side` over the whole engagement.
    pub fn damage_taken(&self, side: Side) -> u32 {
        self.events()
            .iter()
            .filter(|event| event.defender.side == side)
            .map(|event| event.damage)
            .sum()
    }
}

/// Runs the phase pipeline of an engagement.
pub struct BattleOrchestrator<'a> {
    env: BattleEnv<'a>,
}

impl<'a> BattleOrchestrator<'a> {
    pub fn new(env: BattleEnv<'a>) -> Self {
        Self { env }
    }

    /// Resolves a battle whose type arrives as raw flags.
    pub fn resolve_flags(
        &self,
        engagement: &Engagement,
        flags: BattleTypeFlags,
    ) -> Result<BattleOutcome, ResolveError> {
        let descriptor = BattleTypeDescriptor::from_flags(flags)?;
        self.resolve(engagement, descriptor)
    }

    /// Resolves every phase of `descriptor` against `engagement`.
    ///
    /// Fails before the first phase when the environment lacks the
    /// submarine policy or the damage resolver, or when a combined battle
    /// has no friendly escort fleet.
    pub fn resolve(
        &self,
        engagement: &Engagement,
        descriptor: BattleTypeDescriptor,
    ) -> Result<BattleOutcome, ResolveError> {
        let capability = self.env.capability()?;
        let resolver = self.env.resolver()?;

        if descriptor.formation == Formation::Combined
            && engagement.fleet(Side::Friend, FleetSlot::Escort).is_empty()
        {
            return Err(ResolveError::MissingEscortFleet);
        }
        if descriptor.formation == Formation::Single
            && !engagement.fleet(Side::Friend, FleetSlot::Escort).is_empty()
        {
            debug!("escort fleet sits out a single-fleet battle");
        }

        let span = debug_span!("resolve", battle = %descriptor);
        let _guard = span.enter();

        let ctx = PhaseContext::new(engagement, descriptor, capability, resolver);
        let phases = phase_sequence(descriptor);
        let mut state = BattleState::for_formation(engagement, descriptor.formation);

        for phase in &phases {
            let before = state.clone();
            state = phase.kind.emulate(state, &ctx);
            if !state.follows(&before) {
                warn!(phase = %phase, "phase broke HP monotonicity or rewrote the log");
            }
        }

        debug!(
            phases = phases.len(),
            strikes = state.events().len(),
            "battle resolved"
        );

        Ok(BattleOutcome {
            descriptor,
            phases,
            state,
        })
    }
}

impl core::fmt::Debug for BattleOrchestrator<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleOrchestrator")
            .field("env", &self.env)
            .finish()
    }
}
