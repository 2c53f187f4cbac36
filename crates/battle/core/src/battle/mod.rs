//! Engagement model and phase pipeline.
//!
//! An [`Engagement`] holds both sides as they stand before the battle. The
//! [`BattleOrchestrator`] validates the battle type, builds the initial
//! [`BattleState`] and threads it through every phase of
//! [`phase_sequence`]. Each [`PhaseKind`] implements [`PhaseEmulation`].

mod emulate;
mod error;
mod kind;
mod orchestrator;
mod phase;
mod roster;
mod state;

pub use emulate::{OPENING_ASW_THRESHOLD, PhaseContext, PhaseEmulation};
pub use error::ResolveError;
pub use kind::{BattleTypeDescriptor, BattleTypeError, BattleTypeFlags, Formation, TimeOfDay};
pub use orchestrator::{BattleOrchestrator, BattleOutcome};
pub use phase::{Phase, PhaseKind, phase_kinds, phase_sequence};
pub use roster::{Engagement, FleetSlot, ParticipantIndex, Side};
pub use state::{Attacker, BattleState, DamageEvent, StrikeKind};
