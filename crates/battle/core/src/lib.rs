//! Deterministic power formulas and phase pipeline for naval engagements.
//!
//! `battle-core` owns the canonical combat rules: equipment classification,
//! per-category power formulas, special-attack resolution, anti-submarine
//! synergy and the ordered phase pipeline that replays one engagement. It
//! performs no I/O; master data, the submarine-attack policy and damage
//! resolution are reached through the read-only oracles in [`env`].
//! All battle-state mutation flows through [`battle::BattleOrchestrator`].
pub mod attack;
pub mod battle;
pub mod config;
pub mod env;
pub mod equipment;
pub mod error;
pub mod power;
pub mod ship;
pub mod synergy;

pub use attack::{
    DayAttackKind, Loadout, NightAttackKind, SpecialAttacks, TargetClass, TorpedoCutinKind,
    resolve_day_attack, resolve_night_attack, resolve_torpedo_cutin,
};
pub use battle::{
    Attacker, BattleOrchestrator, BattleOutcome, BattleState, BattleTypeDescriptor,
    BattleTypeError, BattleTypeFlags, DamageEvent, Engagement, FleetSlot, Formation,
    ParticipantIndex, Phase, PhaseContext, PhaseEmulation, PhaseKind, ResolveError, Side,
    StrikeKind, TimeOfDay, phase_sequence,
};
pub use config::{BattleConfig, CombinedFleetKind, EngagementForm};
pub use env::{
    BattleEnv, DamageResolver, EquipmentId, EquipmentMaster, EquipmentOracle, EquipmentStats,
    HullCapability, HullClass, MasterSnapshot, OracleError, PowerAsDamage, ShipId, ShipMaster,
    ShipOracle, StatRange, Strike, SubmarineCapability,
};
pub use equipment::{CategoryCounts, CategoryTag, EquippedItem, Squadron, classify};
pub use error::{BattleError, ErrorSeverity};
pub use power::{PowerContext, PowerProfile};
pub use ship::{
    Combatant, CombatantBuilder, CombatantError, ExpansionSlot, FleetRole, Gauge, HpMeter,
    Modernization, Slot, StatTotals,
};
pub use synergy::AswEquipment;
