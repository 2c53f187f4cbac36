//! Phase emulation.
//!
//! Every [`PhaseKind`] emulates itself against a [`BattleState`] it receives
//! by value. A phase selects attackers and targets, computes predicted power,
//! asks the [`DamageResolver`] for the applied delta and records it.
//!
//! # Eligibility
//!
//! - Sunk ships never act and are never targeted.
//! - Air phases strike surface ships only.
//! - Opening anti-submarine: ASW total of at least 100 and a sonar.
//! - Opening torpedo: submarines and midget-submarine carriers.
//! - Closing torpedo and night battle: heavily damaged ships hold fire.
//! - Carriers do not attack at night; submarines do not shell.
//! - Ships that can attack submarines go after them first in shelling.

use tracing::{debug, debug_span};

use super::kind::BattleTypeDescriptor;
use super::phase::PhaseKind;
use super::roster::{Engagement, FleetSlot, ParticipantIndex, Side};
use super::state::{Attacker, BattleState, StrikeKind};
use crate::attack::{
    Loadout, SpecialAttacks, TargetClass, resolve_day_attack, resolve_night_attack,
};
use crate::config::CombinedFleetKind;
use crate::env::{DamageResolver, Strike, SubmarineCapability};
use crate::equipment::CategoryTag;
use crate::power::{
    PowerContext, air_battle_power, aircraft_power, anti_submarine_power, jet_strike_power,
    night_power, shelling_power, squadron_power, torpedo_power,
};
use crate::ship::{Combatant, FleetRole};

/// Minimum ASW total for the opening anti-submarine attack.
pub const OPENING_ASW_THRESHOLD: i32 = 100;

/// Read-only inputs shared by every phase of one resolution.
#[derive(Clone, Copy)]
pub struct PhaseContext<'a> {
    pub engagement: &'a Engagement,
    pub descriptor: BattleTypeDescriptor,
    pub capability: &'a dyn SubmarineCapability,
    pub resolver: &'a dyn DamageResolver,
}

impl core::fmt::Debug for PhaseContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PhaseContext")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// A phase's single capability: consume the state, return the next one.
pub trait PhaseEmulation {
    fn emulate(&self, state: BattleState, ctx: &PhaseContext<'_>) -> BattleState;
}

/// Strike chosen but not yet resolved.
#[derive(Clone, Copy, Debug)]
struct Planned {
    attacker: Attacker,
    defender: ParticipantIndex,
    kind: StrikeKind,
    power: u32,
    role: FleetRole,
}

impl<'a> PhaseContext<'a> {
    pub fn new(
        engagement: &'a Engagement,
        descriptor: BattleTypeDescriptor,
        capability: &'a dyn SubmarineCapability,
        resolver: &'a dyn DamageResolver,
    ) -> Self {
        Self {
            engagement,
            descriptor,
            capability,
            resolver,
        }
    }

    /// Power context of one side; only a combined friendly side gets role
    /// offsets.
    pub fn power_context(&self, side: Side) -> PowerContext {
        let combined = if side == Side::Friend && self.descriptor.is_combined() {
            self.engagement.config.combined_fleet
        } else {
            CombinedFleetKind::None
        };
        PowerContext::new(self.engagement.config.engagement_form, combined)
    }

    fn fleets(&self, phase: PhaseKind, side: Side) -> Vec<FleetSlot> {
        match phase.acting_fleet(self.descriptor.formation) {
            None => vec![FleetSlot::Main, FleetSlot::Escort],
            Some(preferred) => vec![self.engagement.fighting_fleet(side, preferred)],
        }
    }

    /// Afloat ships of `side` taking part in `phase`, with HP from `state`.
    fn acting(
        &self,
        phase: PhaseKind,
        side: Side,
        state: &BattleState,
    ) -> Vec<(ParticipantIndex, Combatant)> {
        let engagement = self.engagement;
        self.fleets(phase, side)
            .into_iter()
            .flat_map(move |fleet| engagement.members(side, fleet))
            .filter_map(|(index, ship)| {
                let hp = state.hp(index).filter(|hp| !hp.is_sunk())?;
                let mut ship = ship.clone();
                ship.hp = hp;
                Some((index, ship))
            })
            .collect()
    }

    /// First afloat opponent of `side` in `phase` accepted by `filter`.
    fn target(
        &self,
        phase: PhaseKind,
        side: Side,
        state: &BattleState,
        filter: impl Fn(&Combatant) -> bool,
    ) -> Option<(ParticipantIndex, &'a Combatant)> {
        let engagement = self.engagement;
        let opponent = side.opponent();
        self.fleets(phase, opponent)
            .into_iter()
            .flat_map(move |fleet| engagement.members(opponent, fleet))
            .find(|(index, ship)| state.is_afloat(*index) && filter(*ship))
    }

    fn surface_target(
        &self,
        phase: PhaseKind,
        side: Side,
        state: &BattleState,
    ) -> Option<(ParticipantIndex, &'a Combatant)> {
        self.target(phase, side, state, |ship| !ship.hull().is_submarine())
    }

    fn submarine_target(
        &self,
        phase: PhaseKind,
        side: Side,
        state: &BattleState,
    ) -> Option<(ParticipantIndex, &'a Combatant)> {
        self.target(phase, side, state, |ship| ship.hull().is_submarine())
    }
}

fn land(phase: PhaseKind, state: &mut BattleState, ctx: &PhaseContext<'_>, planned: Planned) {
    let Some(defender_hp) = state.hp(planned.defender) else {
        return;
    };
    let defender_armor = ctx
        .engagement
        .combatant(planned.defender)
        .map_or(0, |ship| ship.stats.armor);
    let strike = Strike {
        phase,
        attacker: planned.attacker,
        defender: planned.defender,
        kind: planned.kind,
        power: planned.power,
        form: ctx.engagement.config.engagement_form,
        role: planned.role,
        defender_hp,
        defender_armor,
        sequence: state.events().len() as u32,
    };
    let damage = ctx.resolver.resolve(&strike);
    if let Some(event) = state.apply(
        phase,
        planned.attacker,
        planned.defender,
        planned.kind,
        planned.power,
        damage,
    ) {
        debug!(
            attacker = %event.attacker,
            defender = %event.defender,
            kind = ?event.kind,
            power = event.power,
            damage = event.damage,
            hp_after = event.hp_after,
            "strike"
        );
    }
}

/// Resolves strikes selected from the phase-start state.
fn land_all(
    phase: PhaseKind,
    mut state: BattleState,
    ctx: &PhaseContext<'_>,
    planned: Vec<Planned>,
) -> BattleState {
    for strike in planned {
        land(phase, &mut state, ctx, strike);
    }
    state
}

// ============================================================================
// Air phases
// ============================================================================

fn squadron_strikes(
    phase: PhaseKind,
    state: BattleState,
    ctx: &PhaseContext<'_>,
    jets: bool,
) -> BattleState {
    let planned = ctx
        .engagement
        .squadrons()
        .iter()
        .enumerate()
        .filter(|(_, squadron)| squadron.is_jet() == jets)
        .filter_map(|(index, squadron)| {
            let power = squadron_power(squadron);
            let (defender, _) = ctx.surface_target(phase, Side::Friend, &state)?;
            (power > 0).then_some(Planned {
                attacker: Attacker::Squadron(index as u8),
                defender,
                kind: StrikeKind::BaseAirStrike,
                power,
                role: FleetRole::None,
            })
        })
        .collect();
    land_all(phase, state, ctx, planned)
}

fn carrier_strikes(
    phase: PhaseKind,
    state: BattleState,
    ctx: &PhaseContext<'_>,
    power: fn(&Combatant) -> u32,
    kind: StrikeKind,
) -> BattleState {
    let mut planned = Vec::new();
    for side in [Side::Friend, Side::Enemy] {
        for (index, ship) in ctx.acting(phase, side, &state) {
            let power = power(&ship);
            if power == 0 {
                continue;
            }
            if let Some((defender, _)) = ctx.surface_target(phase, side, &state) {
                planned.push(Planned {
                    attacker: Attacker::Ship(index),
                    defender,
                    kind,
                    power,
                    role: ship.role,
                });
            }
        }
    }
    land_all(phase, state, ctx, planned)
}

// ============================================================================
// Opening and closing phases
// ============================================================================

fn opening_anti_submarine(
    phase: PhaseKind,
    state: BattleState,
    ctx: &PhaseContext<'_>,
) -> BattleState {
    let mut planned = Vec::new();
    for side in [Side::Friend, Side::Enemy] {
        let power_ctx = ctx.power_context(side);
        for (index, ship) in ctx.acting(phase, side, &state) {
            if ship.stats.asw < OPENING_ASW_THRESHOLD || ship.counts().sonars() == 0 {
                continue;
            }
            let power = anti_submarine_power(&ship, &power_ctx, ctx.capability);
            if power == 0 {
                continue;
            }
            if let Some((defender, _)) = ctx.submarine_target(phase, side, &state) {
                planned.push(Planned {
                    attacker: Attacker::Ship(index),
                    defender,
                    kind: StrikeKind::AntiSubmarine,
                    power,
                    role: ship.role,
                });
            }
        }
    }
    land_all(phase, state, ctx, planned)
}

fn torpedo_salvo(phase: PhaseKind, state: BattleState, ctx: &PhaseContext<'_>) -> BattleState {
    let mut planned = Vec::new();
    for side in [Side::Friend, Side::Enemy] {
        let power_ctx = ctx.power_context(side);
        for (index, ship) in ctx.acting(phase, side, &state) {
            let eligible = match phase {
                PhaseKind::OpeningTorpedo => {
                    ship.hull().is_submarine() || ship.counts().has(CategoryTag::MidgetSubmarine)
                }
                _ => !ship.is_heavily_damaged(),
            };
            if !eligible {
                continue;
            }
            let power = torpedo_power(&ship, &power_ctx);
            if power == 0 {
                continue;
            }
            if let Some((defender, _)) = ctx.surface_target(phase, side, &state) {
                planned.push(Planned {
                    attacker: Attacker::Ship(index),
                    defender,
                    kind: StrikeKind::Torpedo,
                    power,
                    role: ship.role,
                });
            }
        }
    }
    land_all(phase, state, ctx, planned)
}

// ============================================================================
// Sequential phases
// ============================================================================

/// Friend 1, enemy 1, friend 2, enemy 2, ... as listed at phase start.
fn turn_order(
    phase: PhaseKind,
    ctx: &PhaseContext<'_>,
    state: &BattleState,
) -> Vec<(Side, ParticipantIndex)> {
    let friends = ctx.acting(phase, Side::Friend, state);
    let enemies = ctx.acting(phase, Side::Enemy, state);
    let rounds = friends.len().max(enemies.len());
    (0..rounds)
        .flat_map(|i| {
            let friend = friends.get(i).map(|(index, _)| (Side::Friend, *index));
            let enemy = enemies.get(i).map(|(index, _)| (Side::Enemy, *index));
            friend.into_iter().chain(enemy)
        })
        .collect()
}

/// The attacker as it stands now, or `None` once sunk.
fn current(
    ctx: &PhaseContext<'_>,
    state: &BattleState,
    index: ParticipantIndex,
) -> Option<Combatant> {
    let hp = state.hp(index).filter(|hp| !hp.is_sunk())?;
    let mut ship = ctx.engagement.combatant(index)?.clone();
    ship.hp = hp;
    Some(ship)
}

fn shelling(phase: PhaseKind, mut state: BattleState, ctx: &PhaseContext<'_>) -> BattleState {
    for (side, index) in turn_order(phase, ctx, &state) {
        let Some(ship) = current(ctx, &state, index) else {
            continue;
        };
        if ship.hull().is_submarine() {
            continue;
        }
        let power_ctx = ctx.power_context(side);

        let anti_sub = if ctx.capability.can_attack_submarine(&ship) {
            ctx.submarine_target(phase, side, &state)
        } else {
            None
        };
        let planned = if let Some((defender, _)) = anti_sub {
            Planned {
                attacker: Attacker::Ship(index),
                defender,
                kind: StrikeKind::AntiSubmarine,
                power: anti_submarine_power(&ship, &power_ctx, ctx.capability),
                role: ship.role,
            }
        } else if let Some((defender, target)) = ctx.surface_target(phase, side, &state) {
            let kind = resolve_day_attack(
                &Loadout::of(&ship),
                TargetClass::of(target),
                SpecialAttacks::Allowed,
            );
            Planned {
                attacker: Attacker::Ship(index),
                defender,
                kind: StrikeKind::Shelling(kind),
                power: shelling_power(&ship, &power_ctx).max(aircraft_power(&ship, &power_ctx)),
                role: ship.role,
            }
        } else {
            continue;
        };

        if planned.power > 0 {
            land(phase, &mut state, ctx, planned);
        }
    }
    state
}

fn night_battle(phase: PhaseKind, mut state: BattleState, ctx: &PhaseContext<'_>) -> BattleState {
    for (side, index) in turn_order(phase, ctx, &state) {
        let Some(ship) = current(ctx, &state, index) else {
            continue;
        };
        if ship.hull().is_carrier() || ship.is_heavily_damaged() {
            continue;
        }
        let Some((defender, target)) = ctx.surface_target(phase, side, &state) else {
            continue;
        };
        let power = night_power(&ship);
        if power == 0 {
            continue;
        }
        let kind = resolve_night_attack(
            &Loadout::of(&ship),
            TargetClass::of(target),
            SpecialAttacks::Allowed,
        );
        land(
            phase,
            &mut state,
            ctx,
            Planned {
                attacker: Attacker::Ship(index),
                defender,
                kind: StrikeKind::Night(kind),
                power,
                role: ship.role,
            },
        );
    }
    state
}

impl PhaseEmulation for PhaseKind {
    fn emulate(&self, state: BattleState, ctx: &PhaseContext<'_>) -> BattleState {
        let phase = *self;
        let _span = debug_span!("phase", %phase).entered();
        let before = state.events().len();

        let state = match phase {
            Self::Initial | Self::Searching => state,
            Self::JetBaseAirAttack => squadron_strikes(phase, state, ctx, true),
            Self::BaseAirAttack => squadron_strikes(phase, state, ctx, false),
            Self::JetAirBattle => {
                carrier_strikes(phase, state, ctx, jet_strike_power, StrikeKind::JetStrike)
            }
            Self::AirBattle | Self::AirBattle2 => {
                carrier_strikes(phase, state, ctx, air_battle_power, StrikeKind::AirStrike)
            }
            Self::OpeningAntiSubmarine => opening_anti_submarine(phase, state, ctx),
            Self::OpeningTorpedo | Self::ClosingTorpedo => torpedo_salvo(phase, state, ctx),
            Self::Shelling1 | Self::Shelling2 | Self::Shelling3 => shelling(phase, state, ctx),
            Self::NightBattle => night_battle(phase, state, ctx),
        };

        debug!(strikes = state.events().len() - before, "phase complete");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::kind::{Formation, TimeOfDay};
    use crate::config::BattleConfig;
    use crate::env::{HullCapability, HullClass, PowerAsDamage, StatRange};
    use crate::ship::test_support::*;

    fn ctx<'a>(engagement: &'a Engagement, time: TimeOfDay) -> PhaseContext<'a> {
        PhaseContext::new(
            engagement,
            BattleTypeDescriptor::new(time, Formation::Single),
            &HullCapability,
            &PowerAsDamage,
        )
    }

    fn gunship(hull: HullClass, firepower: i32) -> Combatant {
        let mut ship = combatant(hull);
        ship.stats.firepower = firepower;
        ship
    }

    fn index(side: Side, position: u8) -> ParticipantIndex {
        ParticipantIndex::new(side, FleetSlot::Main, position)
    }

    #[test]
    fn shelling_interleaves_sides() {
        let engagement = Engagement::new(BattleConfig::default())
            .with_ships(
                Side::Friend,
                FleetSlot::Main,
                [gunship(HullClass::Battleship, 5), gunship(HullClass::Battleship, 5)],
            )
            .and_then(|e| {
                e.with_ships(Side::Enemy, FleetSlot::Main, [gunship(HullClass::Destroyer, 5)])
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Day);
        let state = PhaseKind::Shelling1.emulate(BattleState::from_engagement(&engagement), &ctx);

        let attackers: Vec<_> = state.events().iter().map(|e| e.attacker).collect();
        assert_eq!(
            attackers,
            vec![
                Attacker::Ship(index(Side::Friend, 0)),
                Attacker::Ship(index(Side::Enemy, 0)),
                Attacker::Ship(index(Side::Friend, 1)),
            ]
        );
        assert!(state.events().iter().all(|e| e.power == 10));
    }

    #[test]
    fn sunk_ships_do_not_fire_back() {
        let engagement = Engagement::default()
            .with_ships(Side::Friend, FleetSlot::Main, [gunship(HullClass::Battleship, 95)])
            .and_then(|e| {
                e.with_ships(Side::Enemy, FleetSlot::Main, [gunship(HullClass::Destroyer, 95)])
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Day);
        let state = PhaseKind::Shelling1.emulate(BattleState::from_engagement(&engagement), &ctx);

        assert_eq!(state.events().len(), 1);
        assert!(!state.is_afloat(index(Side::Enemy, 0)));
        assert_eq!(state.hp(index(Side::Friend, 0)).map(|hp| hp.current()), Some(40));
    }

    #[test]
    fn torpedo_salvo_is_simultaneous() {
        let mut torpedo_boat = combatant(HullClass::Destroyer);
        torpedo_boat.master.torpedo = StatRange::new(24, 79);
        torpedo_boat.stats.torpedo = 45;
        let engagement = Engagement::default()
            .with_ships(Side::Friend, FleetSlot::Main, [torpedo_boat.clone()])
            .and_then(|e| e.with_ships(Side::Enemy, FleetSlot::Main, [torpedo_boat]))
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Day);
        let state =
            PhaseKind::ClosingTorpedo.emulate(BattleState::from_engagement(&engagement), &ctx);

        assert_eq!(state.events().len(), 2);
        assert!(!state.is_afloat(index(Side::Friend, 0)));
        assert!(!state.is_afloat(index(Side::Enemy, 0)));
    }

    #[test]
    fn opening_torpedo_needs_submarine_or_midget() {
        let mut destroyer = combatant(HullClass::Destroyer);
        destroyer.master.torpedo = StatRange::new(24, 79);
        destroyer.stats.torpedo = 45;
        let mut carrier_of_midgets = destroyer.clone();
        carrier_of_midgets.equip(0, item(41, 22, 0, Default::default()));

        let engagement = Engagement::default()
            .with_ships(Side::Friend, FleetSlot::Main, [destroyer, carrier_of_midgets])
            .and_then(|e| {
                e.with_ships(Side::Enemy, FleetSlot::Main, [combatant(HullClass::Battleship)])
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Day);
        let state =
            PhaseKind::OpeningTorpedo.emulate(BattleState::from_engagement(&engagement), &ctx);

        assert_eq!(state.events().len(), 1);
        assert_eq!(state.events()[0].attacker, Attacker::Ship(index(Side::Friend, 1)));
    }

    #[test]
    fn escorts_prefer_submarines_in_shelling() {
        let mut escort = gunship(HullClass::Destroyer, 10);
        escort.stats.asw = 64;
        let engagement = Engagement::default()
            .with_ships(Side::Friend, FleetSlot::Main, [escort])
            .and_then(|e| {
                e.with_ships(
                    Side::Enemy,
                    FleetSlot::Main,
                    [combatant(HullClass::Battleship), combatant(HullClass::Submarine)],
                )
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Day);
        let state = PhaseKind::Shelling1.emulate(BattleState::from_engagement(&engagement), &ctx);

        let event = state.events()[0];
        assert_eq!(event.kind, StrikeKind::AntiSubmarine);
        assert_eq!(event.defender, index(Side::Enemy, 1));
        assert_eq!(event.power, 29);
    }

    #[test]
    fn carriers_and_cripples_sit_out_the_night() {
        let mut cripple = gunship(HullClass::Destroyer, 60);
        cripple.hp = crate::ship::HpMeter::new(5, 40);
        let engagement = Engagement::default()
            .with_ships(
                Side::Friend,
                FleetSlot::Main,
                [gunship(HullClass::StandardCarrier, 60), cripple],
            )
            .and_then(|e| {
                e.with_ships(Side::Enemy, FleetSlot::Main, [gunship(HullClass::Destroyer, 10)])
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::Night);
        let state =
            PhaseKind::NightBattle.emulate(BattleState::from_engagement(&engagement), &ctx);

        assert_eq!(state.events().len(), 1);
        assert_eq!(state.events()[0].attacker, Attacker::Ship(index(Side::Enemy, 0)));
        assert_eq!(
            state.events()[0].kind,
            StrikeKind::Night(crate::attack::NightAttackKind::Normal)
        );
    }

    #[test]
    fn air_battle_uses_strongest_slot() {
        let mut carrier = combatant(HullClass::StandardCarrier);
        carrier.equip(0, dive_bomber(10));
        carrier.slots[0].aircraft = 16;
        let engagement = Engagement::default()
            .with_ships(Side::Friend, FleetSlot::Main, [carrier])
            .and_then(|e| {
                e.with_ships(
                    Side::Enemy,
                    FleetSlot::Main,
                    [combatant(HullClass::Submarine), combatant(HullClass::Battleship)],
                )
            })
            .unwrap();
        let ctx = ctx(&engagement, TimeOfDay::AirRaid);
        let state = PhaseKind::AirBattle.emulate(BattleState::from_engagement(&engagement), &ctx);

        assert_eq!(state.events().len(), 1);
        assert_eq!(state.events()[0].defender, index(Side::Enemy, 1));
        assert_eq!(state.events()[0].power, 65);
    }

    #[test]
    fn friendly_combined_side_gets_role_offsets() {
        let config = BattleConfig::default()
            .with_combined_fleet(CombinedFleetKind::SurfaceTaskForce);
        let engagement = Engagement::new(config);
        let single = PhaseContext::new(
            &engagement,
            BattleTypeDescriptor::new(TimeOfDay::Day, Formation::Single),
            &HullCapability,
            &PowerAsDamage,
        );
        assert_eq!(single.power_context(Side::Friend).combined, CombinedFleetKind::None);

        let combined = PhaseContext {
            descriptor: BattleTypeDescriptor::new(TimeOfDay::Day, Formation::Combined),
            ..single
        };
        assert_eq!(
            combined.power_context(Side::Friend).combined,
            CombinedFleetKind::SurfaceTaskForce
        );
        assert_eq!(combined.power_context(Side::Enemy).combined, CombinedFleetKind::None);
    }
}
