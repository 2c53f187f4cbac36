//! Anti-submarine power.

use tracing::trace;

use super::PowerContext;
use super::improvement::anti_submarine_bonus;
use super::modifiers::{finish, hp_penalty, soft_cap};
use crate::attack::{DayAttackKind, Loadout, SpecialAttacks, TargetClass, resolve_day_attack};
use crate::env::SubmarineCapability;
use crate::equipment::CategoryTag;
use crate::ship::Combatant;
use crate::synergy::AswEquipment;

pub const ANTI_SUBMARINE_CAP: f64 = 100.0;

/// Categories whose ASW stat feeds the equipment term.
fn counts_toward_asw(tag: CategoryTag) -> bool {
    use CategoryTag::*;
    matches!(
        tag,
        CarrierDiveBomber
            | CarrierTorpedoBomber
            | SeaplaneBomber
            | Sonar
            | DepthCharge
            | DepthChargeProjector
            | Autogyro
            | AswPatrolAircraft
            | LargeSonar
    )
}

/// Anti-submarine power; 0 when `capability` rules the ship out.
///
/// # Formula
///
/// ```text
/// base  = sqrt(asw_base) * 2 + equipment_asw * 1.5 + improvement
///       + (8 if the attack is an air attack, else 13)
/// power = trunc(floor(cap_fn(base * hp * form * synergy, 100)) * ammo)
/// ```
pub fn anti_submarine_power(
    ship: &Combatant,
    ctx: &PowerContext,
    capability: &dyn SubmarineCapability,
) -> u32 {
    if !capability.can_attack_submarine(ship) {
        return 0;
    }

    let equipment: i32 = ship
        .items()
        .filter(|item| counts_toward_asw(item.tag))
        .map(|item| item.master.stats.asw)
        .sum();
    let loadout = Loadout::of(ship);
    let kind = resolve_day_attack(&loadout, TargetClass::Submarine, SpecialAttacks::Suppressed);
    let attack_constant = if kind == DayAttackKind::AirAttack {
        8.0
    } else {
        13.0
    };

    let synergy = AswEquipment::from_counts(&loadout.counts).multiplier();
    let base = f64::from(ship.base_asw().max(0)).sqrt() * 2.0
        + f64::from(equipment) * 1.5
        + anti_submarine_bonus(ship)
        + attack_constant;
    let scaled = base * hp_penalty(ship.hp_ratio()) * ctx.form.multiplier() * synergy;
    let capped = soft_cap(scaled, ANTI_SUBMARINE_CAP).floor();
    let power = finish(capped, ship.ammo_ratio());

    trace!(ship = %ship.id(), base, synergy, capped, power, "anti-submarine power");
    power
}
