//! Daytime shelling, aircraft and torpedo power.

use tracing::trace;

use super::fit::fit_bonus;
use super::improvement::{aircraft_bonus, shelling_bonus, torpedo_bonus};
use super::modifiers::{
    combined_shelling_bonus, combined_torpedo_bonus, finish, hp_penalty, soft_cap,
};
use super::PowerContext;
use crate::attack::{Loadout, SpecialAttacks, TargetClass, resolve_day_attack};
use crate::ship::Combatant;

pub const SHELLING_CAP: f64 = 180.0;
pub const TORPEDO_CAP: f64 = 150.0;

fn flies_air_attacks(loadout: &Loadout) -> bool {
    resolve_day_attack(loadout, TargetClass::Surface, SpecialAttacks::Suppressed).is_air_attack()
}

/// Shelling power against a surface target.
///
/// # Formula
///
/// ```text
/// base   = (firepower + improvement + combined + 5) * hp * form + fits
/// capped = floor(cap_fn(base, 180)) * spotting multiplier
/// power  = trunc(capped * ammo)
/// ```
///
/// Ships whose shelling is an air attack score 0 here; see
/// [`aircraft_power`].
pub fn shelling_power(ship: &Combatant, ctx: &PowerContext) -> u32 {
    let loadout = Loadout::of(ship);
    if flies_air_attacks(&loadout) {
        return 0;
    }

    let base = (f64::from(ship.stats.firepower)
        + shelling_bonus(ship)
        + combined_shelling_bonus(ctx, ship.role)
        + 5.0)
        * hp_penalty(ship.hp_ratio())
        * ctx.form.multiplier()
        + fit_bonus(ship);
    let capped = soft_cap(base, SHELLING_CAP).floor();
    let kind = resolve_day_attack(&loadout, TargetClass::Surface, SpecialAttacks::Allowed);
    let power = finish(capped * kind.shelling_multiplier(), ship.ammo_ratio());

    trace!(ship = %ship.id(), base, capped, %kind, power, "shelling power");
    power
}

/// Air-attack power of carriers during shelling; 0 for gunships.
///
/// # Formula
///
/// ```text
/// base  = floor((firepower + torpedo + floor(bomber * 1.3) + improvement + combined) * 1.5) + 55
/// power = trunc(floor(cap_fn(base * hp * form, 180)) * ammo)
/// ```
pub fn aircraft_power(ship: &Combatant, ctx: &PowerContext) -> u32 {
    let loadout = Loadout::of(ship);
    if !flies_air_attacks(&loadout) {
        return 0;
    }

    let raw = f64::from(ship.stats.firepower)
        + f64::from(ship.stats.torpedo)
        + (f64::from(ship.bomber_total()) * 1.3).floor()
        + aircraft_bonus(ship)
        + combined_shelling_bonus(ctx, ship.role);
    let base = (raw * 1.5).floor() + 55.0;
    let scaled = base * hp_penalty(ship.hp_ratio()) * ctx.form.multiplier();
    let capped = soft_cap(scaled, SHELLING_CAP).floor();
    let power = finish(capped, ship.ammo_ratio());

    trace!(ship = %ship.id(), base, capped, power, "aircraft power");
    power
}

/// Torpedo salvo power; 0 for hulls without a base torpedo stat.
pub fn torpedo_power(ship: &Combatant, ctx: &PowerContext) -> u32 {
    if ship.base_torpedo() == 0 {
        return 0;
    }

    let base = (f64::from(ship.stats.torpedo)
        + torpedo_bonus(ship)
        + combined_torpedo_bonus(ctx, ship.role)
        + 5.0)
        * hp_penalty(ship.hp_ratio())
        * ctx.form.multiplier();
    let capped = soft_cap(base, TORPEDO_CAP).floor();
    let power = finish(capped, ship.ammo_ratio());

    trace!(ship = %ship.id(), base, capped, power, "torpedo power");
    power
}
