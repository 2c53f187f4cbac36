use tracing::trace;

use super::fit::fit_bonus;
use super::improvement::night_bonus;
use super::modifiers::{finish, hp_penalty, soft_cap};
use crate::attack::{Loadout, SpecialAttacks, TargetClass, resolve_night_attack, resolve_torpedo_cutin};
use crate::ship::Combatant;

pub const NIGHT_CAP: f64 = 300.0;

/// Night-battle power against a surface target.
///
/// Engagement form and combined-fleet role do not apply at night.
///
/// # Formula
///
/// ```text
/// base  = (firepower + torpedo + improvement) * hp * cut-in multiplier + fits
/// power = trunc(floor(cap_fn(base, 300)) * ammo)
/// ```
pub fn night_power(ship: &Combatant) -> u32 {
    let loadout = Loadout::of(ship);
    let kind = resolve_night_attack(&loadout, TargetClass::Surface, SpecialAttacks::Allowed);
    let multiplier = kind.multiplier(resolve_torpedo_cutin(&loadout));

    let base = (f64::from(ship.stats.firepower) + f64::from(ship.stats.torpedo) + night_bonus(ship))
        * hp_penalty(ship.hp_ratio())
        * multiplier
        + fit_bonus(ship);
    let capped = soft_cap(base, NIGHT_CAP).floor();
    let power = finish(capped, ship.ammo_ratio());

    trace!(ship = %ship.id(), base, %kind, capped, power, "night power");
    power
}
