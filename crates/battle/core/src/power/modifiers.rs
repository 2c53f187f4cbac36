//! Multipliers and offsets shared by the power formulas.

use super::PowerContext;
use crate::config::CombinedFleetKind;
use crate::ship::FleetRole;

/// Soft cap with diminishing returns above `cap`.
///
/// ```text
/// cap_fn(v, cap) = v                     if v < cap
///                = cap + sqrt(v - cap)   otherwise
/// ```
///
/// Continuous at `cap`; the result is not floored.
pub fn soft_cap(value: f64, cap: f64) -> f64 {
    if value < cap {
        value
    } else {
        cap + (value - cap).sqrt()
    }
}

/// Power multiplier from remaining hit points.
pub fn hp_penalty(hp_ratio: f64) -> f64 {
    if hp_ratio < 0.25 {
        0.4
    } else if hp_ratio < 0.5 {
        0.7
    } else {
        1.0
    }
}

/// Power multiplier from remaining ammunition.
///
/// ```text
/// min(floor(ammo_ratio * 100) / 50, 1.0)
/// ```
///
/// Full power from half ammo upward, zero with no ammo. The floor applies to
/// the raw float product, so 29/100 ammo lands on 28 percent.
pub fn ammo_penalty(ammo_ratio: f64) -> f64 {
    let percent = (ammo_ratio.clamp(0.0, 1.0) * 100.0).floor();
    (percent / 50.0).min(1.0)
}

/// Shelling and aircraft offset from the combined-fleet role.
pub fn combined_shelling_bonus(ctx: &PowerContext, role: FleetRole) -> f64 {
    use CombinedFleetKind::*;
    match (ctx.combined, role) {
        (_, FleetRole::None) | (None, _) => 0.0,
        (CarrierTaskForce, FleetRole::Main) => 2.0,
        (CarrierTaskForce, FleetRole::Escort) => 10.0,
        (SurfaceTaskForce, FleetRole::Main) => 10.0,
        (SurfaceTaskForce, FleetRole::Escort) => -5.0,
        (TransportEscort, FleetRole::Main) => -5.0,
        (TransportEscort, FleetRole::Escort) => 10.0,
    }
}

/// Torpedo offset: every combined-fleet ship loses 5.
pub fn combined_torpedo_bonus(ctx: &PowerContext, role: FleetRole) -> f64 {
    if ctx.is_combined() && role != FleetRole::None {
        -5.0
    } else {
        0.0
    }
}

/// Floors `value * ammo_penalty` into a non-negative integer.
pub(crate) fn finish(value: f64, ammo_ratio: f64) -> u32 {
    let scaled = value * ammo_penalty(ammo_ratio);
    if scaled.is_finite() && scaled > 0.0 {
        scaled as u32
    } else {
        0
    }
}
