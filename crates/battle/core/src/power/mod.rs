//! Power calculation.
//!
//! Pure functions turning a [`Combatant`] and a [`PowerContext`] into a
//! non-negative integer power for one attack category. All of them share
//! the same pipeline:
//!
//! 1. stat totals plus a category constant
//! 2. equipment-improvement bonus
//! 3. combined-fleet role offset
//! 4. HP penalty and engagement form
//! 5. flat fit bonuses
//! 6. soft cap, then floor
//! 7. ammunition penalty, then truncation
//!
//! Individual formulas skip or reorder steps; each documents its own.

mod air;
mod asw;
mod context;
mod day;
pub mod fit;
pub mod improvement;
pub mod modifiers;
mod night;

pub use air::{
    AIR_BATTLE_CAP, air_battle_power, air_battle_slot_powers, jet_strike_power, squadron_power,
};
pub use asw::{ANTI_SUBMARINE_CAP, anti_submarine_power};
pub use context::PowerContext;
pub use day::{SHELLING_CAP, TORPEDO_CAP, aircraft_power, shelling_power, torpedo_power};
pub use night::{NIGHT_CAP, night_power};

use crate::env::SubmarineCapability;
use crate::ship::Combatant;

/// Every power category of one ship, for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerProfile {
    pub shelling: u32,
    pub aircraft: u32,
    pub torpedo: u32,
    pub anti_submarine: u32,
    pub night: u32,
    pub air_battle: u32,
}

impl PowerProfile {
    pub fn of(
        ship: &Combatant,
        ctx: &PowerContext,
        capability: &dyn SubmarineCapability,
    ) -> Self {
        Self {
            shelling: shelling_power(ship, ctx),
            aircraft: aircraft_power(ship, ctx),
            torpedo: torpedo_power(ship, ctx),
            anti_submarine: anti_submarine_power(ship, ctx, capability),
            night: night_power(ship),
            air_battle: air_battle_power(ship),
        }
    }

    /// Daytime shelling-phase power against surface ships.
    pub fn day_attack(&self) -> u32 {
        self.shelling.max(self.aircraft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngagementForm;
    use crate::env::{HullCapability, HullClass};
    use crate::ship::test_support::*;

    #[test]
    fn profile_collects_every_category() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.master.torpedo = crate::env::StatRange::new(24, 79);
        ship.stats.firepower = 40;
        ship.stats.torpedo = 60;
        ship.stats.asw = 49;

        let profile = PowerProfile::of(
            &ship,
            &PowerContext::single(EngagementForm::Parallel),
            &HullCapability,
        );
        assert_eq!(profile.shelling, 45);
        assert_eq!(profile.aircraft, 0);
        assert_eq!(profile.torpedo, 65);
        assert_eq!(profile.anti_submarine, 27);
        assert_eq!(profile.night, 100);
        assert_eq!(profile.air_battle, 0);
        assert_eq!(profile.day_attack(), 45);
    }
}
