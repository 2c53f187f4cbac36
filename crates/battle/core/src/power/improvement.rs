//! Equipment-improvement bonuses.
//!
//! Each formula sums `sqrt(level) * weight` over every equipped item
//! (expansion slot included), with a per-category weight table.

use crate::equipment::CategoryTag;
use crate::ship::Combatant;

fn sum(ship: &Combatant, weight: impl Fn(CategoryTag) -> f64) -> f64 {
    ship.items()
        .map(|item| item.level_root() * weight(item.tag))
        .sum()
}

pub fn shelling_weight(tag: CategoryTag) -> f64 {
    use CategoryTag::*;
    match tag {
        LargeCaliberMainGun => 1.5,
        Sonar | DepthCharge | DepthChargeProjector => 0.75,
        Torpedo | SeaplaneRecon | SmallRadar | LargeRadar | SubmarineTorpedo | Generic => 0.0,
        _ => 1.0,
    }
}

pub fn aircraft_weight(tag: CategoryTag) -> f64 {
    match tag {
        CategoryTag::SecondaryGun => 1.0,
        _ => 0.0,
    }
}

pub fn torpedo_weight(tag: CategoryTag) -> f64 {
    use CategoryTag::*;
    match tag {
        Torpedo | AntiAircraftGun | SubmarineTorpedo => 1.2,
        _ => 0.0,
    }
}

pub fn anti_submarine_weight(tag: CategoryTag) -> f64 {
    use CategoryTag::*;
    match tag {
        Sonar | DepthCharge | DepthChargeProjector => 1.2,
        _ => 0.0,
    }
}

pub fn night_weight(tag: CategoryTag) -> f64 {
    use CategoryTag::*;
    match tag {
        SmallCaliberMainGun
        | MediumCaliberMainGun
        | LargeCaliberMainGun
        | SecondaryGun
        | Torpedo
        | ArmorPiercingShell
        | LandingCraft
        | Searchlight
        | SubmarineTorpedo
        | AaFireDirector
        | LargeSearchlight
        | SpecialAmphibiousTank => 1.0,
        _ => 0.0,
    }
}

pub fn shelling_bonus(ship: &Combatant) -> f64 {
    sum(ship, shelling_weight)
}

pub fn aircraft_bonus(ship: &Combatant) -> f64 {
    sum(ship, aircraft_weight)
}

pub fn torpedo_bonus(ship: &Combatant) -> f64 {
    sum(ship, torpedo_weight)
}

pub fn anti_submarine_bonus(ship: &Combatant) -> f64 {
    sum(ship, anti_submarine_weight)
}

pub fn night_bonus(ship: &Combatant) -> f64 {
    sum(ship, night_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::HullClass;
    use crate::ship::test_support::*;

    #[test]
    fn shelling_bonus_weights_by_category() {
        let mut ship = combatant(HullClass::Battleship);
        ship.equip(0, large_gun(4));
        ship.equip(1, secondary_gun(9));
        ship.equip(2, sonar(4));
        ship.equip(3, torpedo(10));
        assert_eq!(shelling_bonus(&ship), 2.0 * 1.5 + 3.0 + 2.0 * 0.75);
    }

    #[test]
    fn large_sonar_is_not_an_asw_improvement() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.equip(0, item(260, 40, 4, Default::default()));
        ship.equip(1, depth_charge(4));
        assert_eq!(anti_submarine_bonus(&ship), 2.0 * 1.2);
        assert_eq!(shelling_bonus(&ship), 2.0 + 2.0 * 0.75);
    }

    #[test]
    fn unimproved_items_add_nothing() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.equip(0, main_gun(0));
        ship.equip(1, torpedo(0));
        assert_eq!(shelling_bonus(&ship), 0.0);
        assert_eq!(torpedo_bonus(&ship), 0.0);
        assert_eq!(night_bonus(&ship), 0.0);
    }
}
