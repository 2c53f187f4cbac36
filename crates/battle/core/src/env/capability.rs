use crate::equipment::CategoryTag;
use crate::ship::Combatant;

/// Policy deciding whether a ship can attack submarines at all.
///
/// The rule depends on hull class and equipment and is owned outside the
/// power formulas; the anti-submarine formula returns zero when it says no.
pub trait SubmarineCapability: Send + Sync {
    fn can_attack_submarine(&self, ship: &Combatant) -> bool;
}

/// Default hull-and-equipment policy.
///
/// - Escort hulls (DE, DD, CL, CLT, CT, AO) need a positive ASW total.
/// - Aviation hulls (CVL, AV, LHA, BBV, CAV) need an ASW-capable aircraft
///   with at least one plane left in its slot.
/// - Everything else cannot engage submarines.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCapability;

impl HullCapability {
    fn has_asw_aircraft(ship: &Combatant) -> bool {
        ship.slots.iter().any(|slot| {
            slot.aircraft > 0
                && slot.item.as_ref().is_some_and(|item| {
                    matches!(
                        item.tag,
                        CategoryTag::CarrierDiveBomber
                            | CategoryTag::CarrierTorpedoBomber
                            | CategoryTag::SeaplaneBomber
                            | CategoryTag::Autogyro
                            | CategoryTag::AswPatrolAircraft
                    ) && item.master.stats.asw > 0
                })
        })
    }
}

impl SubmarineCapability for HullCapability {
    fn can_attack_submarine(&self, ship: &Combatant) -> bool {
        use crate::env::HullClass::*;
        match ship.hull() {
            Escort | Destroyer | LightCruiser | TorpedoCruiser | TrainingCruiser | FleetOiler => {
                ship.stats.asw > 0
            }
            LightCarrier | SeaplaneTender | AmphibiousAssault | AviationBattleship
            | AviationCruiser => Self::has_asw_aircraft(ship),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::HullClass;
    use crate::ship::test_support::{autogyro, combatant, sonar};

    #[test]
    fn destroyer_needs_asw_total() {
        let mut ship = combatant(HullClass::Destroyer);
        ship.stats.asw = 0;
        assert!(!HullCapability.can_attack_submarine(&ship));
        ship.stats.asw = 40;
        assert!(HullCapability.can_attack_submarine(&ship));
    }

    #[test]
    fn light_carrier_needs_loaded_asw_aircraft() {
        let mut ship = combatant(HullClass::LightCarrier);
        ship.stats.asw = 60;
        ship.equip(0, sonar(0));
        assert!(!HullCapability.can_attack_submarine(&ship));

        ship.equip(1, autogyro(0));
        ship.slots[1].aircraft = 0;
        assert!(!HullCapability.can_attack_submarine(&ship));

        ship.slots[1].aircraft = 8;
        assert!(HullCapability.can_attack_submarine(&ship));
    }

    #[test]
    fn battleships_never_engage_submarines() {
        let mut ship = combatant(HullClass::Battleship);
        ship.stats.asw = 99;
        assert!(!HullCapability.can_attack_submarine(&ship));
    }
}
