use super::CategoryTag;
use crate::env::{EquipmentId, EquipmentMaster};

/// Code-15 items that are depth charges; the rest of code 15 are projectors.
pub const DEPTH_CHARGE_IDS: [EquipmentId; 2] = [EquipmentId(226), EquipmentId(227)];

/// Maps an equipment master record to its category tag.
///
/// Pure and total: unknown codes classify as [`CategoryTag::Generic`].
pub fn classify(master: &EquipmentMaster) -> CategoryTag {
    use CategoryTag::*;
    match master.category {
        1 => SmallCaliberMainGun,
        2 => MediumCaliberMainGun,
        3 | 38 => LargeCaliberMainGun,
        4 => SecondaryGun,
        5 => Torpedo,
        6 => CarrierFighter,
        7 => CarrierDiveBomber,
        8 => CarrierTorpedoBomber,
        9 => CarrierRecon,
        10 => SeaplaneRecon,
        11 => SeaplaneBomber,
        12 => SmallRadar,
        13 => LargeRadar,
        14 => Sonar,
        15 if DEPTH_CHARGE_IDS.contains(&master.id) => DepthCharge,
        15 => DepthChargeProjector,
        19 => ArmorPiercingShell,
        21 => AntiAircraftGun,
        22 => MidgetSubmarine,
        24 => LandingCraft,
        25 => Autogyro,
        26 => AswPatrolAircraft,
        29 => Searchlight,
        32 => SubmarineTorpedo,
        36 => AaFireDirector,
        37 => RocketLauncher,
        40 => LargeSonar,
        42 => LargeSearchlight,
        46 => SpecialAmphibiousTank,
        47 => LandBasedAttacker,
        57 => JetFighterBomber,
        _ => Generic,
    }
}
