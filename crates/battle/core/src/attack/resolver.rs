//! Special-attack classification.
//!
//! Rules are checked in a fixed order, specific patterns before generic
//! ones. The first match wins.

use super::{DayAttackKind, Loadout, NightAttackKind, SpecialAttacks, TargetClass, TorpedoCutinKind};
use crate::env::HullClass;
use crate::equipment::CategoryTag;

fn submarine_answer_day(hull: HullClass) -> DayAttackKind {
    if hull.is_aviation() {
        DayAttackKind::AirAttack
    } else {
        DayAttackKind::DepthCharge
    }
}

fn artillery_spotting(loadout: &Loadout) -> Option<DayAttackKind> {
    let counts = &loadout.counts;
    let main = counts.main_guns();
    let secondary = counts.secondary_guns();
    let ap = counts.count(CategoryTag::ArmorPiercingShell);
    let radar = counts.radars();

    if counts.spotters() == 0 || main == 0 {
        return None;
    }
    let kind = if main >= 2 && ap >= 1 {
        DayAttackKind::CutinMainMain
    } else if secondary >= 1 && ap >= 1 {
        DayAttackKind::CutinMainAp
    } else if secondary >= 1 && radar >= 1 {
        DayAttackKind::CutinMainRadar
    } else if secondary >= 1 {
        DayAttackKind::CutinMainSecondary
    } else if main >= 2 {
        DayAttackKind::DoubleShelling
    } else {
        return None;
    };
    Some(kind)
}

/// Resolves the daytime attack pattern of `loadout` against `target`.
pub fn resolve_day_attack(
    loadout: &Loadout,
    target: TargetClass,
    specials: SpecialAttacks,
) -> DayAttackKind {
    let counts = &loadout.counts;

    if loadout.flies_strikes() {
        if target == TargetClass::Submarine {
            return submarine_answer_day(loadout.hull);
        }
        let dive = counts.count(CategoryTag::CarrierDiveBomber);
        let torpedo = counts.count(CategoryTag::CarrierTorpedoBomber);
        let fighter = counts.count(CategoryTag::CarrierFighter);
        if specials.allowed() && dive >= 1 && torpedo >= 1 && (fighter >= 1 || dive >= 2) {
            return DayAttackKind::CutinAirAttack;
        }
        return DayAttackKind::AirAttack;
    }

    if specials.allowed() && target != TargetClass::Submarine {
        if let Some(kind) = artillery_spotting(loadout) {
            return kind;
        }
    }

    match target {
        TargetClass::Submarine => submarine_answer_day(loadout.hull),
        TargetClass::Installation if counts.has(CategoryTag::RocketLauncher) => {
            DayAttackKind::Rocket
        }
        _ if loadout.hull.is_submarine() => DayAttackKind::Torpedo,
        _ => DayAttackKind::Normal,
    }
}

fn night_cutin(loadout: &Loadout) -> Option<NightAttackKind> {
    let counts = &loadout.counts;
    let main = counts.main_guns();
    let secondary = counts.secondary_guns();
    let torpedo = counts.torpedoes();

    let kind = if main >= 3 {
        NightAttackKind::CutinMainMain
    } else if main == 2 && secondary >= 1 {
        NightAttackKind::CutinMainSecondary
    } else if (main == 2 && secondary == 0 && torpedo == 1) || (main == 1 && torpedo == 1) {
        NightAttackKind::CutinMainTorpedo
    } else if torpedo >= 2 {
        NightAttackKind::CutinTorpedoTorpedo
    } else if main + secondary >= 2 {
        NightAttackKind::DoubleShelling
    } else {
        return None;
    };
    Some(kind)
}

/// Resolves the night-battle attack pattern of `loadout` against `target`.
pub fn resolve_night_attack(
    loadout: &Loadout,
    target: TargetClass,
    specials: SpecialAttacks,
) -> NightAttackKind {
    if loadout.hull.is_carrier() {
        return NightAttackKind::Normal;
    }
    if target == TargetClass::Submarine {
        return if loadout.hull.is_aviation() {
            NightAttackKind::AirAttack
        } else {
            NightAttackKind::DepthCharge
        };
    }
    if specials.allowed() {
        if let Some(kind) = night_cutin(loadout) {
            return kind;
        }
    }

    let counts = &loadout.counts;
    let torpedo_only =
        counts.torpedoes() > 0 && counts.main_guns() == 0 && counts.secondary_guns() == 0;
    if torpedo_only || loadout.hull.is_submarine() {
        NightAttackKind::Torpedo
    } else {
        NightAttackKind::Normal
    }
}

/// Resolves which torpedo-torpedo cut-in variant a submarine fires.
pub fn resolve_torpedo_cutin(loadout: &Loadout) -> TorpedoCutinKind {
    if !loadout.hull.is_submarine() {
        return TorpedoCutinKind::Standard;
    }
    match (loadout.late_model_torpedoes, loadout.submarine_radars) {
        (late, radar) if late >= 1 && radar >= 1 => TorpedoCutinKind::LateModelRadar,
        (late, _) if late >= 2 => TorpedoCutinKind::LateModelDouble,
        _ => TorpedoCutinKind::Standard,
    }
}
