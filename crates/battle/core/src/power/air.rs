//! Air-battle strike power, computed slot by slot.

use arrayvec::ArrayVec;

use super::modifiers::{finish, soft_cap};
use crate::config::BattleConfig;
use crate::equipment::{CategoryTag, EquippedItem, Squadron};
use crate::ship::Combatant;

pub const AIR_BATTLE_CAP: f64 = 150.0;

/// Uncapped strike value of `aircraft` planes of `item`, if it strikes.
///
/// ```text
/// dive / seaplane / jet bomber:  bomber  * sqrt(n) + 25
/// torpedo bomber / land attacker: (torpedo * sqrt(n) + 25) * 1.5
/// ```
fn strike_value(item: &EquippedItem, aircraft: u8, jets: bool) -> Option<f64> {
    use CategoryTag::*;
    if aircraft == 0 {
        return None;
    }
    let planes = f64::from(aircraft).sqrt();
    let stats = &item.master.stats;
    match item.tag {
        JetFighterBomber if jets => Some(f64::from(stats.bomber) * planes + 25.0),
        CarrierDiveBomber | SeaplaneBomber if !jets => {
            Some(f64::from(stats.bomber) * planes + 25.0)
        }
        CarrierTorpedoBomber | LandBasedAttacker if !jets => {
            Some((f64::from(stats.torpedo) * planes + 25.0) * 1.5)
        }
        _ => None,
    }
}

fn slot_powers(ship: &Combatant, jets: bool) -> ArrayVec<u32, { BattleConfig::MAX_REGULAR_SLOTS }> {
    ship.slots
        .iter()
        .map(|slot| {
            slot.item
                .as_ref()
                .and_then(|item| strike_value(item, slot.aircraft, jets))
                .map_or(0, |value| {
                    finish(soft_cap(value, AIR_BATTLE_CAP).floor(), ship.ammo_ratio())
                })
        })
        .collect()
}

/// Strike power of each regular slot, in slot order.
pub fn air_battle_slot_powers(ship: &Combatant) -> ArrayVec<u32, { BattleConfig::MAX_REGULAR_SLOTS }> {
    slot_powers(ship, false)
}

/// Air-battle power of a ship: the strongest single slot.
pub fn air_battle_power(ship: &Combatant) -> u32 {
    air_battle_slot_powers(ship).into_iter().max().unwrap_or(0)
}

/// Jet-phase strike power: the strongest jet fighter-bomber slot.
pub fn jet_strike_power(ship: &Combatant) -> u32 {
    slot_powers(ship, true).into_iter().max().unwrap_or(0)
}

/// Strike power of a land-based squadron; land bases carry no ammunition.
pub fn squadron_power(squadron: &Squadron) -> u32 {
    strike_value(&squadron.item, squadron.aircraft, squadron.is_jet())
        .map_or(0, |value| finish(soft_cap(value, AIR_BATTLE_CAP).floor(), 1.0))
}
