//! Flat gun-fit bonuses added after the HP and form multipliers.

use crate::env::{EquipmentId, ShipId};
use crate::ship::Combatant;

const LIGHT_CRUISER_SINGLE_GUNS: [EquipmentId; 2] = [EquipmentId(4), EquipmentId(11)];
const LIGHT_CRUISER_TWIN_GUNS: [EquipmentId; 3] =
    [EquipmentId(65), EquipmentId(119), EquipmentId(139)];

const HEAVY_CRUISER_FIT_SHIPS: [ShipId; 5] =
    [ShipId(448), ShipId(358), ShipId(496), ShipId(449), ShipId(361)];
const HEAVY_CRUISER_FIT_GUN: EquipmentId = EquipmentId(162);

/// `sqrt(twin) * 2 + sqrt(single)` for light-cruiser hulls.
pub fn light_cruiser_fit(ship: &Combatant) -> f64 {
    if !ship.hull().is_light_cruiser_family() {
        return 0.0;
    }
    let single = f64::from(ship.count_equipment(&LIGHT_CRUISER_SINGLE_GUNS));
    let twin = f64::from(ship.count_equipment(&LIGHT_CRUISER_TWIN_GUNS));
    twin.sqrt() * 2.0 + single.sqrt()
}

/// `sqrt(count of 203mm/53 twin mounts)` for the ships that fit it.
pub fn heavy_cruiser_fit(ship: &Combatant) -> f64 {
    if !HEAVY_CRUISER_FIT_SHIPS.contains(&ship.id()) {
        return 0.0;
    }
    f64::from(ship.count_equipment(&[HEAVY_CRUISER_FIT_GUN])).sqrt()
}

/// Both fits together.
pub fn fit_bonus(ship: &Combatant) -> f64 {
    light_cruiser_fit(ship) + heavy_cruiser_fit(ship)
}
