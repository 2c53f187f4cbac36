//! Shared master data for the pipeline tests.
#![allow(dead_code)]

use battle_core::{
    BattleEnv, Combatant, CombatantBuilder, EquipmentId, EquipmentMaster, EquipmentStats,
    HullClass, MasterSnapshot, ShipId, ShipMaster, StatRange,
};

pub const DESTROYER: ShipId = ShipId(1);
pub const LIGHT_CARRIER: ShipId = ShipId(2);
pub const BATTLESHIP: ShipId = ShipId(3);
pub const SUBMARINE: ShipId = ShipId(4);

pub const SMALL_GUN: EquipmentId = EquipmentId(2);
pub const LARGE_GUN: EquipmentId = EquipmentId(7);
pub const TORPEDO: EquipmentId = EquipmentId(15);
pub const DIVE_BOMBER: EquipmentId = EquipmentId(23);
pub const SONAR: EquipmentId = EquipmentId(46);
pub const DEPTH_CHARGE: EquipmentId = EquipmentId(226);

fn ship(id: ShipId, name: &str, hull: HullClass, hp: u32, aircraft: &[u8]) -> ShipMaster {
    let mut master = ShipMaster {
        id,
        name: name.into(),
        hull,
        hp,
        ammo: 20,
        fuel: 20,
        ..Default::default()
    };
    master.aircraft.extend(aircraft.iter().copied());
    master
}

fn equipment(id: EquipmentId, name: &str, category: u16, stats: EquipmentStats) -> EquipmentMaster {
    EquipmentMaster::new(id, name, category).with_stats(stats)
}

pub fn snapshot() -> MasterSnapshot {
    let destroyer = ShipMaster {
        firepower: StatRange::new(10, 49),
        torpedo: StatRange::new(27, 79),
        asw: StatRange::new(20, 49),
        armor: StatRange::new(5, 19),
        ..ship(DESTROYER, "Fubuki", HullClass::Destroyer, 15, &[0, 0, 0])
    };
    let carrier = ShipMaster {
        armor: StatRange::new(10, 29),
        ..ship(LIGHT_CARRIER, "Hosho", HullClass::LightCarrier, 30, &[8, 11, 0])
    };
    let battleship = ShipMaster {
        firepower: StatRange::new(82, 99),
        armor: StatRange::new(75, 89),
        ..ship(BATTLESHIP, "Nagato", HullClass::Battleship, 80, &[3, 3, 3, 3])
    };
    let submarine = ShipMaster {
        torpedo: StatRange::new(27, 69),
        armor: StatRange::new(4, 9),
        ..ship(SUBMARINE, "I-168", HullClass::Submarine, 14, &[0, 0])
    };

    MasterSnapshot::from_records(
        [
            equipment(SMALL_GUN, "12.7cm Twin Gun", 1, EquipmentStats {
                firepower: 2,
                ..Default::default()
            }),
            equipment(LARGE_GUN, "41cm Twin Gun", 3, EquipmentStats {
                firepower: 20,
                ..Default::default()
            }),
            equipment(TORPEDO, "61cm Quad Torpedo", 5, EquipmentStats {
                torpedo: 10,
                ..Default::default()
            }),
            equipment(DIVE_BOMBER, "Type 99 Dive Bomber", 7, EquipmentStats {
                bomber: 5,
                asw: 3,
                ..Default::default()
            }),
            equipment(SONAR, "Type 93 Sonar", 14, EquipmentStats {
                asw: 6,
                ..Default::default()
            }),
            equipment(DEPTH_CHARGE, "Type 95 Depth Charge", 15, EquipmentStats {
                asw: 4,
                ..Default::default()
            }),
        ],
        [destroyer, carrier, battleship, submarine],
    )
}

pub fn destroyer(env: &BattleEnv<'_>, ammo: u32) -> Combatant {
    CombatantBuilder::new(DESTROYER)
        .ammo(ammo)
        .slot(SMALL_GUN, 0, None)
        .slot(TORPEDO, 4, None)
        .slot(DEPTH_CHARGE, 0, None)
        .build(env)
        .expect("destroyer should build")
}

pub fn light_carrier(env: &BattleEnv<'_>, ammo: u32) -> Combatant {
    CombatantBuilder::new(LIGHT_CARRIER)
        .ammo(ammo)
        .slot(DIVE_BOMBER, 0, None)
        .slot(DIVE_BOMBER, 0, None)
        .build(env)
        .expect("carrier should build")
}

pub fn battleship(env: &BattleEnv<'_>, ammo: u32) -> Combatant {
    CombatantBuilder::new(BATTLESHIP)
        .ammo(ammo)
        .slot(LARGE_GUN, 6, None)
        .slot(LARGE_GUN, 0, None)
        .build(env)
        .expect("battleship should build")
}

pub fn submarine(env: &BattleEnv<'_>, ammo: u32) -> Combatant {
    CombatantBuilder::new(SUBMARINE)
        .ammo(ammo)
        .slot(TORPEDO, 0, None)
        .build(env)
        .expect("submarine should build")
}
