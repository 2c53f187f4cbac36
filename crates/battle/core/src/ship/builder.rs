//! Construction of combatants from master data.
//!
//! Snapshots name ships and equipment by master id. [`CombatantBuilder`]
//! resolves those ids through the environment oracles, classifies every item
//! once, and derives stat totals when the snapshot does not carry them.

use arrayvec::ArrayVec;

use super::{Combatant, ExpansionSlot, FleetRole, Gauge, HpMeter, Modernization, Slot, StatTotals};
use crate::config::BattleConfig;
use crate::env::{BattleEnv, EquipmentId, EquipmentStats, OracleError, ShipId, ShipMaster};
use crate::equipment::EquippedItem;
use crate::error::{BattleError, ErrorSeverity};

/// Errors raised while building a combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("{ship} has {capacity} equipment slots, {requested} given")]
    SlotOverflow {
        ship: ShipId,
        requested: usize,
        capacity: usize,
    },

    #[error("current hp {current} exceeds maximum {max}")]
    HpOutOfRange { current: u32, max: u32 },
}

impl BattleError for CombatantError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::SlotOverflow { .. } | Self::HpOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::SlotOverflow { .. } => "COMBATANT_SLOT_OVERFLOW",
            Self::HpOutOfRange { .. } => "COMBATANT_HP_OUT_OF_RANGE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SlotSpec {
    equipment: Option<EquipmentId>,
    level: u8,
    aircraft: Option<u8>,
}

/// Builder resolving a ship snapshot against master data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantBuilder {
    ship: ShipId,
    hp: Option<(u32, Option<u32>)>,
    ammo: Option<u32>,
    fuel: Option<u32>,
    slots: Vec<SlotSpec>,
    expansion: Option<Option<(EquipmentId, u8)>>,
    stats: Option<StatTotals>,
    modernization: Modernization,
    role: FleetRole,
}

impl CombatantBuilder {
    pub fn new(ship: ShipId) -> Self {
        Self {
            ship,
            hp: None,
            ammo: None,
            fuel: None,
            slots: Vec::new(),
            expansion: None,
            stats: None,
            modernization: Modernization::default(),
            role: FleetRole::None,
        }
    }

    /// Current HP, and optionally a maximum above the master value.
    pub fn hp(mut self, current: u32, max: Option<u32>) -> Self {
        self.hp = Some((current, max));
        self
    }

    pub fn ammo(mut self, current: u32) -> Self {
        self.ammo = Some(current);
        self
    }

    pub fn fuel(mut self, current: u32) -> Self {
        self.fuel = Some(current);
        self
    }

    /// Appends the next regular slot. `aircraft` defaults to full capacity.
    pub fn slot(mut self, equipment: EquipmentId, level: u8, aircraft: Option<u8>) -> Self {
        self.slots.push(SlotSpec {
            equipment: Some(equipment),
            level,
            aircraft,
        });
        self
    }

    pub fn empty_slot(mut self) -> Self {
        self.slots.push(SlotSpec {
            equipment: None,
            level: 0,
            aircraft: None,
        });
        self
    }

    /// Opens the expansion slot, optionally with an item in it.
    pub fn expansion(mut self, item: Option<(EquipmentId, u8)>) -> Self {
        self.expansion = Some(item);
        self
    }

    /// Uses precomputed stat totals instead of deriving them.
    pub fn stats(mut self, stats: StatTotals) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn modernization(mut self, modernization: Modernization) -> Self {
        self.modernization = modernization;
        self
    }

    pub fn role(mut self, role: FleetRole) -> Self {
        self.role = role;
        self
    }

    pub fn build(self, env: &BattleEnv<'_>) -> Result<Combatant, CombatantError> {
        let master = env
            .ships()?
            .ship(self.ship)
            .ok_or(OracleError::ShipNotFound(self.ship))?;

        let capacity = master.slot_count().min(BattleConfig::MAX_REGULAR_SLOTS);
        if self.slots.len() > capacity {
            return Err(CombatantError::SlotOverflow {
                ship: self.ship,
                requested: self.slots.len(),
                capacity,
            });
        }

        let hp = match self.hp {
            None => HpMeter::full(master.hp),
            Some((current, max)) => {
                let max = max.unwrap_or(master.hp);
                if current > max {
                    return Err(CombatantError::HpOutOfRange { current, max });
                }
                HpMeter::new(current, max)
            }
        };

        let mut slots = ArrayVec::<Slot, { BattleConfig::MAX_REGULAR_SLOTS }>::new();
        for (index, &plane_capacity) in master.aircraft.iter().take(capacity).enumerate() {
            let spec = self.slots.get(index).copied();
            let item = match spec.and_then(|spec| spec.equipment) {
                Some(id) => Some(resolve_item(env, id, spec.map_or(0, |spec| spec.level))?),
                None => None,
            };
            let aircraft = spec
                .and_then(|spec| spec.aircraft)
                .unwrap_or(plane_capacity)
                .min(plane_capacity);
            slots.push(Slot {
                item,
                aircraft,
                capacity: plane_capacity,
            });
        }

        let expansion = match self.expansion {
            None => ExpansionSlot::Locked,
            Some(None) => ExpansionSlot::Empty,
            Some(Some((id, level))) => ExpansionSlot::Equipped(resolve_item(env, id, level)?),
        };

        let mut combatant = Combatant {
            ammo: Gauge::new(self.ammo.unwrap_or(master.ammo), master.ammo),
            fuel: Gauge::new(self.fuel.unwrap_or(master.fuel), master.fuel),
            master,
            hp,
            slots,
            expansion,
            stats: StatTotals::default(),
            modernization: self.modernization,
            role: self.role,
        };
        combatant.stats = match self.stats {
            Some(stats) => stats,
            None => derive_totals(&combatant.master, &self.modernization, &combatant),
        };
        Ok(combatant)
    }
}

fn resolve_item(
    env: &BattleEnv<'_>,
    id: EquipmentId,
    level: u8,
) -> Result<EquippedItem, CombatantError> {
    let master = env
        .equipment()?
        .equipment(id)
        .ok_or(OracleError::EquipmentNotFound(id))?;
    Ok(EquippedItem::new(master, level))
}

/// Master minimum plus modernization plus equipment contributions.
fn derive_totals(
    master: &ShipMaster,
    modernization: &Modernization,
    combatant: &Combatant,
) -> StatTotals {
    let equipment = |stat: fn(&EquipmentStats) -> i32| combatant.equipment_stat(stat);
    StatTotals {
        firepower: master.firepower.min + modernization.firepower + equipment(|s| s.firepower),
        torpedo: master.torpedo.min + modernization.torpedo + equipment(|s| s.torpedo),
        anti_air: master.anti_air.min + modernization.anti_air + equipment(|s| s.anti_air),
        armor: master.armor.min + modernization.armor + equipment(|s| s.armor),
        evasion: master.evasion.min + equipment(|s| s.evasion),
        asw: master.asw.min + modernization.asw + equipment(|s| s.asw),
        los: master.los.min + equipment(|s| s.los),
        luck: master.luck.min + modernization.luck,
    }
}
