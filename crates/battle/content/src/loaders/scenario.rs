//! Scenario loader.
//!
//! A scenario names the battle type and lists both sides ship by ship. Ships
//! refer to master data by id; [`ScenarioSpec::build`] resolves them against
//! a [`BattleEnv`] into an [`Engagement`].

use std::path::Path;

use battle_core::{
    BattleConfig, BattleEnv, BattleTypeDescriptor, CombatantBuilder, Engagement, EquipmentId,
    EquippedItem, FleetSlot, Modernization, ShipId, Side, Squadron, StatTotals,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One equipped regular slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub id: EquipmentId,
    #[serde(default)]
    pub level: u8,
    /// Planes left in the slot; full capacity when omitted.
    #[serde(default)]
    pub aircraft: Option<u8>,
}

/// One ship as it enters the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub ship: ShipId,
    /// Current HP; full when omitted.
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub ammo: Option<u32>,
    #[serde(default)]
    pub fuel: Option<u32>,
    /// Regular slots in order; `None` leaves a slot empty.
    #[serde(default)]
    pub slots: Vec<Option<SlotSpec>>,
    /// `Some(None)` opens an empty expansion slot.
    #[serde(default)]
    pub expansion: Option<Option<SlotSpec>>,
    #[serde(default)]
    pub modernization: Modernization,
    /// Precomputed totals; derived from master data when omitted.
    #[serde(default)]
    pub stats: Option<StatTotals>,
}

impl ShipSpec {
    fn builder(&self) -> CombatantBuilder {
        let mut builder = CombatantBuilder::new(self.ship).modernization(self.modernization);
        if let Some(hp) = self.hp {
            builder = builder.hp(hp, None);
        }
        if let Some(ammo) = self.ammo {
            builder = builder.ammo(ammo);
        }
        if let Some(fuel) = self.fuel {
            builder = builder.fuel(fuel);
        }
        for slot in &self.slots {
            builder = match slot {
                Some(slot) => builder.slot(slot.id, slot.level, slot.aircraft),
                None => builder.empty_slot(),
            };
        }
        if let Some(expansion) = self.expansion {
            builder = builder.expansion(expansion.map(|slot| (slot.id, slot.level)));
        }
        if let Some(stats) = self.stats {
            builder = builder.stats(stats);
        }
        builder
    }
}

/// Main and escort fleet of one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSpec {
    #[serde(default)]
    pub main: Vec<ShipSpec>,
    #[serde(default)]
    pub escort: Vec<ShipSpec>,
}

/// A land-based squadron sortied into the base air phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadronSpec {
    pub id: EquipmentId,
    #[serde(default)]
    pub level: u8,
    pub aircraft: u8,
}

/// Complete battle setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub battle: BattleTypeDescriptor,
    /// Overrides the data directory's `config.toml` when present.
    #[serde(default)]
    pub config: Option<BattleConfig>,
    pub friend: FleetSpec,
    pub enemy: FleetSpec,
    #[serde(default)]
    pub squadrons: Vec<SquadronSpec>,
}

impl ScenarioSpec {
    /// Resolves every ship and squadron against master data.
    ///
    /// `fallback` applies when the scenario carries no config of its own.
    pub fn build(&self, env: &BattleEnv<'_>, fallback: BattleConfig) -> LoadResult<Engagement> {
        let mut engagement = Engagement::new(self.config.unwrap_or(fallback));

        for (side, fleets) in [(Side::Friend, &self.friend), (Side::Enemy, &self.enemy)] {
            for (slot, ships) in [(FleetSlot::Main, &fleets.main), (FleetSlot::Escort, &fleets.escort)]
            {
                for (position, spec) in ships.iter().enumerate() {
                    let ship = spec.builder().build(env).map_err(|e| {
                        anyhow::anyhow!(
                            "Failed to build {} {} ship #{} in scenario '{}': {}",
                            side,
                            slot,
                            position,
                            self.name,
                            e
                        )
                    })?;
                    engagement.push(side, slot, ship).map_err(|e| {
                        anyhow::anyhow!("Scenario '{}' does not fit: {}", self.name, e)
                    })?;
                }
            }
        }

        let equipment = env.equipment()?;
        for spec in &self.squadrons {
            let master = equipment.equipment(spec.id).ok_or_else(|| {
                anyhow::anyhow!(
                    "Scenario '{}' names unknown squadron equipment {}",
                    self.name,
                    spec.id
                )
            })?;
            let squadron = Squadron::new(EquippedItem::new(master, spec.level), spec.aircraft);
            engagement
                .add_squadron(squadron)
                .map_err(|e| anyhow::anyhow!("Scenario '{}' does not fit: {}", self.name, e))?;
        }

        tracing::debug!(
            scenario = %self.name,
            ships = engagement.participants().count(),
            squadrons = engagement.squadrons().len(),
            "scenario built"
        );
        Ok(engagement)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
