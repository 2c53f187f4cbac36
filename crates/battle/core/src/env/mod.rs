//! Traits describing read-only collaborators.
//!
//! Oracles expose ship and equipment master data, the submarine-attack
//! policy and the damage resolver. The [`BattleEnv`] aggregate bundles them
//! so the pipeline can reach everything it needs without hard coupling to
//! concrete implementations.
mod capability;
mod error;
mod master;
mod resolver;
mod snapshot;

pub use capability::{HullCapability, SubmarineCapability};
pub use error::OracleError;
pub use master::{
    EquipmentId, EquipmentMaster, EquipmentOracle, EquipmentStats, HullClass, ShipId, ShipMaster,
    ShipOracle, StatRange,
};
pub use resolver::{DamageResolver, PowerAsDamage, Strike};
pub use snapshot::MasterSnapshot;

/// Aggregates read-only oracles required by combatant construction and the
/// phase pipeline.
#[derive(Clone, Copy, Default)]
pub struct BattleEnv<'a> {
    equipment: Option<&'a dyn EquipmentOracle>,
    ships: Option<&'a dyn ShipOracle>,
    capability: Option<&'a dyn SubmarineCapability>,
    resolver: Option<&'a dyn DamageResolver>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        equipment: Option<&'a dyn EquipmentOracle>,
        ships: Option<&'a dyn ShipOracle>,
        capability: Option<&'a dyn SubmarineCapability>,
        resolver: Option<&'a dyn DamageResolver>,
    ) -> Self {
        Self {
            equipment,
            ships,
            capability,
            resolver,
        }
    }

    /// Environment with no oracles; every accessor returns an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Environment backed by one master snapshot.
    pub fn with_master(master: &'a MasterSnapshot) -> Self {
        Self {
            equipment: Some(master),
            ships: Some(master),
            ..Self::default()
        }
    }

    pub fn with_capability(mut self, capability: &'a dyn SubmarineCapability) -> Self {
        self.capability = Some(capability);
        self
    }

    pub fn with_resolver(mut self, resolver: &'a dyn DamageResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn equipment(&self) -> Result<&'a dyn EquipmentOracle, OracleError> {
        self.equipment.ok_or(OracleError::EquipmentNotAvailable)
    }

    pub fn ships(&self) -> Result<&'a dyn ShipOracle, OracleError> {
        self.ships.ok_or(OracleError::ShipsNotAvailable)
    }

    pub fn capability(&self) -> Result<&'a dyn SubmarineCapability, OracleError> {
        self.capability.ok_or(OracleError::CapabilityNotAvailable)
    }

    pub fn resolver(&self) -> Result<&'a dyn DamageResolver, OracleError> {
        self.resolver.ok_or(OracleError::ResolverNotAvailable)
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("equipment", &self.equipment.is_some())
            .field("ships", &self.ships.is_some())
            .field("capability", &self.capability.is_some())
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}
