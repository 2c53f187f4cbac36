//! Data-driven battle content and loaders.
//!
//! This crate reads master data and battle setups from RON/TOML files:
//! - Equipment catalog (data-driven via RON)
//! - Ship catalog (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//! - Scenarios: both fleets, land-based squadrons and the battle type (RON)
//!
//! Content feeds the oracles of `battle-core` and never appears in battle
//! state. All loaders deserialize battle-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EquipmentLoader, FleetSpec, LoadResult, ScenarioLoader,
    ScenarioSpec, ShipLoader, ShipSpec, SlotSpec, SquadronSpec,
};
