//! Oracle access errors.
//!
//! Errors related to oracle availability and master-data lookups.

use super::{EquipmentId, ShipId};
use crate::error::{BattleError, ErrorSeverity};

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is fatal: the pipeline cannot run without master data,
/// the submarine-attack policy or a damage resolver. A missing record is a
/// validation error on the caller's snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// EquipmentOracle is not available in the environment.
    #[error("EquipmentOracle not available")]
    EquipmentNotAvailable,

    /// ShipOracle is not available in the environment.
    #[error("ShipOracle not available")]
    ShipsNotAvailable,

    /// SubmarineCapability policy is not available in the environment.
    #[error("SubmarineCapability not available")]
    CapabilityNotAvailable,

    /// DamageResolver is not available in the environment.
    #[error("DamageResolver not available")]
    ResolverNotAvailable,

    /// Equipment master record was not found.
    #[error("equipment master {0} not found")]
    EquipmentNotFound(EquipmentId),

    /// Ship master record was not found.
    #[error("ship master {0} not found")]
    ShipNotFound(ShipId),
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            EquipmentNotAvailable | ShipsNotAvailable | CapabilityNotAvailable
            | ResolverNotAvailable => ErrorSeverity::Fatal,

            EquipmentNotFound(_) | ShipNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EquipmentNotAvailable => "ORACLE_EQUIPMENT_NOT_AVAILABLE",
            ShipsNotAvailable => "ORACLE_SHIPS_NOT_AVAILABLE",
            CapabilityNotAvailable => "ORACLE_CAPABILITY_NOT_AVAILABLE",
            ResolverNotAvailable => "ORACLE_RESOLVER_NOT_AVAILABLE",
            EquipmentNotFound(_) => "ORACLE_EQUIPMENT_NOT_FOUND",
            ShipNotFound(_) => "ORACLE_SHIP_NOT_FOUND",
        }
    }
}
