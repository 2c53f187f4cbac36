use super::kind::BattleTypeError;
use super::roster::{FleetSlot, Side};
use crate::env::OracleError;
use crate::error::{BattleError, ErrorSeverity};

/// Errors that abort one resolution before any phase runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    BattleType(#[from] BattleTypeError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("{side} {fleet} fleet is full")]
    FleetFull { side: Side, fleet: FleetSlot },

    #[error("too many land-based squadrons")]
    TooManySquadrons,

    #[error("combined battle needs a friendly escort fleet")]
    MissingEscortFleet,
}

impl BattleError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BattleType(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::FleetFull { .. } | Self::TooManySquadrons | Self::MissingEscortFleet => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleType(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
            Self::FleetFull { .. } => "RESOLVE_FLEET_FULL",
            Self::TooManySquadrons => "RESOLVE_TOO_MANY_SQUADRONS",
            Self::MissingEscortFleet => "RESOLVE_MISSING_ESCORT_FLEET",
        }
    }
}
