//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`OracleError`, `CombatantError`, `BattleTypeError`,
//! `ResolveError`) live beside the code that raises them. This module holds
//! the shared classification used by callers to decide how to react.
//!
//! # Design Principles
//!
//! - **Configuration errors abort one resolution**: a missing master-data
//!   entry or an unknown battle type is reported to the caller and never
//!   defaulted.
//! - **Degenerate inputs are not errors**: empty slots, zero aircraft and
//!   torpedo-incapable hulls are handled by zero-contribution rules inside
//!   the formulas.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: a required collaborator is missing, nothing can be resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input (unknown ship id, bad battle-type flags, oversized fleet).
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// A required oracle was not supplied to the environment.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics and for asserting on errors in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
