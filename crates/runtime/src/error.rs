//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from configuration, content loading, battle resolution and
//! worker coordination so callers can bubble them up with consistent
//! context.

use battle_core::ResolveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to load battle content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("battle '{name}' failed to resolve")]
    Resolve {
        name: String,
        #[source]
        source: ResolveError,
    },

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("battle worker pool closed")]
    PoolClosed(#[source] tokio::sync::AcquireError),
}

impl RuntimeError {
    pub(crate) fn content(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Content(error.into())
    }
}
