//! Runtime for resolving battles in bulk.
//!
//! `battle-runtime` loads master data and scenarios through
//! `battle-content`, supplies the seeded damage resolver the core pipeline
//! expects, and fans engagements out over a bounded pool of blocking
//! workers.
//!
//! Modules are organized by responsibility:
//! - [`batch`] hosts the evaluator and its job and report types
//! - [`resolver`] and [`rng`] provide deterministic damage rolls
//! - [`config`] reads runtime settings from the environment
//! - [`metrics`] collects counters shared by the workers
pub mod batch;
pub mod config;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod rng;

pub use batch::{BatchEvaluator, BattleJob, BattleReport};
pub use config::{DATA_DIR_VAR, RuntimeConfig, SEED_VAR, WORKERS_VAR};
pub use error::{Result, RuntimeError};
pub use metrics::BatchMetrics;
pub use resolver::SeededResolver;
pub use rng::{PcgRng, compute_seed};
