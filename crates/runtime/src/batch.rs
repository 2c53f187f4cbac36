//! Batch evaluation of engagements.
//!
//! Resolutions are CPU-bound and independent, so each one runs on the
//! blocking pool with its own [`SeededResolver`]. A semaphore caps how many
//! run at once; the report order always matches the job order.

use std::sync::Arc;
use std::time::Instant;

use battle_content::{ContentFactory, ScenarioSpec};
use battle_core::{
    BattleConfig, BattleEnv, BattleOrchestrator, BattleOutcome, BattleTypeDescriptor, Engagement,
    HullCapability, MasterSnapshot, Side,
};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, info_span, warn};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::metrics::BatchMetrics;
use crate::resolver::SeededResolver;
use crate::rng::compute_seed;

/// Salt mixed into per-battle seeds so they never collide with strike seeds.
const BATTLE_SEED_CONTEXT: u32 = 0xba77;

/// One engagement queued for resolution.
#[derive(Clone, Debug)]
pub struct BattleJob {
    pub name: String,
    pub descriptor: BattleTypeDescriptor,
    pub engagement: Engagement,
}

impl BattleJob {
    pub fn new(
        name: impl Into<String>,
        descriptor: BattleTypeDescriptor,
        engagement: Engagement,
    ) -> Self {
        Self {
            name: name.into(),
            descriptor,
            engagement,
        }
    }

    /// Builds a scenario against `master`.
    pub fn from_scenario(
        spec: &ScenarioSpec,
        master: &MasterSnapshot,
        fallback: BattleConfig,
    ) -> Result<Self> {
        let env = BattleEnv::with_master(master);
        let engagement = spec.build(&env, fallback).map_err(RuntimeError::content)?;
        Ok(Self::new(spec.name.clone(), spec.battle, engagement))
    }
}

/// Result of one job.
#[derive(Clone, Debug, Serialize)]
pub struct BattleReport {
    /// Position of the job in the submitted batch.
    pub index: usize,
    pub name: String,
    pub seed: u64,
    pub outcome: BattleOutcome,
}

impl BattleReport {
    pub fn strikes(&self) -> usize {
        self.outcome.events().len()
    }

    pub fn survivors(&self, side: Side) -> usize {
        self.outcome.survivors(side).count()
    }

    pub fn damage_taken(&self, side: Side) -> u32 {
        self.outcome.damage_taken(side)
    }
}

/// Resolves batches of engagements on the blocking pool.
#[derive(Clone, Debug)]
pub struct BatchEvaluator {
    master: Arc<MasterSnapshot>,
    config: RuntimeConfig,
    metrics: Arc<BatchMetrics>,
}

impl BatchEvaluator {
    pub fn new(master: MasterSnapshot, config: RuntimeConfig) -> Self {
        Self {
            master: Arc::new(master),
            config,
            metrics: Arc::new(BatchMetrics::new()),
        }
    }

    /// Loads master data from `config.data_dir`.
    pub fn from_content(config: RuntimeConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);
        let master = factory.load_master().map_err(RuntimeError::content)?;
        Ok(Self::new(master, config))
    }

    pub fn master(&self) -> &MasterSnapshot {
        &self.master
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn metrics(&self) -> &BatchMetrics {
        &self.metrics
    }

    /// Builds jobs for the named scenarios of the data directory, or for all
    /// of them when `names` is empty.
    pub fn load_jobs(&self, names: &[String]) -> Result<Vec<BattleJob>> {
        let factory = ContentFactory::new(&self.config.data_dir);
        let fallback = factory.load_config().map_err(RuntimeError::content)?;
        let names = if names.is_empty() {
            factory.scenario_names().map_err(RuntimeError::content)?
        } else {
            names.to_vec()
        };

        names
            .iter()
            .map(|name| {
                let spec = factory.load_scenario(name).map_err(RuntimeError::content)?;
                BattleJob::from_scenario(&spec, &self.master, fallback)
            })
            .collect()
    }

    /// Seed of the resolver used for the job at `index`.
    pub fn job_seed(&self, index: usize) -> u64 {
        compute_seed(self.config.seed, index as u64, 0, BATTLE_SEED_CONTEXT)
    }

    /// Resolves every job and returns the reports in job order.
    ///
    /// The first failed job aborts the batch; jobs already running finish
    /// but their reports are dropped.
    pub async fn evaluate(&self, jobs: Vec<BattleJob>) -> Result<Vec<BattleReport>> {
        let started = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.workers.max(1)));
        let mut tasks = JoinSet::new();

        for (index, job) in jobs.into_iter().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(RuntimeError::PoolClosed)?;
            let master = Arc::clone(&self.master);
            let metrics = Arc::clone(&self.metrics);
            let seed = self.job_seed(index);

            tasks.spawn_blocking(move || {
                let _permit = permit;
                resolve_job(index, job, seed, &master, &metrics)
            });
        }

        let mut reports = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            reports.push(joined.map_err(RuntimeError::WorkerJoin)??);
        }
        reports.sort_by_key(|report| report.index);

        info!(
            battles = reports.len(),
            workers = self.config.workers,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch resolved"
        );
        Ok(reports)
    }
}

fn resolve_job(
    index: usize,
    job: BattleJob,
    seed: u64,
    master: &MasterSnapshot,
    metrics: &BatchMetrics,
) -> Result<BattleReport> {
    let span = info_span!("battle", index, name = %job.name, seed);
    let _guard = span.enter();

    let resolver = SeededResolver::new(seed);
    let env = BattleEnv::with_master(master)
        .with_capability(&HullCapability)
        .with_resolver(&resolver);

    let started = Instant::now();
    match BattleOrchestrator::new(env).resolve(&job.engagement, job.descriptor) {
        Ok(outcome) => {
            let elapsed = started.elapsed();
            metrics.record_success(outcome.events().len(), elapsed);
            info!(
                battle = %job.descriptor,
                strikes = outcome.events().len(),
                friend_damage = outcome.damage_taken(Side::Friend),
                enemy_damage = outcome.damage_taken(Side::Enemy),
                elapsed_us = elapsed.as_micros() as u64,
                "battle resolved"
            );
            Ok(BattleReport {
                index,
                name: job.name,
                seed,
                outcome,
            })
        }
        Err(source) => {
            metrics.record_failure();
            warn!(error = %source, "battle rejected");
            Err(RuntimeError::Resolve {
                name: job.name,
                source,
            })
        }
    }
}
