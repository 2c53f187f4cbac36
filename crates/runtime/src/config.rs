//! Runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, RuntimeError};

pub const DATA_DIR_VAR: &str = "BATTLE_DATA_DIR";
pub const SEED_VAR: &str = "BATTLE_SEED";
pub const WORKERS_VAR: &str = "BATTLE_WORKERS";

/// Settings for batch evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding catalogs, `config.toml` and `scenarios/`.
    pub data_dir: PathBuf,
    /// Base seed of the damage resolver; each battle derives its own.
    pub seed: u64,
    /// Battles resolved at the same time.
    pub workers: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0,
            workers: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `BATTLE_DATA_DIR`, `BATTLE_SEED` and
    /// `BATTLE_WORKERS` where set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = parse(SEED_VAR, seed)?;
        }
        if let Some(workers) = lookup(WORKERS_VAR) {
            config.workers = parse(WORKERS_VAR, workers)?;
            if config.workers == 0 {
                return Err(RuntimeError::InvalidEnv {
                    var: WORKERS_VAR,
                    value: "0".into(),
                });
            }
        }
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

fn parse<T: FromStr>(var: &'static str, value: String) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| RuntimeError::InvalidEnv { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(key, _)| *key == var)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn reads_overrides() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/srv/battle"),
            (SEED_VAR, " 42 "),
            (WORKERS_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/battle"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.workers, 3);
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.workers >= 1);
    }

    #[test]
    fn rejects_bad_values() {
        let err = RuntimeConfig::from_lookup(lookup(&[(SEED_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidEnv { var: SEED_VAR, .. }));
        let err = RuntimeConfig::from_lookup(lookup(&[(WORKERS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidEnv { var: WORKERS_VAR, .. }));
    }
}
