//! Run configuration read from the environment.
//!
//! - `BLOCKFALL_SEED`: u64 seed for the piece source (default: OS entropy)
//! - `BLOCKFALL_GRAVITY_MS`: gravity interval in milliseconds (default: 500)
//! - `BLOCKFALL_LOG_PATH`: write logs to this file (default: logging off)
//! - `BLOCKFALL_LOG_LEVEL`: `error`..`trace` (default: `info`)
//!
//! Board dimensions are fixed and not configurable.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::LevelFilter;

use crate::types::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub gravity_ms: u64,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: GRAVITY_INTERVAL_MS as u64,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get("BLOCKFALL_SEED") {
            config.seed = Some(
                raw.parse()
                    .with_context(|| format!("BLOCKFALL_SEED must be a u64, got {raw:?}"))?,
            );
        }

        if let Some(raw) = get("BLOCKFALL_GRAVITY_MS") {
            let ms: u64 = raw
                .parse()
                .with_context(|| format!("BLOCKFALL_GRAVITY_MS must be an integer, got {raw:?}"))?;
            if ms == 0 {
                bail!("BLOCKFALL_GRAVITY_MS must be greater than 0");
            }
            config.gravity_ms = ms;
        }

        config.log_path = get("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        if let Some(raw) = get("BLOCKFALL_LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(&raw)
                .with_context(|| format!("BLOCKFALL_LOG_LEVEL is not a log level: {raw:?}"))?;
        }

        Ok(config)
    }
}
