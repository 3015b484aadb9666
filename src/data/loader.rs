//! Configuration loader
//!
//! Loads the progression curve, tier bands, draw mode and prize pools from a
//! RON (or JSON) file. A missing file falls back to built-in defaults; a file
//! that fails to parse or validate is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineError};
use crate::progression::ProgressionEngine;
use crate::reward::{DrawMode, PrizeEntry, PrizePool};
use super::pools::default_pools;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

/// Everything the engines need, supplied as immutable data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub progression: ProgressionEngine,
    /// Which multiplier rule is live
    #[serde(default)]
    pub draw_mode: DrawMode,
    /// Prize pools keyed by game variant
    #[serde(default)]
    pub pools: BTreeMap<String, PrizePool>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            progression: ProgressionEngine::default(),
            draw_mode: DrawMode::default(),
            pools: default_pools(),
        }
    }
}

impl GameConfig {
    /// Load from `path`, or use defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_ron_str(&content)?,
        };

        log::info!(
            "Loaded config from {} ({} pools, draw mode {})",
            path.display(),
            config.pools.len(),
            config.draw_mode.name()
        );
        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Look up a pool by game variant
    pub fn pool(&self, name: &str) -> Result<&PrizePool, EngineError> {
        self.pools
            .get(name)
            .ok_or_else(|| EngineError::UnknownPool(name.to_string()))
    }

    /// Replace (or add) a pool after validating its entries
    pub fn set_pool(&mut self, name: &str, entries: Vec<PrizeEntry>) -> Result<(), ConfigError> {
        let pool = PrizePool::new(entries).map_err(|source| ConfigError::Pool {
            name: name.to_string(),
            source,
        })?;
        log::info!("Pool {} updated, total weight {}%", name, pool.total_weight());
        self.pools.insert(name.to_string(), pool);
        Ok(())
    }
}

/// Write the default config as pretty RON for hand editing
pub fn export_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let ron = ron::ser::to_string_pretty(&GameConfig::default(), ron::ser::PrettyConfig::default())?;
    fs::write(path, ron)?;
    log::info!("Default config written to {}", path.display());
    Ok(())
}
