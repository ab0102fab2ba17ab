use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    errors::StoreResult,
    ledger::{category, TransactionKind},
    utils::persistence::{read_to_string, write_atomic},
};

const DEFAULT_DIR_NAME: &str = ".wallet_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "WALLET_CORE_HOME";

/// Returns the application data directory, defaulting to `~/.wallet_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn default_config_path() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Tunables for a [`crate::TransactionStore`] session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Type preselected on a fresh draft.
    pub default_kind: TransactionKind,
    /// Category preselected on a fresh draft.
    pub default_category: String,
    /// Suggestions offered by the category picker.
    pub categories: Vec<String>,
    /// Start the session with the two demo entries.
    pub seed_sample_data: bool,
    /// Indent the exported JSON.
    pub pretty_export: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_kind: TransactionKind::Income,
            default_category: category::DEFAULT_CATEGORY.into(),
            categories: category::default_categories(),
            seed_sample_data: false,
            pretty_export: false,
        }
    }
}

/// Loads and saves [`StoreConfig`] as JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the config file; a missing file yields the defaults.
    pub fn load(&self) -> StoreResult<StoreConfig> {
        if self.path.exists() {
            let data = read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded store config");
            Ok(config)
        } else {
            tracing::debug!(
                path = %self.path.display(),
                "no config file found, using defaults"
            );
            Ok(StoreConfig::default())
        }
    }

    pub fn save(&self, config: &StoreConfig) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
