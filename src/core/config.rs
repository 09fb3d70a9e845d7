use crate::core::history::RetentionPolicy;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Conversion factors per currency code, relative to a base unit with
    /// factor 1.
    #[serde(default = "default_rates")]
    pub rates: HashMap<String, Decimal>,

    /// How many days a saved conversion stays visible in the history.
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,

    /// Overrides the platform data directory for persisted history.
    pub data_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rates: default_rates(),
            retention_days: default_retention_days(),
            data_path: None,
        }
    }
}

fn default_rates() -> HashMap<String, Decimal> {
    HashMap::from([
        ("USD".to_string(), Decimal::new(1, 0)),
        ("EUR".to_string(), Decimal::new(82, 2)),
        ("GBP".to_string(), Decimal::new(73, 2)),
        ("JPY".to_string(), Decimal::new(10954, 2)),
    ])
}

fn default_retention_days() -> i64 {
    RetentionPolicy::DEFAULT_DAYS
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxh")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("in", "codito", "fxh")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
