use crate::core::upload::{DEFAULT_ANALYSIS_DELAY, DEFAULT_UPLOAD_DELAY, Delays};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

fn default_currency() -> String {
    "USD".to_string()
}

fn default_upload_delay_ms() -> u64 {
    DEFAULT_UPLOAD_DELAY.as_millis() as u64
}

fn default_analysis_delay_ms() -> u64 {
    DEFAULT_ANALYSIS_DELAY.as_millis() as u64
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            upload_delay_ms: default_upload_delay_ms(),
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}

impl UploadConfig {
    /// Analysis must take longer than the upload it follows.
    pub fn delays(&self) -> Result<Delays> {
        if self.analysis_delay_ms <= self.upload_delay_ms {
            anyhow::bail!(
                "analysis_delay_ms ({}) must be greater than upload_delay_ms ({})",
                self.analysis_delay_ms,
                self.upload_delay_ms
            );
        }
        Ok(Delays {
            upload: Duration::from_millis(self.upload_delay_ms),
            analysis: Duration::from_millis(self.analysis_delay_ms),
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub upload: UploadConfig,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            upload: UploadConfig::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Loads `path` when given. Without one, a missing default file yields defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load()
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "hotelrev", "hotelrev")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
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
