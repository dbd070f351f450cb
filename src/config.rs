//! Explorer configuration: which views start enabled, ranking size and
//! export dimensions. Stored as JSON next to the working directory.

use crate::dashboard::{ReportOptions, ViewFlags};
use crate::stats::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "FOOD_EXPLORER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "food_explorer.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pixel sizes for exported PNG charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub chart_width: u32,
    pub chart_height: u32,
    pub heatmap_size: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            chart_width: 1000,
            chart_height: 700,
            heatmap_size: 900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub views: ViewFlags,
    pub top_n: usize,
    pub preview_rows: usize,
    pub export: ExportSettings,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            views: ViewFlags::default(),
            top_n: DEFAULT_TOP_N,
            preview_rows: 100,
            export: ExportSettings::default(),
        }
    }
}

impl ExplorerConfig {
    /// `$FOOD_EXPLORER_CONFIG`, or `food_explorer.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `path`, falling back to defaults when it is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_n: self.top_n,
            preview_rows: self.preview_rows,
        }
    }
}
