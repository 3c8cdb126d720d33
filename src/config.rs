//! Configuration
//!
//! Optional `dashboard.json` in the working directory. Every field has a
//! default, so a missing file or a partial file is fine.

use crate::data::LoadOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "dashboard.json";

/// Allowed range for the preview row slider.
pub const PREVIEW_ROWS: std::ops::RangeInclusive<usize> = 5..=20;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub image_path: Option<PathBuf>,
    /// Columns forced numeric regardless of inference.
    pub numeric_columns: Vec<String>,
    /// Columns forced to text regardless of inference.
    pub text_columns: Vec<String>,
    pub preview_rows: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("diabetes.csv"),
            image_path: Some(PathBuf::from("diabetes.png")),
            numeric_columns: Vec::new(),
            text_columns: Vec::new(),
            preview_rows: *PREVIEW_ROWS.start(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl DashboardConfig {
    /// Read the config file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Preview row default, clamped to the slider range.
    pub fn initial_preview_rows(&self) -> usize {
        self.preview_rows
            .clamp(*PREVIEW_ROWS.start(), *PREVIEW_ROWS.end())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            numeric_columns: self.numeric_columns.clone(),
            text_columns: self.text_columns.clone(),
        }
    }
}
