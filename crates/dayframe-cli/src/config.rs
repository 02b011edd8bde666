//! Application configuration: built-in defaults, an optional JSON file, and
//! command line overrides, applied in that order.

use std::path::{Path, PathBuf};

use clap::Args;
use dayframe_core::PipelineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default destination for the `daily` command.
pub const DEFAULT_OUTPUT_PATH: &str = "images/latest.jpg";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where and how the daily image is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL prefix; `/<YYYY>/<MMDD>.jpg` is appended.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Days added to the current UTC date when picking the image.
    pub day_offset: i64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            day_offset: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub output_path: PathBuf,
    pub pipeline: PipelineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Pipeline settings that can be overridden from the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct PipelineOverrides {
    /// Canvas width before rotation
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// Canvas height before rotation
    #[arg(long, global = true)]
    pub height: Option<u32>,

    /// Pixels cropped from each of the left and right edges
    #[arg(long = "crop-x", global = true)]
    pub crop_x: Option<u32>,

    /// Pixels cropped from each of the top and bottom edges
    #[arg(long = "crop-y", global = true)]
    pub crop_y: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Apply the source's EXIF orientation before cropping
    #[arg(long = "exif-orientation", global = true)]
    pub exif_orientation: bool,
}

impl PipelineOverrides {
    pub fn apply(&self, pipeline: &mut PipelineConfig) {
        if let Some(width) = self.width {
            pipeline.output_width = width;
        }
        if let Some(height) = self.height {
            pipeline.output_height = height;
        }
        if let Some(crop_x) = self.crop_x {
            pipeline.crop_x = crop_x;
        }
        if let Some(crop_y) = self.crop_y {
            pipeline.crop_y = crop_y;
        }
        if let Some(quality) = self.quality {
            pipeline.jpeg_quality = quality;
        }
        if self.exif_orientation {
            pipeline.apply_exif_orientation = true;
        }
    }
}
