//! Editor settings loaded from TOML.
//!
//! Every field has a default, so a partial file (or none at all) is valid:
//!
//! ```toml
//! history_capacity = 50
//! blur_radius = 3.0
//! resize_filter = "bilinear"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::transform::{FilterType, InterpolationFilter};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {reason}")]
    Io { path: String, reason: String },

    /// The file is not valid TOML or has wrongly typed fields.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value outside its allowed range.
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the edit session and its image processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of snapshots kept in the undo history.
    pub history_capacity: usize,
    /// Gaussian blur radius used by the blur edit.
    pub blur_radius: f32,
    /// Largest width or height the resize edit accepts.
    pub max_dimension: u32,
    /// Resampling filter used by the resize edit.
    pub resize_filter: FilterType,
    /// Interpolation used for rotations that are not quarter turns.
    pub rotation_filter: InterpolationFilter,
    /// JPEG export quality (1-100).
    pub jpeg_quality: u8,
    /// Rotate/flip opened images according to their EXIF orientation tag.
    pub apply_exif_orientation: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            blur_radius: 2.0,
            max_dimension: 10_000,
            resize_filter: FilterType::Lanczos3,
            rotation_filter: InterpolationFilter::Bilinear,
            jpeg_quality: 75,
            apply_exif_orientation: false,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "history_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.blur_radius.is_finite() || self.blur_radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "blur_radius",
                reason: format!("must be a positive number, got {}", self.blur_radius),
            });
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid {
                field: "max_dimension",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid {
                field: "jpeg_quality",
                reason: format!("must be between 1 and 100, got {}", self.jpeg_quality),
            });
        }
        Ok(())
    }
}
