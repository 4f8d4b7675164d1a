//! Application settings
//!
//! Settings are read once at startup from an optional JSON file whose path
//! is given by the `LINEDRAW_CONFIG` environment variable. Missing fields
//! fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SettingsError;
use crate::points::PointSequence;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "LINEDRAW_CONFIG";

/// Smallest surface dimension any configuration may allow
pub const SURFACE_MIN_DIMENSION: u32 = 400;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Points the polyline starts with
    pub initial_points: Vec<[f32; 2]>,

    /// Initial surface width in pixels
    pub surface_width: u32,

    /// Initial surface height in pixels
    pub surface_height: u32,

    /// Initial rasterization line width
    pub line_width: f32,

    /// Smallest width or height a resize may request. Never below [`SURFACE_MIN_DIMENSION`].
    pub min_surface_dimension: u32,

    /// Viewport width at which the layout switches from column to row
    pub layout_breakpoint: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_points: vec![[0.0, 0.0], [50.0, 50.0]],
            surface_width: 500,
            surface_height: 500,
            line_width: 1.0,
            min_surface_dimension: SURFACE_MIN_DIMENSION,
            layout_breakpoint: 1300.0,
        }
    }
}

impl AppSettings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        info!("Loading settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load settings from the file named by [`CONFIG_ENV_VAR`], or the defaults if unset
    pub fn from_env() -> Result<Self, SettingsError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check the invariants the session relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.initial_points.len() < PointSequence::MIN_POINTS {
            return Err(SettingsError::TooFewPoints {
                found: self.initial_points.len(),
                required: PointSequence::MIN_POINTS,
            });
        }

        let min = self.min_surface_dimension;
        if min < SURFACE_MIN_DIMENSION {
            return Err(SettingsError::MinimumTooSmall {
                found: min,
                floor: SURFACE_MIN_DIMENSION,
            });
        }

        if self.surface_width < min || self.surface_height < min {
            return Err(SettingsError::SurfaceTooSmall {
                width: self.surface_width,
                height: self.surface_height,
                min,
            });
        }

        Ok(())
    }
}
