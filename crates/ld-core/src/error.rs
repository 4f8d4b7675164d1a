//! Error types shared across the workspace

use thiserror::Error;

/// Rejected user input. The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Coordinates must be entered as \"x,y\" (got \"{input}\")")]
    MalformedCoordinate { input: String },

    #[error("\"{value}\" is not a number")]
    NonNumeric { value: String },

    #[error("Point ({x}, {y}) is outside the surface (0..={width}, 0..={height})")]
    OutOfBounds { x: f32, y: f32, width: u32, height: u32 },

    #[error("\"{value}\" is not a valid dimension")]
    InvalidDimension { value: String },

    #[error("Width and height must both be at least {min} (got {width}x{height})")]
    DimensionTooSmall { width: u32, height: u32, min: u32 },
}

/// Problems loading or validating [`crate::AppSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("at least {required} initial points are required, found {found}")]
    TooFewPoints { found: usize, required: usize },

    #[error("minimum surface dimension {found} is below the floor of {floor}")]
    MinimumTooSmall { found: u32, floor: u32 },

    #[error("initial surface {width}x{height} is smaller than the minimum {min}")]
    SurfaceTooSmall { width: u32, height: u32, min: u32 },
}

/// Conditions that abort initialization
#[derive(Debug, Clone, Error)]
pub enum StartupError {
    #[error("Your system does not provide an OpenGL rendering context. The drawing surface cannot be shown.")]
    RenderingUnavailable,
}
