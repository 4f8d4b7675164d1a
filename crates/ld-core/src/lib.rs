//! Core functionality for the line drawing surface
//!
//! This crate holds the session state (points, render configuration), the
//! input handlers that mutate it, and the settings it is built from.

pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod points;
pub mod settings;
pub mod state;

// Re-export commonly used types
pub use error::{InputError, SettingsError, StartupError};
pub use events::{InputAction, Redraw};
pub use layout::{LayoutDirection, ResponsiveLayout};
pub use points::{Point, PointSequence};
pub use settings::{AppSettings, SURFACE_MIN_DIMENSION};
pub use state::{RenderConfig, Session, SurfaceLimits};
