//! User interface components for the line drawing surface
//!
//! This crate provides the egui-based controls, the blocking message
//! dialog, the responsive layout shell and the theme.

pub mod controls;
pub mod dialog;
pub mod shell;
pub mod theme;

/// Re-export commonly used types
pub use controls::ControlPanel;
pub use dialog::{MessageQueue, UserMessage};
pub use shell::with_layout;
pub use theme::{Theme, apply_theme};
