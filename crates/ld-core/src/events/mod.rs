//! Input events and the redraw each one requires

use crate::points::Point;

/// A user action that may mutate the session
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Append a uniformly random point inside the surface
    AddRandom,

    /// Append the point typed as `"x,y"`
    AddCoordinate(String),

    /// Resize the surface to the typed dimensions
    Resize { width: String, height: String },

    /// Append a clicked position, already in surface-local coordinates
    Click(Point),

    /// Change the rasterization line width
    SetLineWidth(f32),
}

/// How the host must refresh the surface after a successful action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Start a progressive reveal animation
    Reveal,

    /// Draw exactly once, without animation
    Once,
}
