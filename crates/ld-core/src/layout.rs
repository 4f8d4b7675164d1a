//! Responsive layout direction

use tracing::debug;

/// How the controls and the drawing surface are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Controls stacked above the surface
    Column,
    /// Controls beside the surface
    Row,
}

impl LayoutDirection {
    /// Column below the breakpoint, row at or above it
    pub fn for_viewport_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Column
        } else {
            Self::Row
        }
    }
}

/// Tracks the viewport width and re-evaluates the direction when it changes
#[derive(Debug, Clone)]
pub struct ResponsiveLayout {
    breakpoint: f32,
    viewport_width: Option<f32>,
    direction: LayoutDirection,
}

impl ResponsiveLayout {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            viewport_width: None,
            direction: LayoutDirection::Column,
        }
    }

    /// Feed the current viewport width, returning the direction to use
    pub fn update(&mut self, viewport_width: f32) -> LayoutDirection {
        if self.viewport_width != Some(viewport_width) {
            self.viewport_width = Some(viewport_width);
            let direction = LayoutDirection::for_viewport_width(viewport_width, self.breakpoint);
            if direction != self.direction {
                debug!(?direction, viewport_width, "Layout direction changed");
            }
            self.direction = direction;
        }
        self.direction
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }
}
