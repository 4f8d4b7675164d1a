//! Rendering layer
//!
//! This crate turns the session's point sequence into a drawn polyline.
//! [`PolylineRenderer`] does it with OpenGL; [`CountingRenderer`] is a
//! headless stand-in that only records draws. [`RevealAnimator`] drives
//! repeated draws across display refresh ticks.

pub mod animator;
pub mod gl;
pub mod shaders;
pub mod vertex;

pub use animator::{route_redraw, RevealAnimator, RunId};
pub use gl::{GlSurface, PolylineRenderer, ShaderError};

use ld_core::Session;

/// Trait for renderers
pub trait Renderer {
    /// Draw the full point sequence using the session's current state
    fn draw(&mut self, session: &Session);
}

/// Renderer that draws nothing and counts calls
#[derive(Debug, Default)]
pub struct CountingRenderer {
    /// Number of `draw` calls so far
    pub draws: usize,

    /// Point count seen by the most recent draw
    pub last_point_count: usize,
}

impl Renderer for CountingRenderer {
    fn draw(&mut self, session: &Session) {
        self.draws += 1;
        self.last_point_count = session.points().len();
    }
}
