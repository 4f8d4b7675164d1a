use ld_core::Session;
use ld_render::Renderer;
use tracing::trace;

/// Renderer handed to the animator inside `update`.
///
/// GL work can only happen inside a paint callback, and the surface callback
/// already draws the latest session on every frame. A draw here therefore
/// schedules a repaint; draws requested within one frame share it.
pub struct FrameScheduler<'a> {
    ctx: &'a egui::Context,
    requested: usize,
}

impl<'a> FrameScheduler<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx, requested: 0 }
    }

    /// Draws requested through this scheduler
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl Renderer for FrameScheduler<'_> {
    fn draw(&mut self, session: &Session) {
        self.requested += 1;
        trace!(points = session.points().len(), "Redraw scheduled");
        self.ctx.request_repaint();
    }
}
