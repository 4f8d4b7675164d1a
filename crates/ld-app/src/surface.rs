//! The drawing surface widget
//!
//! The surface occupies exactly the configured width and height. Its pixels
//! come from a paint callback that runs the polyline renderer against the
//! session as it is at paint time, after this frame's input was handled.

use std::sync::Arc;

use eframe::egui_glow;
use egui::{Color32, ScrollArea, Sense, Stroke, Ui};
use parking_lot::{Mutex, RwLock};

use ld_core::{Point, Session};
use ld_render::{GlSurface, PolylineRenderer, Renderer};

/// Show the surface and return the surface-local position of a click, if any
pub fn show(
    ui: &mut Ui,
    session: &Arc<RwLock<Session>>,
    renderer: &Arc<Mutex<PolylineRenderer>>,
) -> Option<Point> {
    let size = {
        let session = session.read();
        let [width, height] = session.config().resolution();
        egui::vec2(width, height)
    };

    ScrollArea::both()
        .id_source("drawing_surface_scroll")
        .show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(size, Sense::click());

            let session = Arc::clone(session);
            let renderer = Arc::clone(renderer);
            let callback = egui::PaintCallback {
                rect,
                callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                    let session = session.read();
                    let mut renderer = renderer.lock();
                    GlSurface { renderer: &mut renderer, gl: painter.gl() }.draw(&session);
                })),
            };
            ui.painter().add(callback);
            ui.painter().rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::GRAY));

            if !response.clicked() {
                return None;
            }
            response.interact_pointer_pos().map(|pos| {
                let local = pos - rect.min;
                Point::new(local.x, local.y)
            })
        })
        .inner
}
