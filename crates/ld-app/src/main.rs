//! Main application entry point

use anyhow::Result;
use tracing::info;

use ld_core::{AppSettings, Session, StartupError};

mod app;
mod scheduler;
mod startup;
mod surface;

use app::LineDrawApp;
use startup::StartupFailure;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = AppSettings::from_env()?;
    let session = Session::from_settings(&settings)?;

    info!("Starting line drawing surface");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([480.0, 480.0]),
        renderer: eframe::Renderer::Glow,
        default_theme: eframe::Theme::Light,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Line Draw",
        options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            match cc.gl.as_deref() {
                Some(gl) => Box::new(LineDrawApp::new(&cc.egui_ctx, gl, session, &settings)),
                None => Box::new(StartupFailure::new(
                    &cc.egui_ctx,
                    &StartupError::RenderingUnavailable,
                )),
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
