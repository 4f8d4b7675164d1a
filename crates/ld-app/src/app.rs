//! Main application state

use std::sync::Arc;

use eframe::glow;
use egui::Context;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use ld_core::{AppSettings, InputAction, InputError, ResponsiveLayout, Session};
use ld_render::{route_redraw, PolylineRenderer, RevealAnimator};
use ld_ui::{ControlPanel, MessageQueue, Theme, UserMessage};

use crate::scheduler::FrameScheduler;
use crate::surface;

/// The line drawing application
pub struct LineDrawApp {
    /// Points and render configuration, shared with the paint callback
    session: Arc<RwLock<Session>>,

    /// GL renderer, compiled once at startup
    renderer: Arc<Mutex<PolylineRenderer>>,

    /// Reveal runs in flight
    animator: RevealAnimator,

    /// Control widget state
    controls: ControlPanel,

    /// Pending validation messages
    messages: MessageQueue,

    /// Column/row switch driven by the viewport width
    layout: ResponsiveLayout,

    /// Source for random points
    rng: StdRng,
}

impl LineDrawApp {
    pub fn new(ctx: &Context, gl: &glow::Context, session: Session, settings: &AppSettings) -> Self {
        ld_ui::apply_theme(ctx, &Theme::default());

        let renderer = PolylineRenderer::new(gl);
        if !renderer.is_valid() {
            warn!("Shader pipeline unavailable; the surface will stay blank");
        }
        let controls = ControlPanel::new(session.config());
        info!(
            points = session.points().len(),
            width = session.config().width,
            height = session.config().height,
            "Session ready"
        );

        Self {
            session: Arc::new(RwLock::new(session)),
            renderer: Arc::new(Mutex::new(renderer)),
            animator: RevealAnimator::new(),
            controls,
            messages: MessageQueue::new(),
            layout: ResponsiveLayout::new(settings.layout_breakpoint),
            rng: StdRng::from_entropy(),
        }
    }

    /// Apply one action and schedule the redraw it calls for
    fn dispatch(&mut self, ctx: &Context, action: InputAction) {
        let result = self.session.write().apply(action, &mut self.rng);
        match result {
            Ok(redraw) => {
                let session = self.session.read();
                let mut scheduler = FrameScheduler::new(ctx);
                route_redraw(redraw, &session, &mut self.animator, &mut scheduler);
            }
            Err(err) => {
                self.messages.push(UserMessage::new(message_title(&err), err.to_string()));
                ctx.request_repaint();
            }
        }
    }

    /// One refresh tick for every reveal run in flight
    fn tick_animations(&mut self, ctx: &Context) {
        let session = self.session.read();
        let mut scheduler = FrameScheduler::new(ctx);
        self.animator.tick(&session, &mut scheduler);

        // Keep ticking until every run has seen its terminal check.
        if !self.animator.is_idle() {
            ctx.request_repaint();
        }
    }
}

fn message_title(err: &InputError) -> &'static str {
    match err {
        InputError::MalformedCoordinate { .. }
        | InputError::NonNumeric { .. }
        | InputError::OutOfBounds { .. } => "Invalid coordinate",
        InputError::InvalidDimension { .. } | InputError::DimensionTooSmall { .. } => {
            "Invalid surface size"
        }
    }
}

impl eframe::App for LineDrawApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let direction = self.layout.update(ctx.screen_rect().width());
        let blocked = self.messages.is_blocking();
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ld_ui::with_layout(ui, direction, |ui| {
                    actions.extend(self.controls.ui(ui));
                    ui.separator();
                    if let Some(point) = surface::show(ui, &self.session, &self.renderer) {
                        actions.push(InputAction::Click(point));
                    }
                });
            });
        });

        self.messages.show(ctx);

        for action in actions {
            self.dispatch(ctx, action);
        }
        self.tick_animations(ctx);
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.renderer.lock().destroy(gl);
        }
        info!("Shut down");
    }
}
