//! Shown instead of the application when initialization cannot proceed

use egui::Context;
use ld_core::StartupError;
use ld_ui::{MessageQueue, Theme, UserMessage};
use tracing::error;

/// App that only displays a fatal startup error
pub struct StartupFailure {
    messages: MessageQueue,
}

impl StartupFailure {
    pub fn new(ctx: &Context, err: &StartupError) -> Self {
        error!("Startup aborted: {err}");
        ld_ui::apply_theme(ctx, &Theme::default());

        let mut messages = MessageQueue::new();
        messages.push(UserMessage::new("Cannot start", err.to_string()));
        Self { messages }
    }
}

impl eframe::App for StartupFailure {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |_ui| {});
        if self.messages.show(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
