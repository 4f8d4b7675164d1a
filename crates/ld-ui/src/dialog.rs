//! Blocking user messages
//!
//! Messages are queued and shown one at a time in a centered window. While a
//! message is open the host disables every other widget.

use std::collections::VecDeque;

use egui::{Align2, Context, Id, RichText};

use crate::theme::error_color;

/// Message to display
#[derive(Debug, Clone, PartialEq)]
pub struct UserMessage {
    pub title: String,
    pub message: String,
}

impl UserMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// FIFO of pending messages
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: VecDeque<UserMessage>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: UserMessage) {
        tracing::debug!(title = %message.title, "Queued user message");
        self.pending.push_back(message);
    }

    /// Whether a message is currently open
    pub fn is_blocking(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn current(&self) -> Option<&UserMessage> {
        self.pending.front()
    }

    /// Close the open message, revealing the next one if any
    pub fn dismiss(&mut self) -> Option<UserMessage> {
        self.pending.pop_front()
    }

    /// Show the open message. Returns `true` on the frame it is dismissed.
    pub fn show(&mut self, ctx: &Context) -> bool {
        let Some(message) = self.pending.front() else {
            return false;
        };

        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .id(Id::new("user_message"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&message.message).color(error_color()));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss();
        }
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_shown_in_order() {
        let mut queue = MessageQueue::new();
        assert!(!queue.is_blocking());

        queue.push(UserMessage::new("Invalid coordinate", "first"));
        queue.push(UserMessage::new("Invalid size", "second"));
        assert!(queue.is_blocking());
        assert_eq!(queue.current().map(|m| m.message.as_str()), Some("first"));

        queue.dismiss();
        assert_eq!(queue.current().map(|m| m.message.as_str()), Some("second"));

        queue.dismiss();
        assert!(!queue.is_blocking());
        assert!(queue.dismiss().is_none());
    }
}
