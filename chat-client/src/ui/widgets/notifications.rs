//! # Notifications Widget
//!
//! Toast notification system using egui-notify for code-sent and sign-in
//! results.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::Notification;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        let toasts = Toasts::default();

        Self { toasts }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(Duration::from_secs(3)));
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Some(Duration::from_secs(5)));
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message).duration(Some(Duration::from_secs(3)));
    }

    /// Turn a queued app notification into a toast
    pub fn push(&mut self, notification: Notification) {
        match notification {
            Notification::Success(message) => self.success(message),
            Notification::Info(message) => self.info(message),
            Notification::Error(message) => self.error(message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
