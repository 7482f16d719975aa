//! # GUI Rendering Framework
//!
//! Renders the current screen from a cloned state snapshot and hosts the
//! eframe application shell.

pub mod locales;
pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Repaint interval while a guarded action is in flight
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::Auth => screens::auth::render(ui, &state, app),
        Screen::Home => screens::home::render(ui, &state, app),
    });
}

/// eframe application shell
pub struct ChatClientApp {
    app: App,
    notifications: NotificationManager,
    window_title: String,
}

impl ChatClientApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Theme::default().apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            window_title: String::new(),
        }
    }
}

impl eframe::App for ChatClientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sampled before draining: a task may settle between on_tick and the
        // check below, leaving its result queued.
        let was_pending = self.app.has_pending_action();
        self.app.on_tick();

        for notification in self.app.take_notifications() {
            self.notifications.push(notification);
        }

        render(ctx, &mut self.app);
        self.notifications.show(ctx);

        // Results arrive over the channel without an input event to wake egui.
        if was_pending || self.app.has_pending_action() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }

        let title = {
            let state = self.app.state.read();
            format!("{} - {}", state.title, state.current_screen.title())
        };
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}
