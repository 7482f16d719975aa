//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;
use crate::ui::theme::Theme;

/// Width shared by inputs and primary buttons
pub const FIELD_WIDTH: f32 = 280.0;

/// Render a single-line input with a placeholder and no label
pub fn render_text_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint)
            .margin(egui::vec2(10.0, 6.0)),
    )
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    theme: &Theme,
    primary: bool,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let button_text = if let Some(icon) = icon {
        format!("{} {}", icon, text)
    } else {
        text.to_string()
    };

    let mut rich = egui::RichText::new(button_text).size(15.0);
    if primary {
        rich = rich.color(egui::Color32::WHITE);
    }
    let mut button = egui::Button::new(rich);
    if primary {
        button = button.fill(theme.selected);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(13.0).color(theme.error));
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(12.0).color(theme.dim));
}

/// True when Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
