//! # Branding Components
//!
//! Header of the sign-in screen and the "OR" divider.

use egui;

use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size, Icons};

/// Bot logo above the configured title
pub fn render_header(ui: &mut egui::Ui, title: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.label(Icons::icon(glyph::BOT, size::XLARGE));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(title).size(26.0).strong().color(theme.normal));
    });
}

/// Horizontal rule, centered text, horizontal rule
pub fn render_divider(ui: &mut egui::Ui, text: &str, width: f32, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 20.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let gap = 20.0;
    let stroke = egui::Stroke::new(1.0, theme.border);

    painter.line_segment(
        [egui::pos2(rect.left(), center.y), egui::pos2(center.x - gap, center.y)],
        stroke,
    );
    painter.line_segment(
        [egui::pos2(center.x + gap, center.y), egui::pos2(rect.right(), center.y)],
        stroke,
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(12.0),
        theme.dim,
    );
}
