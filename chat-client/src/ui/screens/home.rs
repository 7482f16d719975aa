//! # Home Screen
//!
//! Landing screen after sign-in.

use egui::{self, RichText};
use shared::mask_identity;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::icons::glyph;
use crate::ui::widgets::branding;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let strings = state.lang.strings();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        branding::render_header(ui, &state.title, &theme);
        ui.add_space(24.0);

        // Password sign-in navigates before the session event lands.
        let Some(session) = &state.session else {
            ui.spinner();
            forms::render_hint(ui, strings.finishing_sign_in, &theme);
            return;
        };

        ui.label(
            RichText::new(format!("{} {} {}", glyph::USER, strings.signed_in_as, session.user.username))
                .size(18.0),
        );
        if let Some(contact) = session.user.email.as_deref().or(session.user.phone.as_deref()) {
            forms::render_hint(ui, &mask_identity(contact), &theme);
        }
        ui.add_space(16.0);

        if forms::render_button(ui, strings.sign_out, None, &theme, false, Some(egui::vec2(FIELD_WIDTH, 36.0)))
            .clicked()
        {
            app.handle_sign_out();
        }
    });
}
