//! # Authentication Screen
//!
//! Header, the mounted sign-in form, the "OR" divider, and the two mode
//! toggles.
//!
//! Typed input is written back to the form only while the form that was
//! rendered is still mounted.

use egui::{self, RichText};

use crate::app::{App, AppState};
use crate::auth::{ActiveForm, CodeLoginForm, DelegatedLoginForm, DelegatedSurface, PasswordLoginForm, Toggle};
use crate::ui::locales::Strings;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::icons::{glyph, Icons};
use crate::ui::widgets::branding;

const FIELD_HEIGHT: f32 = 34.0;
const GET_CODE_WIDTH: f32 = 100.0;
const QR_SIZE: f32 = 200.0;

/// Render the sign-in screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let strings = state.lang.strings();
    let auth = &state.auth;
    let mount_id = auth.mount_id();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        branding::render_header(ui, &state.title, &theme);
        ui.add_space(24.0);

        match auth.form() {
            ActiveForm::Code(form) => render_code_form(ui, form, mount_id, strings, app, &theme),
            ActiveForm::Password(form) => render_password_form(ui, form, mount_id, strings, app, &theme),
            ActiveForm::Delegated(form) => render_delegated(ui, form, strings, app, &theme),
        }

        ui.add_space(16.0);
        branding::render_divider(ui, strings.divider, FIELD_WIDTH, &theme);
        ui.add_space(8.0);

        for toggle in [Toggle::Delegated, Toggle::Password] {
            let offer = auth.offer(toggle);
            let text = format!("{} {}", Icons::for_offer(offer), strings.offer(offer));
            let button = egui::Button::new(RichText::new(text).color(theme.dim)).frame(false);
            if ui.add(button).clicked() {
                app.handle_toggle(toggle);
            }
        }
    });
}

fn render_code_form(
    ui: &mut egui::Ui,
    form: &CodeLoginForm,
    mount_id: u64,
    strings: &Strings,
    app: &mut App,
    theme: &Theme,
) {
    let mut identity = form.draft.identity.clone();
    let mut code = form.draft.code.clone();

    let identity_response = forms::render_text_input(
        ui,
        &mut identity,
        strings.identity_placeholder,
        false,
        [FIELD_WIDTH, FIELD_HEIGHT],
    );
    ui.add_space(8.0);

    let (code_response, get_code_clicked) = ui
        .allocate_ui(egui::vec2(FIELD_WIDTH, FIELD_HEIGHT), |ui| {
            ui.horizontal(|ui| {
                let code_response = forms::render_text_input(
                    ui,
                    &mut code,
                    strings.code_placeholder,
                    false,
                    [FIELD_WIDTH - GET_CODE_WIDTH - 8.0, FIELD_HEIGHT],
                );
                let label = strings.code_button(form.code_button_label());
                let clicked = forms::render_button(
                    ui,
                    label,
                    None,
                    theme,
                    true,
                    Some(egui::vec2(GET_CODE_WIDTH, FIELD_HEIGHT)),
                )
                .clicked();
                (code_response, clicked)
            })
            .inner
        })
        .inner;

    let submit = forms::submitted(ui, &identity_response) || forms::submitted(ui, &code_response);

    if identity != form.draft.identity || code != form.draft.code {
        let mut state = app.state.write();
        if state.auth.is_current(mount_id) {
            if let Some(current) = state.auth.code_form_mut() {
                current.draft.identity = identity;
                current.draft.code = code;
            }
        }
    }

    if let Some(err) = &form.error {
        ui.add_space(4.0);
        forms::render_error(ui, err, theme);
    }
    ui.add_space(12.0);

    let login_clicked = forms::render_button(
        ui,
        strings.login_register,
        None,
        theme,
        true,
        Some(egui::vec2(FIELD_WIDTH, 36.0)),
    )
    .clicked();

    if get_code_clicked {
        app.handle_request_code();
    }
    if login_clicked || submit {
        app.handle_code_login();
    }
}

fn render_password_form(
    ui: &mut egui::Ui,
    form: &PasswordLoginForm,
    mount_id: u64,
    strings: &Strings,
    app: &mut App,
    theme: &Theme,
) {
    let mut identity = form.draft.identity.clone();
    let mut password = form.draft.password.clone();

    let identity_response = forms::render_text_input(
        ui,
        &mut identity,
        strings.email_placeholder,
        false,
        [FIELD_WIDTH, FIELD_HEIGHT],
    );
    ui.add_space(8.0);
    let password_response = forms::render_text_input(
        ui,
        &mut password,
        strings.password_placeholder,
        true,
        [FIELD_WIDTH, FIELD_HEIGHT],
    );

    let submit = forms::submitted(ui, &identity_response) || forms::submitted(ui, &password_response);

    if identity != form.draft.identity || password != form.draft.password {
        let mut state = app.state.write();
        if state.auth.is_current(mount_id) {
            if let Some(current) = state.auth.password_form_mut() {
                current.draft.identity = identity;
                current.draft.password = password;
            }
        }
    }

    if let Some(err) = &form.error {
        ui.add_space(4.0);
        forms::render_error(ui, err, theme);
    }
    ui.add_space(12.0);

    if forms::render_button(ui, strings.submit, None, theme, true, Some(egui::vec2(FIELD_WIDTH, 36.0))).clicked()
        || submit
    {
        app.handle_password_login();
    }
    forms::render_hint(ui, strings.enter_hint, theme);
}

fn render_delegated(
    ui: &mut egui::Ui,
    form: &DelegatedLoginForm,
    strings: &Strings,
    app: &mut App,
    theme: &Theme,
) {
    match &form.surface {
        DelegatedSurface::Embed { url } => {
            forms::render_hint(ui, strings.scan_hint, theme);
            ui.add_space(8.0);
            let response = forms::render_button(
                ui,
                strings.open_in_browser,
                Some(glyph::OPEN),
                theme,
                true,
                Some(egui::vec2(FIELD_WIDTH, 36.0)),
            )
            .on_hover_text(url.as_str());
            if response.clicked() {
                app.handle_open_delegated();
            }
        }
        DelegatedSurface::StaticImage { url } => {
            ui.add(egui::Image::new(url.as_str()).fit_to_exact_size(egui::vec2(QR_SIZE, QR_SIZE)));
            forms::render_hint(ui, strings.delegated_unconfigured, theme);
        }
    }
}
