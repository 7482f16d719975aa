//! # Sign-in Sub-forms
//!
//! One controller per mode. Each owns its draft, its inline error, and its
//! own submission guards; a mode switch drops the old controller and mounts
//! a fresh one.

use crate::auth::bridge::{BridgeParams, DelegatedSurface};
use crate::auth::draft::{CodeDraft, PasswordDraft};
use crate::auth::guard::SubmissionGuard;
use crate::auth::mode::AuthMode;

/// Label state of the "get code" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeButtonLabel {
    GetCode,
    Sent,
}

/// Phone/email + one-time code form
#[derive(Debug, Clone)]
pub struct CodeLoginForm {
    pub draft: CodeDraft,
    pub error: Option<String>,
    submit: SubmissionGuard,
    request_code: SubmissionGuard,
}

impl Default for CodeLoginForm {
    fn default() -> Self {
        Self {
            draft: CodeDraft::default(),
            error: None,
            submit: SubmissionGuard::new("code_login"),
            request_code: SubmissionGuard::new("request_code"),
        }
    }
}

impl CodeLoginForm {
    pub fn submit_guard(&self) -> &SubmissionGuard {
        &self.submit
    }

    pub fn request_code_guard(&self) -> &SubmissionGuard {
        &self.request_code
    }

    /// "Sent" for exactly as long as a code request is in flight.
    pub fn code_button_label(&self) -> CodeButtonLabel {
        if self.request_code.is_pending() {
            CodeButtonLabel::Sent
        } else {
            CodeButtonLabel::GetCode
        }
    }
}

/// Email + password form
#[derive(Debug, Clone)]
pub struct PasswordLoginForm {
    pub draft: PasswordDraft,
    pub error: Option<String>,
    submit: SubmissionGuard,
}

impl Default for PasswordLoginForm {
    fn default() -> Self {
        Self {
            draft: PasswordDraft::default(),
            error: None,
            submit: SubmissionGuard::new("password_login"),
        }
    }
}

impl PasswordLoginForm {
    pub fn submit_guard(&self) -> &SubmissionGuard {
        &self.submit
    }
}

/// Delegated QR form. No local fields; the third party owns the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedLoginForm {
    pub surface: DelegatedSurface,
}

/// The mounted sub-form.
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Code(CodeLoginForm),
    Password(PasswordLoginForm),
    Delegated(DelegatedLoginForm),
}

impl ActiveForm {
    /// Mount a fresh, empty sub-form for `mode`.
    ///
    /// The delegated surface is resolved here, once per mount.
    pub fn mount(mode: AuthMode, bridge: &BridgeParams) -> Self {
        match mode {
            AuthMode::PhoneCode => ActiveForm::Code(CodeLoginForm::default()),
            AuthMode::EmailPassword => ActiveForm::Password(PasswordLoginForm::default()),
            AuthMode::DelegatedQr => ActiveForm::Delegated(DelegatedLoginForm {
                surface: DelegatedSurface::resolve(bridge),
            }),
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            ActiveForm::Code(_) => AuthMode::PhoneCode,
            ActiveForm::Password(_) => AuthMode::EmailPassword,
            ActiveForm::Delegated(_) => AuthMode::DelegatedQr,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActiveForm::Code(form) => form.error.as_deref(),
            ActiveForm::Password(form) => form.error.as_deref(),
            ActiveForm::Delegated(_) => None,
        }
    }

    /// The delegated form has nowhere to show an error; it is dropped there.
    pub fn set_error(&mut self, error: Option<String>) {
        match self {
            ActiveForm::Code(form) => form.error = error,
            ActiveForm::Password(form) => form.error = error,
            ActiveForm::Delegated(_) => {}
        }
    }
}
