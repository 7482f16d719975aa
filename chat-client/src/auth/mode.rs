//! # Mode Selector
//!
//! Which identity mechanism the sign-in screen shows, and how the two toggle
//! affordances move between them.
//!
//! The two toggles are independent binary choices over one tri-state value:
//!
//! ```text
//!                 Toggle::Delegated
//!   DelegatedQr <-------------------> PhoneCode <-------------------> EmailPassword
//!                                               Toggle::Password
//! ```
//!
//! `Toggle::Delegated` pressed from `EmailPassword` lands on `DelegatedQr`,
//! and `Toggle::Password` pressed from `DelegatedQr` lands on `EmailPassword`.
//! Neither toggle ever keeps the mode on the other toggle's target. Do not
//! collapse this into a single rotating cycle; the navigation is observable.

/// Active identity mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    /// Phone or email plus a one-time code
    #[default]
    PhoneCode,
    /// Email plus password
    EmailPassword,
    /// Third-party QR code login
    DelegatedQr,
}

impl AuthMode {
    pub fn all() -> &'static [AuthMode] {
        &[AuthMode::PhoneCode, AuthMode::EmailPassword, AuthMode::DelegatedQr]
    }

    /// Toggle-A: between the code mechanism and the delegated QR mechanism.
    pub fn toggle_delegated(self) -> AuthMode {
        match self {
            AuthMode::DelegatedQr => AuthMode::PhoneCode,
            _ => AuthMode::DelegatedQr,
        }
    }

    /// Toggle-B: between the code mechanism and the password mechanism.
    pub fn toggle_password(self) -> AuthMode {
        match self {
            AuthMode::EmailPassword => AuthMode::PhoneCode,
            _ => AuthMode::EmailPassword,
        }
    }

    /// Stable name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::PhoneCode => "phone-code",
            AuthMode::EmailPassword => "email-password",
            AuthMode::DelegatedQr => "delegated-qr",
        }
    }
}

/// The two toggle affordances under the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// "Use WeChat" / "Use code"
    Delegated,
    /// "Use password" / "Use code"
    Password,
}

impl Toggle {
    pub fn apply(self, mode: AuthMode) -> AuthMode {
        match self {
            Toggle::Delegated => mode.toggle_delegated(),
            Toggle::Password => mode.toggle_password(),
        }
    }
}

/// What a toggle currently offers to switch to. Labels and icons invert with
/// the mode: while a toggle's own target is active it offers the way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOffer {
    Code,
    Delegated,
    Password,
}

/// Holds the active mode for the screen's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSelector {
    mode: AuthMode,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Apply a toggle press and return the new mode.
    pub fn press(&mut self, toggle: Toggle) -> AuthMode {
        let from = self.mode;
        self.mode = toggle.apply(from);
        tracing::debug!(
            toggle = ?toggle,
            from = from.as_str(),
            to = self.mode.as_str(),
            "Auth mode toggled"
        );
        self.mode
    }

    pub fn offer(&self, toggle: Toggle) -> ToggleOffer {
        match (toggle, self.mode) {
            (Toggle::Delegated, AuthMode::DelegatedQr) => ToggleOffer::Code,
            (Toggle::Delegated, _) => ToggleOffer::Delegated,
            (Toggle::Password, AuthMode::EmailPassword) => ToggleOffer::Code,
            (Toggle::Password, _) => ToggleOffer::Password,
        }
    }
}
