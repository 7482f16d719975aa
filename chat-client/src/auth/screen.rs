//! # Sign-in Screen Controller
//!
//! Composes the mode selector, the mounted sub-form, and the bridge
//! parameters. Every toggle press remounts the sub-form, which bumps the
//! mount id; async results started under an older mount id are stale and
//! must not touch the current form.

use crate::auth::bridge::BridgeParams;
use crate::auth::forms::{ActiveForm, CodeLoginForm, PasswordLoginForm};
use crate::auth::mode::{AuthMode, ModeSelector, Toggle, ToggleOffer};

#[derive(Debug, Clone)]
pub struct AuthScreen {
    selector: ModeSelector,
    form: ActiveForm,
    bridge: BridgeParams,
    mount_id: u64,
}

impl AuthScreen {
    pub fn new(bridge: BridgeParams) -> Self {
        let selector = ModeSelector::new();
        let form = ActiveForm::mount(selector.mode(), &bridge);
        Self {
            selector,
            form,
            bridge,
            mount_id: 0,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.selector.mode()
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn is_current(&self, mount_id: u64) -> bool {
        self.mount_id == mount_id
    }

    pub fn offer(&self, toggle: Toggle) -> ToggleOffer {
        self.selector.offer(toggle)
    }

    pub fn form(&self) -> &ActiveForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ActiveForm {
        &mut self.form
    }

    pub fn code_form(&self) -> Option<&CodeLoginForm> {
        match &self.form {
            ActiveForm::Code(form) => Some(form),
            _ => None,
        }
    }

    pub fn code_form_mut(&mut self) -> Option<&mut CodeLoginForm> {
        match &mut self.form {
            ActiveForm::Code(form) => Some(form),
            _ => None,
        }
    }

    pub fn password_form(&self) -> Option<&PasswordLoginForm> {
        match &self.form {
            ActiveForm::Password(form) => Some(form),
            _ => None,
        }
    }

    pub fn password_form_mut(&mut self) -> Option<&mut PasswordLoginForm> {
        match &mut self.form {
            ActiveForm::Password(form) => Some(form),
            _ => None,
        }
    }

    /// Apply a toggle press and mount the sub-form for the new mode.
    ///
    /// In-flight actions of the old form keep running; only their visible
    /// affordance goes away.
    pub fn press(&mut self, toggle: Toggle) -> AuthMode {
        let mode = self.selector.press(toggle);
        self.form = ActiveForm::mount(mode, &self.bridge);
        self.mount_id = self.mount_id.wrapping_add(1);
        tracing::info!(mode = mode.as_str(), mount_id = self.mount_id, "Sign-in form mounted");
        mode
    }

    /// Return to the default mode with an empty form.
    ///
    /// The mount id keeps counting, so results from before the reset stay stale.
    pub fn reset(&mut self) {
        self.selector = ModeSelector::new();
        self.form = ActiveForm::mount(self.selector.mode(), &self.bridge);
        self.mount_id = self.mount_id.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> AuthScreen {
        AuthScreen::new(BridgeParams::new("wx123", "https://chat.example.com/login"))
    }

    #[test]
    fn test_new_screen_mounts_code_form() {
        let screen = screen();
        assert_eq!(screen.mode(), AuthMode::PhoneCode);
        assert_eq!(screen.mount_id(), 0);
        assert!(screen.code_form().is_some());
    }

    #[test]
    fn test_delegated_round_trip() {
        let mut screen = screen();
        assert_eq!(screen.press(Toggle::Delegated), AuthMode::DelegatedQr);
        assert!(matches!(screen.form(), ActiveForm::Delegated(_)));
        assert_eq!(screen.press(Toggle::Delegated), AuthMode::PhoneCode);
        assert!(screen.code_form().is_some());
    }

    #[test]
    fn test_mode_switch_discards_typed_input() {
        let mut screen = screen();
        if let Some(form) = screen.code_form_mut() {
            form.draft.identity = "13800138000".to_string();
            form.error = Some("Invalid code".to_string());
        }

        screen.press(Toggle::Password);
        let password = screen.password_form().expect("password form mounted");
        assert!(password.draft.identity.is_empty());
        assert!(password.error.is_none());

        screen.press(Toggle::Password);
        let code = screen.code_form().expect("code form mounted");
        assert!(code.draft.identity.is_empty());
        assert!(code.error.is_none());
    }

    #[test]
    fn test_remount_gets_fresh_guards() {
        let mut screen = screen();
        let old_guard = screen.code_form().expect("code form").submit_guard().clone();
        let _permit = old_guard.try_acquire().expect("permit in test");

        screen.press(Toggle::Delegated);
        screen.press(Toggle::Delegated);

        let new_guard = screen.code_form().expect("code form").submit_guard();
        assert!(old_guard.is_pending());
        assert!(!new_guard.is_pending());
    }

    #[test]
    fn test_every_press_bumps_mount_id() {
        let mut screen = screen();
        let first = screen.mount_id();
        screen.press(Toggle::Password);
        assert!(!screen.is_current(first));
        assert!(screen.is_current(screen.mount_id()));
    }

    #[test]
    fn test_reset_returns_to_code_mode_with_new_mount() {
        let mut screen = screen();
        screen.press(Toggle::Password);
        let before = screen.mount_id();

        screen.reset();
        assert_eq!(screen.mode(), AuthMode::PhoneCode);
        assert!(screen.code_form().is_some());
        assert!(!screen.is_current(before));
    }
}
