//! # Application State Types
//!
//! Screens, the sign-in screen state, the in-memory session, and queued
//! notifications.

use std::sync::Arc;

use shared::UserInfo;

use crate::auth::AuthScreen;
use crate::core::service::IdentityService;
use crate::ui::locales::Lang;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in screen (code, password, or delegated QR)
    Auth,
    /// Landing screen after a successful sign-in
    Home,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[Screen::Auth, Screen::Home]
    }

    /// Get screen title for the window title bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign in",
            Screen::Home => "Home",
        }
    }
}

/// Signed-in session. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// Toast queued by the event handler, drained by the UI each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Info(String),
    Error(String),
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// Header title from configuration
    pub title: String,
    /// String table for labels
    pub lang: Lang,
    pub auth: AuthScreen,
    pub session: Option<Session>,
    pub identity: Option<Arc<dyn IdentityService>>,
    pub pending_notifications: Vec<Notification>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("current_screen", &self.current_screen)
            .field("title", &self.title)
            .field("lang", &self.lang)
            .field("auth", &self.auth)
            .field("session", &self.session.as_ref().map(|s| &s.user.username))
            .field("identity", &self.identity.is_some())
            .field("pending_notifications", &self.pending_notifications.len())
            .finish()
    }
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }
}
