//! # Navigation Handlers
//!
//! Handlers for screen navigation and sign-out.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change
///
/// A navigation to [`Screen::Home`] can arrive before the login result that
/// stores the session, so protected screens are not redirected here; the home
/// screen renders a waiting state until the session exists.
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: &Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::info!(from = state.current_screen.title(), to = screen.title(), "Screen changed");
    }
    state.current_screen = screen;
}

/// Drop the session and return to a freshly mounted sign-in screen.
///
/// Internal handler function - use [`crate::app::App::handle_sign_out`] instead.
pub(crate) fn handle_sign_out(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session = None;
    state.auth.reset();
    state.current_screen = Screen::Auth;
    tracing::info!("Signed out");
}
