//! # Event Handler
//!
//! Handles async event results from identity service tasks, updating
//! application state accordingly.
//!
//! Events tagged with a mount id that is no longer current belong to a
//! sub-form the user already switched away from, or to an attempt made before
//! signing out. They are dropped whole: no error, no toast, no navigation, and
//! no session.

use shared::{AuthResponse, CodeSentResponse};

use crate::app::state::{Notification, Screen, Session};
use crate::app::{handlers, App, AppEvent};
use crate::core::error::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::CodeRequestResult { mount_id, result } => {
                self.handle_code_request_result(mount_id, result);
            }
            AppEvent::LoginResult { mount_id, result, then } => {
                self.handle_login_result(mount_id, result, then);
            }
            AppEvent::Navigate { mount_id, screen } => {
                if self.state.read().auth.is_current(mount_id) {
                    handlers::navigation::handle_screen_change(&self.state, screen);
                } else {
                    tracing::debug!(mount_id, screen = screen.title(), "Ignoring stale navigation");
                }
            }
        }
    }
}

impl App {
    fn handle_code_request_result(&mut self, mount_id: u64, result: Result<CodeSentResponse, AppError>) {
        tracing::info!(event = "CodeRequestResult", mount_id, success = result.is_ok(), "Processing code request result");

        let mut state = self.state.write();
        if !state.auth.is_current(mount_id) {
            tracing::debug!(mount_id, current = state.auth.mount_id(), "Ignoring stale code request result");
            return;
        }

        match result {
            Ok(response) => {
                state.notify(Notification::Info(response.message));
            }
            Err(err) => {
                state.auth.form_mut().set_error(Some(err.message().to_string()));
                state.notify(Notification::Error(err.message().to_string()));
            }
        }
    }

    fn handle_login_result(&mut self, mount_id: u64, result: Result<AuthResponse, AppError>, then: Option<Screen>) {
        tracing::info!(event = "LoginResult", mount_id, success = result.is_ok(), "Processing login result");

        {
            let mut state = self.state.write();
            if !state.auth.is_current(mount_id) {
                tracing::debug!(mount_id, current = state.auth.mount_id(), "Ignoring stale login result");
                return;
            }

            match result {
                Ok(response) => {
                    tracing::info!(user_id = %response.user.id, "Session established");
                    state.session = Some(Session {
                        token: response.token,
                        user: response.user,
                    });
                    state.auth.form_mut().set_error(None);
                    state.notify(Notification::Success(response.message));
                }
                Err(err) => {
                    state.auth.form_mut().set_error(Some(err.message().to_string()));
                    state.notify(Notification::Error(err.message().to_string()));
                    return;
                }
            }
        }

        if let Some(screen) = then {
            handlers::navigation::handle_screen_change(&self.state, screen);
        }
    }
}
