//! # Authentication Handlers
//!
//! Handlers for the sign-in screen: mode toggles, verification code requests,
//! and the two credential submissions.
//!
//! Every submission goes through [`prepare`] and the sub-form's
//! [`SubmissionGuard`]. A trigger while the guard is pending returns `false`
//! and touches nothing. Validation failures are written to the sub-form's
//! error line without calling the identity service.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::navigator::ChannelNavigator;
use crate::app::state::{AppState, Notification, Screen};
use crate::auth::{ActiveForm, AuthMode, SubmissionGuard, Toggle};
use crate::core::error::{AppError, Result};
use crate::core::service::IdentityService;

/// The wired identity service, or a state error for the form's error line.
fn identity_service(state: &AppState) -> Result<Arc<dyn IdentityService>> {
    state
        .identity
        .clone()
        .ok_or_else(|| AppError::State("Identity service not available".to_string()))
}

/// Press one of the two mode toggles.
///
/// Internal handler function - use [`crate::app::App::handle_toggle`] instead.
pub(crate) fn handle_toggle(state: &Arc<RwLock<AppState>>, toggle: Toggle) -> AuthMode {
    let mut state = state.write();
    state.auth.press(toggle)
}

/// A validated submission, holding everything its task needs.
struct Submission<R> {
    guard: SubmissionGuard,
    request: R,
    mount_id: u64,
    identity: Arc<dyn IdentityService>,
}

/// The one path every credential action goes through.
///
/// `select` picks the guard and builds the request from the mounted form, or
/// returns `None` when the form it needs is not mounted. A pending guard wins
/// over everything else: nothing is validated and the form is left as is.
/// Otherwise the form's error line is set on failure and cleared on success.
fn prepare<R, F>(state: &Arc<RwLock<AppState>>, select: F) -> Option<Submission<R>>
where
    F: FnOnce(&ActiveForm) -> Option<(SubmissionGuard, Result<R>)>,
{
    let mut state = state.write();
    let (guard, request) = select(state.auth.form())?;
    if guard.is_pending() {
        return None;
    }

    let prepared = request.and_then(|request| Ok((request, identity_service(&state)?)));
    match prepared {
        Ok((request, identity)) => {
            state.auth.form_mut().set_error(None);
            Some(Submission {
                guard,
                request,
                mount_id: state.auth.mount_id(),
                identity,
            })
        }
        Err(e) => {
            state.auth.form_mut().set_error(Some(e.message().to_string()));
            None
        }
    }
}

/// Handle the "Get Code" button.
///
/// Internal handler function - use [`crate::app::App::handle_request_code`] instead.
pub(crate) fn handle_request_code(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) -> bool {
    let Some(Submission { guard, request, mount_id, identity }) = prepare(state, |form| match form {
        ActiveForm::Code(form) => Some((form.request_code_guard().clone(), form.draft.code_request())),
        _ => None,
    }) else {
        return false;
    };

    let tx = event_tx.clone();
    guard
        .spawn(move || async move {
            let result = identity.request_code(request).await;
            let _ = tx.send(AppEvent::CodeRequestResult { mount_id, result }).await;
        })
        .is_some()
}

/// Handle "Login / Register" on the code form.
///
/// The result asks for the home screen; the event handler only honours that
/// while this form is still mounted.
///
/// Internal handler function - use [`crate::app::App::handle_code_login`] instead.
pub(crate) fn handle_code_login(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) -> bool {
    let Some(Submission { guard, request, mount_id, identity }) = prepare(state, |form| match form {
        ActiveForm::Code(form) => Some((form.submit_guard().clone(), form.draft.login_request())),
        _ => None,
    }) else {
        return false;
    };

    let tx = event_tx.clone();
    guard
        .spawn(move || async move {
            let result = identity.login_by_code(request).await;
            let event = AppEvent::LoginResult {
                mount_id,
                result,
                then: Some(Screen::Home),
            };
            let _ = tx.send(event).await;
        })
        .is_some()
}

/// Handle "Submit" on the password form.
///
/// Navigation after success is left to the identity service, which receives a
/// navigator bound to this form's mount id.
///
/// Internal handler function - use [`crate::app::App::handle_password_login`] instead.
pub(crate) fn handle_password_login(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) -> bool {
    let Some(Submission { guard, request, mount_id, identity }) = prepare(state, |form| match form {
        ActiveForm::Password(form) => Some((form.submit_guard().clone(), form.draft.login_request())),
        _ => None,
    }) else {
        return false;
    };

    let tx = event_tx.clone();
    let navigator = ChannelNavigator::new(event_tx.clone(), mount_id);
    guard
        .spawn(move || async move {
            let result = identity.login_by_password(&navigator, request).await;
            let event = AppEvent::LoginResult {
                mount_id,
                result,
                then: None,
            };
            let _ = tx.send(event).await;
        })
        .is_some()
}

/// Open the delegated login page in the system browser.
///
/// egui has no embedded web view, so the embed surface opens externally.
pub(crate) fn handle_open_delegated(state: &Arc<RwLock<AppState>>) -> bool {
    let url = {
        let state = state.read();
        match state.auth.form() {
            ActiveForm::Delegated(form) => form.surface.url().to_string(),
            _ => return false,
        }
    };

    match open::that(&url) {
        Ok(()) => {
            tracing::info!(url = %url, "Opened delegated login page");
            true
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Failed to open delegated login page");
            let mut state = state.write();
            state.notify(Notification::Error(format!(
                "Could not open browser: {}",
                e
            )));
            false
        }
    }
}
