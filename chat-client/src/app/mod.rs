//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, user action
//! handlers, identity service tasks, and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - sign-in screen (mode, mounted form, guards)       │   │
//! │  │  - session, queued notifications                     │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Guarded Tasks (Tokio)                          │
//! │  - request_code() / login_by_code() / login_by_password()   │
//! │  - each holds its sub-form's guard until it settles         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Guarded task sends its result, tagged with the form's mount id
//! event_tx.send(AppEvent::LoginResult { mount_id, result, then }).await?;
//!
//! // Main thread receives it in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: User action handlers

mod event_handler;
mod events;
mod handlers;
mod navigator;
mod state;

pub use events::AppEvent;
pub use navigator::ChannelNavigator;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::auth::{AuthMode, AuthScreen, Toggle};
use crate::config::Config;
use crate::core::service::IdentityService;

/// Main application orchestrator.
///
/// # Example
///
/// ```rust,no_run
/// use chat_client::app::App;
/// use chat_client::config::Config;
///
/// let _rt = chat_client::utils::runtime::TOKIO_RT.enter();
/// let mut app = App::new(&Config::default());
///
/// // In egui update loop (main thread):
/// app.on_tick();
/// let state = app.state.read();
/// // render from state
/// drop(state);
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// **Critical**: Hold locks for minimal duration to prevent UI freezing.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into guarded tasks for sending results back to the main thread.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application with the HTTP identity service.
    pub fn new(config: &Config) -> Self {
        let api_client = Arc::new(crate::services::api::ApiClient::new(config));
        Self::with_identity(config, api_client)
    }

    /// Create the application with any identity service implementation.
    pub fn with_identity(config: &Config, identity: Arc<dyn IdentityService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let state = AppState {
            current_screen: Screen::Auth,
            title: config.title.clone(),
            lang: config.lang,
            auth: AuthScreen::new(config.bridge.clone()),
            session: None,
            identity: Some(identity),
            pending_notifications: Vec::new(),
        };

        tracing::info!(
            title = %config.title,
            lang = ?config.lang,
            delegated_configured = config.bridge.is_configured(),
            "Application state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Drain async results. Called once per frame; never blocks.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: Processed events");
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Press a mode toggle. Returns the new mode.
    pub fn handle_toggle(&mut self, toggle: Toggle) -> AuthMode {
        handlers::auth::handle_toggle(&self.state, toggle)
    }

    /// "Get Code". Returns `true` if a request was started.
    pub fn handle_request_code(&mut self) -> bool {
        handlers::auth::handle_request_code(&self.state, &self.event_tx)
    }

    /// Code form submit. Returns `true` if a sign-in was started.
    pub fn handle_code_login(&mut self) -> bool {
        handlers::auth::handle_code_login(&self.state, &self.event_tx)
    }

    /// Password form submit. Returns `true` if a sign-in was started.
    pub fn handle_password_login(&mut self) -> bool {
        handlers::auth::handle_password_login(&self.state, &self.event_tx)
    }

    /// Submit whichever form is mounted (Enter key).
    pub fn handle_submit_active(&mut self) -> bool {
        let mode = self.state.read().auth.mode();
        match mode {
            AuthMode::PhoneCode => self.handle_code_login(),
            AuthMode::EmailPassword => self.handle_password_login(),
            AuthMode::DelegatedQr => false,
        }
    }

    /// Open the delegated login page externally.
    pub fn handle_open_delegated(&mut self) -> bool {
        handlers::auth::handle_open_delegated(&self.state)
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(&self.state, screen);
    }

    pub fn handle_sign_out(&mut self) {
        handlers::navigation::handle_sign_out(&self.state);
    }

    /// Notifications queued since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// True while any guard of the mounted form is pending.
    pub fn has_pending_action(&self) -> bool {
        let state = self.state.read();
        if let Some(form) = state.auth.code_form() {
            form.submit_guard().is_pending() || form.request_code_guard().is_pending()
        } else if let Some(form) = state.auth.password_form() {
            form.submit_guard().is_pending()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CodeButtonLabel, SubmissionGuard};
    use crate::core::error::{AppError, Result};
    use crate::core::service::Navigator;
    use async_trait::async_trait;
    use shared::{
        AuthResponse, CodeLoginRequest, CodeRequest, CodeSentResponse, PasswordLoginRequest, UserInfo,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct MockIdentity {
        gate: Option<Arc<Notify>>,
        /// Holds only code sign-ins, on top of `gate`
        code_gate: Option<Arc<Notify>>,
        fail: bool,
        request_code_calls: AtomicUsize,
        code_login_calls: AtomicUsize,
        password_login_calls: AtomicUsize,
    }

    impl MockIdentity {
        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        async fn hold(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }

        fn auth_response(&self) -> Result<AuthResponse> {
            if self.fail {
                return Err(AppError::Api("Invalid credentials".to_string()));
            }
            Ok(AuthResponse {
                user: UserInfo {
                    id: "42".to_string(),
                    username: "alice".to_string(),
                    email: Some("alice@example.com".to_string()),
                    phone: None,
                },
                token: "token-42".to_string(),
                message: "Welcome back".to_string(),
            })
        }
    }

    #[async_trait]
    impl IdentityService for MockIdentity {
        async fn login_by_code(&self, _request: CodeLoginRequest) -> Result<AuthResponse> {
            self.code_login_calls.fetch_add(1, Ordering::SeqCst);
            self.hold().await;
            if let Some(gate) = &self.code_gate {
                gate.notified().await;
            }
            self.auth_response()
        }

        async fn request_code(&self, _request: CodeRequest) -> Result<CodeSentResponse> {
            self.request_code_calls.fetch_add(1, Ordering::SeqCst);
            self.hold().await;
            if self.fail {
                return Err(AppError::Api("Too many requests".to_string()));
            }
            Ok(CodeSentResponse {
                message: "Code sent".to_string(),
                retry_after_secs: Some(60),
            })
        }

        async fn login_by_password(
            &self,
            navigator: &dyn Navigator,
            _request: PasswordLoginRequest,
        ) -> Result<AuthResponse> {
            self.password_login_calls.fetch_add(1, Ordering::SeqCst);
            self.hold().await;
            let response = self.auth_response()?;
            navigator.navigate(Screen::Home);
            Ok(response)
        }
    }

    fn app_with(identity: Arc<MockIdentity>) -> App {
        App::with_identity(&Config::default(), identity)
    }

    fn fill_code_form(app: &App, identity: &str, code: &str) {
        let mut state = app.state.write();
        let form = state.auth.code_form_mut().expect("code form mounted in test");
        form.draft.identity = identity.to_string();
        form.draft.code = code.to_string();
    }

    fn fill_password_form(app: &App, identity: &str, password: &str) {
        let mut state = app.state.write();
        let form = state.auth.password_form_mut().expect("password form mounted in test");
        form.draft.identity = identity.to_string();
        form.draft.password = password.to_string();
    }

    /// Tick until `done` holds, then tick once more to drain trailing events.
    async fn settle<F>(app: &mut App, done: F)
    where
        F: Fn(&App) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                app.on_tick();
                if done(app) {
                    break;
                }
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("condition not reached in test");
        app.on_tick();
    }

    fn idle(guard: &SubmissionGuard) -> bool {
        !guard.is_pending()
    }

    #[test]
    fn test_screen_all_returns_correct_order() {
        assert_eq!(Screen::all(), &[Screen::Auth, Screen::Home]);
        assert_eq!(Screen::Auth.title(), "Sign in");
    }

    #[tokio::test]
    async fn test_new_app_starts_on_code_form() {
        let app = app_with(Arc::new(MockIdentity::default()));
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(state.auth.mode(), AuthMode::PhoneCode);
        assert_eq!(state.title, "ChatNio");
        assert!(!state.is_authenticated());
        drop(state);
        assert!(!app.has_pending_action());
    }

    #[tokio::test]
    async fn test_toggles_walk_the_modes() {
        let mut app = app_with(Arc::new(MockIdentity::default()));
        assert_eq!(app.handle_toggle(Toggle::Delegated), AuthMode::DelegatedQr);
        assert_eq!(app.handle_toggle(Toggle::Password), AuthMode::EmailPassword);
        assert_eq!(app.handle_toggle(Toggle::Password), AuthMode::PhoneCode);
    }

    #[tokio::test]
    async fn test_request_code_shows_sent_while_pending() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "");

        assert!(app.handle_request_code());
        {
            let state = app.state.read();
            let form = state.auth.code_form().expect("code form");
            assert_eq!(form.code_button_label(), CodeButtonLabel::Sent);
        }
        assert!(!app.handle_request_code());

        gate.notify_one();
        settle(&mut app, |app| {
            let state = app.state.read();
            state.auth.code_form().map(|f| f.code_button_label()) == Some(CodeButtonLabel::GetCode)
        })
        .await;

        assert_eq!(identity.request_code_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            app.take_notifications(),
            vec![Notification::Info("Code sent".to_string())]
        );
    }

    #[tokio::test]
    async fn test_double_submit_calls_service_once() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");

        assert!(app.handle_code_login());
        assert!(!app.handle_code_login());
        assert!(!app.handle_submit_active());

        let guard = app.state.read().auth.code_form().expect("code form").submit_guard().clone();
        gate.notify_one();
        settle(&mut app, |_| idle(&guard)).await;

        assert_eq!(identity.code_login_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_code_login_success_stores_session_and_goes_home() {
        let identity = Arc::new(MockIdentity::default());
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");

        assert!(app.handle_code_login());
        settle(&mut app, |app| app.state.read().current_screen == Screen::Home).await;

        let state = app.state.read();
        let session = state.session.as_ref().expect("session stored");
        assert_eq!(session.token, "token-42");
        assert_eq!(session.user.username, "alice");
    }

    #[tokio::test]
    async fn test_request_code_and_submit_are_independent() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");

        assert!(app.handle_request_code());
        assert!(app.handle_code_login());

        let (request_guard, submit_guard) = {
            let state = app.state.read();
            let form = state.auth.code_form().expect("code form");
            (form.request_code_guard().clone(), form.submit_guard().clone())
        };
        assert!(request_guard.is_pending());
        assert!(submit_guard.is_pending());

        // Both calls must be parked on the gate before it opens.
        settle(&mut app, |_| {
            identity.request_code_calls.load(Ordering::SeqCst) == 1
                && identity.code_login_calls.load(Ordering::SeqCst) == 1
        })
        .await;
        gate.notify_waiters();
        settle(&mut app, |_| idle(&request_guard) && idle(&submit_guard)).await;

        assert_eq!(identity.request_code_calls.load(Ordering::SeqCst), 1);
        assert_eq!(identity.code_login_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_set_error_without_calling_service() {
        let identity = Arc::new(MockIdentity::default());
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "  ");

        assert!(!app.handle_code_login());
        assert_eq!(app.state.read().auth.form().error(), Some("Code is required"));
        assert!(!app.has_pending_action());

        app.handle_toggle(Toggle::Password);
        assert!(!app.handle_password_login());
        assert_eq!(app.state.read().auth.form().error(), Some("Email is required"));

        assert_eq!(identity.code_login_calls.load(Ordering::SeqCst), 0);
        assert_eq!(identity.password_login_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suppressed_trigger_keeps_form_untouched() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");
        assert!(app.handle_code_login());

        // Clearing the code would fail validation, but the pending guard wins.
        fill_code_form(&app, "13800138000", "");
        assert!(!app.handle_code_login());
        assert_eq!(app.state.read().auth.form().error(), None);

        gate.notify_one();
    }

    #[tokio::test]
    async fn test_failed_login_sets_error_and_releases_guard() {
        let mut app = app_with(Arc::new(MockIdentity::failing()));
        app.handle_toggle(Toggle::Password);
        fill_password_form(&app, "alice@example.com", "wrong");

        assert!(app.handle_password_login());
        let guard = app.state.read().auth.password_form().expect("password form").submit_guard().clone();
        settle(&mut app, |_| idle(&guard)).await;

        let state = app.state.read();
        assert_eq!(state.auth.form().error(), Some("Invalid credentials"));
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.session.is_none());
        assert_eq!(
            state.pending_notifications,
            vec![Notification::Error("Invalid credentials".to_string())]
        );
    }

    #[tokio::test]
    async fn test_stale_failure_does_not_touch_new_form() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity {
            gate: Some(gate.clone()),
            fail: true,
            ..MockIdentity::default()
        });
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");
        assert!(app.handle_code_login());
        let old_guard = app.state.read().auth.code_form().expect("code form").submit_guard().clone();

        app.handle_toggle(Toggle::Password);
        gate.notify_one();
        settle(&mut app, |_| idle(&old_guard)).await;

        let state = app.state.read();
        assert_eq!(state.auth.mode(), AuthMode::EmailPassword);
        assert_eq!(state.auth.form().error(), None);
        assert!(state.pending_notifications.is_empty());
    }

    #[tokio::test]
    async fn test_password_login_navigates_home() {
        let identity = Arc::new(MockIdentity::default());
        let mut app = app_with(identity.clone());
        app.handle_toggle(Toggle::Password);
        fill_password_form(&app, "alice@example.com", "secret");

        assert!(app.handle_submit_active());
        settle(&mut app, |app| {
            let state = app.state.read();
            state.current_screen == Screen::Home && state.is_authenticated()
        })
        .await;

        assert_eq!(identity.password_login_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            app.take_notifications(),
            vec![Notification::Success("Welcome back".to_string())]
        );
        assert!(app.take_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_returns_to_fresh_code_form() {
        let mut app = app_with(Arc::new(MockIdentity::default()));
        app.handle_toggle(Toggle::Password);
        fill_password_form(&app, "alice@example.com", "secret");
        assert!(app.handle_password_login());
        settle(&mut app, |app| app.state.read().is_authenticated()).await;

        app.handle_sign_out();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(state.auth.mode(), AuthMode::PhoneCode);
        assert!(state.session.is_none());
    }

    #[tokio::test]
    async fn test_delegated_mode_has_nothing_to_submit() {
        let mut app = app_with(Arc::new(MockIdentity::default()));
        app.handle_toggle(Toggle::Delegated);
        assert!(!app.handle_submit_active());
        assert!(!app.has_pending_action());
    }

    #[tokio::test]
    async fn test_stale_success_after_toggle_has_no_effect() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");
        assert!(app.handle_code_login());
        let old_guard = app.state.read().auth.code_form().expect("code form").submit_guard().clone();

        app.handle_toggle(Toggle::Delegated);
        gate.notify_one();
        settle(&mut app, |_| idle(&old_guard)).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(state.auth.mode(), AuthMode::DelegatedQr);
        assert!(!state.is_authenticated());
        assert!(state.pending_notifications.is_empty());
    }

    #[tokio::test]
    async fn test_attempt_from_before_sign_out_cannot_sign_back_in() {
        let code_gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity {
            code_gate: Some(code_gate.clone()),
            ..MockIdentity::default()
        });
        let mut app = app_with(identity.clone());
        fill_code_form(&app, "13800138000", "123456");
        assert!(app.handle_code_login());
        let code_guard = app.state.read().auth.code_form().expect("code form").submit_guard().clone();

        app.handle_toggle(Toggle::Password);
        fill_password_form(&app, "alice@example.com", "secret");
        assert!(app.handle_password_login());
        settle(&mut app, |app| {
            let state = app.state.read();
            state.current_screen == Screen::Home && state.is_authenticated()
        })
        .await;

        app.handle_sign_out();
        app.take_notifications();

        code_gate.notify_one();
        settle(&mut app, |_| idle(&code_guard)).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.is_authenticated());
        assert!(state.pending_notifications.is_empty());
        assert_eq!(identity.code_login_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_password_navigation_is_dropped() {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(MockIdentity::gated(gate.clone()));
        let mut app = app_with(identity.clone());
        app.handle_toggle(Toggle::Password);
        fill_password_form(&app, "alice@example.com", "secret");
        assert!(app.handle_password_login());
        let old_guard = app.state.read().auth.password_form().expect("password form").submit_guard().clone();

        app.handle_toggle(Toggle::Password);
        gate.notify_one();
        settle(&mut app, |_| idle(&old_guard)).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert_eq!(state.auth.mode(), AuthMode::PhoneCode);
        assert!(state.session.is_none());
    }
}
