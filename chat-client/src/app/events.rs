//! # Application Events
//!
//! Results sent from identity service tasks back to the UI thread.
//!
//! Everything a sign-in task sends back carries the mount id of the sub-form
//! that started it. Once the user switches modes or signs out, the id is no
//! longer current and the event is dropped.

use shared::{AuthResponse, CodeSentResponse};

use crate::app::state::Screen;
use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Verification code request settled
    CodeRequestResult {
        mount_id: u64,
        result: Result<CodeSentResponse, AppError>,
    },
    /// Code or password sign-in settled
    LoginResult {
        mount_id: u64,
        result: Result<AuthResponse, AppError>,
        /// Screen to show once the session is stored
        then: Option<Screen>,
    },
    /// Navigation requested through the [`crate::core::service::Navigator`] handle
    Navigate { mount_id: u64, screen: Screen },
}
