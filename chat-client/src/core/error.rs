//! # Common Error Types
//!
//! Consolidated error handling for the chat client.
//!
//! ## Error Categories
//!
//! - **Api**: Identity service communication errors (network, HTTP, JSON parsing,
//!   rejected credentials)
//! - **Config**: Missing or malformed process configuration
//! - **State**: Application state errors (no identity service wired, stale form)
//! - **Validation**: Field-level input errors (required field left empty)
//!
//! ## Usage Pattern
//!
//! ```rust
//! use chat_client::core::error::AppError;
//!
//! fn require_code(code: &str) -> Result<&str, AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::Validation("Code is required".to_string()));
//!     }
//!     Ok(code)
//! }
//! # assert!(require_code("").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// `Clone` so results can travel through [`crate::app::AppEvent`] to the UI thread.
///
/// ```rust
/// use chat_client::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let validation_err = AppError::Validation("Password is required".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(validation_err.to_string(), "Validation error: Password is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Identity service communication error, or the service rejected the request.
    #[error("API error: {0}")]
    Api(String),

    /// Configuration error.
    ///
    /// Also returned by [`crate::auth::bridge::build_embed_url`] when the
    /// delegated login app id is not configured.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Application state error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Message without the category prefix, for inline display under a form.
    pub fn message(&self) -> &str {
        match self {
            AppError::Api(msg)
            | AppError::Config(msg)
            | AppError::State(msg)
            | AppError::Validation(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Api("Request timed out".to_string())
        } else if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_strips_category() {
        let err = AppError::Validation("Code is required".to_string());
        assert_eq!(err.message(), "Code is required");
        assert_eq!(err.to_string(), "Validation error: Code is required");
    }

    #[test]
    fn test_string_converts_to_api_error() {
        let err: AppError = "Invalid code".into();
        assert_eq!(err, AppError::Api("Invalid code".to_string()));
    }
}
