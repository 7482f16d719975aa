//! # Service Traits
//!
//! Contracts for the collaborators the sign-in screen talks to. The screen only
//! needs each call to settle; what the service does with the credential is
//! opaque to it.

use async_trait::async_trait;
use shared::{AuthResponse, CodeLoginRequest, CodeRequest, CodeSentResponse, PasswordLoginRequest};

use crate::app::Screen;
use crate::core::error::Result;

/// Identity/session service operations.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Sign in (or register) with a one-time code
    async fn login_by_code(&self, request: CodeLoginRequest) -> Result<AuthResponse>;

    /// Ask the service to send a one-time code to the identity
    async fn request_code(&self, request: CodeRequest) -> Result<CodeSentResponse>;

    /// Sign in with a password.
    ///
    /// `navigator` is passed through untouched; the service decides where to
    /// send the user once the session exists.
    async fn login_by_password(
        &self,
        navigator: &dyn Navigator,
        request: PasswordLoginRequest,
    ) -> Result<AuthResponse>;
}

/// Opaque navigation handle.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: Screen);
}
