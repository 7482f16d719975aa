//! # API Client
//!
//! HTTP client for the identity service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{AuthResponse, CodeLoginRequest, CodeRequest, CodeSentResponse, PasswordLoginRequest};

use crate::app::Screen;
use crate::config::Config;
use crate::core::error::Result;
use crate::core::service::{IdentityService, Navigator};

/// HTTP client for the identity service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Create a client for `config.api_base_url` with the configured timeout.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: Arc::from(config.api_base_url.as_str()),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

#[async_trait]
impl IdentityService for ApiClient {
    async fn login_by_code(&self, request: CodeLoginRequest) -> Result<AuthResponse> {
        super::auth::login_by_code(self, request).await
    }

    async fn request_code(&self, request: CodeRequest) -> Result<CodeSentResponse> {
        super::auth::request_code(self, request).await
    }

    async fn login_by_password(
        &self,
        navigator: &dyn Navigator,
        request: PasswordLoginRequest,
    ) -> Result<AuthResponse> {
        let response = super::auth::login_by_password(self, request).await?;
        navigator.navigate(Screen::Home);
        Ok(response)
    }
}
