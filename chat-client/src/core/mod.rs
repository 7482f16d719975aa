//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`IdentityService`, `Navigator`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chat_client::core::service::IdentityService;
//!
//! // In production: the HTTP client
//! let identity: Arc<dyn IdentityService> = Arc::new(chat_client::services::api::ApiClient::new(&config));
//!
//! // In tests: a mock that holds calls pending
//! let identity: Arc<dyn IdentityService> = Arc::new(MockIdentity::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{IdentityService, Navigator};
