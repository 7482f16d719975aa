//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the chat client and the identity
//! service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Sign-in requests and session responses
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_identity`]**: Mask a phone number or email for logs and display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in Frontend
//!
//! ```rust,ignore
//! use shared::dto::auth::{CodeLoginRequest, AuthResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = CodeLoginRequest {
//!     identity: "alice@example.com".to_string(),
//!     code: "482913".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:8094/auth/login/code")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything in a DTO library is public API
pub use dto::*;
pub use utils::*;
