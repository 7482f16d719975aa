//! # Identity Service Client Module
//!
//! HTTP client for the identity service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and the IdentityService impl
//! └── auth.rs     - Code request, code login, password login endpoints
//! ```

pub mod auth;
pub mod client;

pub use client::ApiClient;
