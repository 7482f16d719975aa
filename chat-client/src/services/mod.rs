//! # External Services
//!
//! - **[`api`]**: identity service HTTP client

pub mod api;
