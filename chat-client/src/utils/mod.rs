//! # Utility Functions
//!
//! Shared utility functions used across the chat client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Required-field checks for the sign-in forms
//! - **[`runtime`]**: Process-wide tokio runtime for identity service calls
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (identity masking)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
