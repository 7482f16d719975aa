//! # Logging and Diagnostics
//!
//! File-based structured logging for the chat client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup, before anything logs
//! chat_client::debug::init();
//!
//! tracing::info!(mode = "phone-code", "Sign-in form mounted");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `chat_client=debug,info`)
//! - `CHAT_LOG_DIR`: Log directory (default: `logs`)
//! - `CHAT_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the logging system.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
