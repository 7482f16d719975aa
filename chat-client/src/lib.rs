//! # ChatNio Client - Library Root
//!
//! A **native desktop GUI** for signing in to the ChatNio chat service.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Three sign-in modes**: phone/email one-time code, email + password, and
//!   WeChat QR (delegated) login
//! - **Duplicate-submission guard**: each action runs at most once at a time
//! - **Delegated login bridge**: WeChat `qrconnect` URL with a static QR fallback
//! - **Bilingual labels**: English and Chinese string tables
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              chat-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────┐
//! │ Identity service│
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **auth**: sign-in core, independent of egui
//!   - `mode`: tri-state mode and the two toggles
//!   - `guard`: at-most-one in-flight action
//!   - `bridge`: delegated login URL builder
//!   - `forms` / `screen`: per-mode controllers
//! - **app**: state, events, user action handlers
//! - **services**: `api` HTTP client implementing `IdentityService`
//! - **ui**: screens, widgets, theme, locales
//! - **config**: environment configuration
//! - **debug**: tracing setup
//! - **utils**: runtime and validation helpers
//!
//! ## Usage
//!
//! ```bash
//! CHAT_API_BASE_URL=http://127.0.0.1:8094 cargo run --bin chat-client
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod app;
pub mod auth;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use auth::{AuthMode, SubmissionGuard, Toggle};
pub use core::{AppError, Result};
