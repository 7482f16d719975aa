//! # Screen Modules
//!
//! Each screen module renders one [`crate::app::Screen`].
//!
//! - **[`auth`]**: sign-in screen (code, password, delegated QR)
//! - **[`home`]**: signed-in landing screen
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the cloned state snapshot
//!     // - Write typed input back through app.state
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! rendering; `app.handle_*` methods lock internally.

pub mod auth;
pub mod home;
