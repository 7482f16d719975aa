//! # Sign-in Core
//!
//! The state that drives the sign-in screen, independent of egui:
//!
//! - **[`mode`]**: which identity mechanism is active and the two toggles
//! - **[`guard`]**: at-most-one in-flight submission per action
//! - **[`bridge`]**: delegated (WeChat QR) login URL and its fallback
//! - **[`draft`]**: typed credentials and required-field checks
//! - **[`forms`]**: one controller per mode
//! - **[`screen`]**: [`AuthScreen`], composing the above

pub mod bridge;
pub mod draft;
pub mod forms;
pub mod guard;
pub mod mode;
pub mod screen;

pub use bridge::{build_embed_url, BridgeParams, DelegatedSurface};
pub use forms::{ActiveForm, CodeButtonLabel, CodeLoginForm, DelegatedLoginForm, PasswordLoginForm};
pub use guard::{GuardState, PendingPermit, SubmissionGuard};
pub use mode::{AuthMode, ModeSelector, Toggle, ToggleOffer};
pub use screen::AuthScreen;
