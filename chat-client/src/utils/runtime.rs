//! Global Tokio runtime for async HTTP operations
//!
//! egui drives the UI from the main thread without an async executor, while
//! reqwest needs a tokio runtime. `main` enters this runtime once so
//! `tokio::spawn` (and [`crate::auth::guard::SubmissionGuard::spawn`]) work from
//! UI callbacks; results travel back to the UI thread as
//! [`crate::app::AppEvent`]s.
//!
//! ```rust,ignore
//! use chat_client::utils::runtime::TOKIO_RT;
//!
//! let _enter = TOKIO_RT.enter();
//! eframe::run_native(/* ... */);
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
