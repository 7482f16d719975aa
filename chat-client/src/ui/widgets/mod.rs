//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod branding;
pub mod forms;
pub mod icons;
pub mod notifications;
