//! # Icons Helper Module
//!
//! Unicode glyphs rendered with egui's bundled fonts, so no icon font has to
//! be registered.

use egui::{Color32, RichText};

use crate::auth::ToggleOffer;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const XLARGE: f32 = 48.0;
}

/// Glyphs
pub mod glyph {
    /// Bot logo in the screen header
    pub const BOT: &str = "🤖";
    /// Verification code
    pub const CODE: &str = "✉";
    /// WeChat
    pub const WECHAT: &str = "💬";
    /// Password
    pub const KEY: &str = "🔑";
    /// External link
    pub const OPEN: &str = "↗";
    pub const USER: &str = "👤";
}

/// Icon helper functions
pub struct Icons;

impl Icons {
    pub fn icon(icon: &str, size: f32) -> RichText {
        RichText::new(icon).size(size)
    }

    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }

    /// Glyph shown next to a toggle affordance
    pub fn for_offer(offer: ToggleOffer) -> &'static str {
        match offer {
            ToggleOffer::Code => glyph::CODE,
            ToggleOffer::Delegated => glyph::WECHAT,
            ToggleOffer::Password => glyph::KEY,
        }
    }
}
