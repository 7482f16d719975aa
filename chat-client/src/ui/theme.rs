//! # GUI Theme
//!
//! Light theme for the sign-in window: white panels, a blue primary accent,
//! rounded inputs.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Window background
    pub background: Color32,
    /// Input and card fill
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Primary accent (buttons, links)
    pub primary: Color32,
    /// Accent on hover
    pub primary_hover: Color32,
    /// Borders and divider lines
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    /// Secondary text and hints
    pub secondary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(255, 255, 255),  // #FFFFFF
            surface: Color32::from_rgb(247, 247, 247),     // #F7F7F7
            text: Color32::from_rgb(48, 48, 48),           // #303030
            primary: Color32::from_rgb(29, 147, 171),      // #1D93AB
            primary_hover: Color32::from_rgb(22, 120, 140), // #16788C
            border: Color32::from_rgb(222, 222, 222),      // #DEDEDE
            success: Color32::from_rgb(46, 160, 67),       // #2EA043
            error: Color32::from_rgb(215, 58, 73),         // #D73A49
            warning: Color32::from_rgb(219, 150, 0),       // #DB9600
            secondary: Color32::from_rgb(140, 140, 140),   // #8C8C8C
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            normal: colors.text,
            selected: colors.primary,
            border: colors.border,
            dim: colors.secondary,
            success: colors.success,
            error: colors.error,
            warning: colors.warning,
            colors,
        }
    }
}

impl Theme {
    /// egui Visuals for this palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.extreme_bg_color = colors.surface;
        visuals.faint_bg_color = colors.surface;

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.primary);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.primary_hover);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(29, 147, 171, 60);
        visuals.selection.stroke = Stroke::new(1.0, colors.primary);
        visuals.hyperlink_color = colors.primary;

        visuals
    }

    /// Apply to both egui themes so a system theme switch keeps the look.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 8.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(40.0, 32.0);
            });
        }
        tracing::debug!("Applied theme visuals using style_mut_of API");
    }
}
