pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // Window background
    pub bg_header: Color,   // Title banner
    pub bg_surface: Color,  // Input section cards
    pub bg_elevated: Color, // Inputs, inactive tabs
    pub bg_hover: Color,    // Hover states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Inactive tab text
    pub fg_muted: Color,     // Field labels, placeholders
    pub fg_on_accent: Color, // Text on colored buttons

    // === Action Colors ===
    pub accent: Color,        // GENERATE, active tab
    pub accent_hover: Color,  // Hovered accent
    pub success: Color,       // COPY, selected category
    pub success_hover: Color, // Hovered success
    pub neutral: Color,       // RESET
    pub neutral_hover: Color, // Hovered neutral

    // === Borders ===
    pub border: Color,

    // === Result Panel ===
    pub output_bg: Color,
    pub output_border: Color,
    pub output_text: Color,
    pub output_error: Color,

    // === Shadows ===
    pub shadow_color: Color,
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_header: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        success_hover: u32,
        neutral: u32,
        neutral_hover: u32,
        border: u32,
        output_bg: u32,
        output_border: u32,
        output_text: u32,
        output_error: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_header: hex_to_color(bg_header),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            success_hover: hex_to_color(success_hover),
            neutral: hex_to_color(neutral),
            neutral_hover: hex_to_color(neutral_hover),
            border: hex_to_color(border),
            output_bg: hex_to_color(output_bg),
            output_border: hex_to_color(output_border),
            output_text: hex_to_color(output_text),
            output_error: hex_to_color(output_error),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    /// Returns true for themes with a light background
    pub fn is_light(&self) -> bool {
        let c = self.bg_base;
        (0.299 * c.r + 0.587 * c.g + 0.114 * c.b) > 0.5
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// All available built-in themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum ThemeChoice {
    #[default]
    Slate,
    Oxide,
    OxideLight,
}

impl ThemeChoice {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slate => "Slate",
            Self::Oxide => "Oxide",
            Self::OxideLight => "Oxide Light",
        }
    }

    // Each match arm intentionally calls a different theme function
    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Slate => presets::slate(),
            Self::Oxide => presets::oxide(),
            Self::OxideLight => presets::oxide_light(),
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hex_to_color() {
        let c = hex_to_color(0x00FF_0000);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_every_choice_builds_named_theme() {
        for choice in ThemeChoice::iter() {
            assert_eq!(choice.to_theme().name, choice.name());
        }
    }

    #[test]
    fn test_light_detection() {
        assert!(!ThemeChoice::Slate.to_theme().is_light());
        assert!(!ThemeChoice::Oxide.to_theme().is_light());
        assert!(ThemeChoice::OxideLight.to_theme().is_light());
    }
}
