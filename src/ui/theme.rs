use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),       // Purple
            accent: ColorSpec::rgb(255, 109, 146),        // Pink
            banner: ColorSpec::rgb(255, 109, 146),        // Pink
            text: ColorSpec::rgb(88, 82, 96),             // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            success: ColorSpec::rgb(59, 247, 209),        // Pine
            warning: ColorSpec::rgb(255, 210, 0),         // Gold
            error: ColorSpec::rgb(235, 111, 146),         // Love
            border_active: ColorSpec::rgb(161, 119, 255), // Purple
            border_normal: ColorSpec::rgb(88, 82, 96),    // Text
            highlight_bg: ColorSpec::rgb(61, 174, 233),   // Foam
            highlight_fg: ColorSpec::rgb(0, 0, 0),        // Black
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),       // Blue
            accent: ColorSpec::rgb(255, 159, 196),        // Magenta
            banner: ColorSpec::rgb(255, 159, 196),        // Magenta
            text: ColorSpec::rgb(169, 177, 214),          // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),    // Comment
            success: ColorSpec::rgb(158, 206, 106),       // Green
            warning: ColorSpec::rgb(255, 202, 40),        // Yellow
            error: ColorSpec::rgb(247, 118, 142),         // Red
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),  // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),     // Background
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["rose-pine-dawn".to_string(), "tokyo-night".to_string()]
    }
}
