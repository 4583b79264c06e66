use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI. Two built-in palettes (dark and light)
/// track the `darkTheme` flag; config.toml can override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Row background for the task list.
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Completed task text.
    pub text_done: Color,
    pub dim: Color,
    /// Checked boxes, active tab, cursor accents.
    pub accent: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x17, 0x18, 0x23),
            surface: Color::Rgb(0x25, 0x27, 0x3D),
            text: Color::Rgb(0xC8, 0xCB, 0xE7),
            text_bright: Color::Rgb(0xE3, 0xE4, 0xF1),
            text_done: Color::Rgb(0x4D, 0x50, 0x67),
            dim: Color::Rgb(0x5B, 0x5E, 0x7E),
            accent: Color::Rgb(0x3A, 0x7C, 0xFD),
            selection_bg: Color::Rgb(0x39, 0x3A, 0x4B),
            search_match_bg: Color::Rgb(0x55, 0xDD, 0xFF),
            search_match_fg: Color::Rgb(0x17, 0x18, 0x23),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x49, 0x4C, 0x6B),
            text_bright: Color::Rgb(0x16, 0x17, 0x22),
            text_done: Color::Rgb(0xD1, 0xD2, 0xDA),
            dim: Color::Rgb(0x94, 0x95, 0xA5),
            accent: Color::Rgb(0x3A, 0x7C, 0xFD),
            selection_bg: Color::Rgb(0xE3, 0xE4, 0xF1),
            search_match_bg: Color::Rgb(0x3A, 0x7C, 0xFD),
            search_match_fg: Color::Rgb(0xFA, 0xFA, 0xFA),
        }
    }

    /// Create a theme for the given flag, applying config overrides.
    pub fn from_config(dark: bool, ui: &UiConfig) -> Self {
        let mut theme = if dark { Theme::dark() } else { Theme::light() };
        let overrides: &HashMap<String, String> = if dark { &ui.colors } else { &ui.light_colors };

        for (key, value) in overrides {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "text_done" => theme.text_done = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
