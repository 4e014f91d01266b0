//! Visual theme.
//!
//! One accent (Nobel gold) plus the page's neutral tones. Widgets never
//! compute with these; they are handed straight to ratatui styles.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Theme as written in config files (`#RRGGBB` strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub background: String,
    pub panel: String,
    pub ink: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#C5A059".into(),
            background: "#F9F8F4".into(),
            panel: "#F5F4F0".into(),
            ink: "#1C1917".into(),
        }
    }
}

/// Resolved theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub background: Color,
    pub panel: Color,
    pub ink: Color,
    pub muted: Color,
    pub z_check: Color,
    pub x_check: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default strings are known-good hex.
        Self::from_config(&ThemeConfig::default()).unwrap_or(Self {
            accent: Color::Yellow,
            background: Color::White,
            panel: Color::Gray,
            ink: Color::Black,
            muted: Color::DarkGray,
            z_check: Color::Blue,
            x_check: Color::Red,
            success: Color::Green,
        })
    }
}

impl Theme {
    pub fn from_config(cfg: &ThemeConfig) -> ShowcaseResult<Self> {
        Ok(Self {
            accent: parse_hex(&cfg.accent)?,
            background: parse_hex(&cfg.background)?,
            panel: parse_hex(&cfg.panel)?,
            ink: parse_hex(&cfg.ink)?,
            muted: Color::Rgb(0x78, 0x71, 0x6C),
            z_check: Color::Rgb(0x3B, 0x82, 0xF6),
            x_check: Color::Rgb(0xEF, 0x44, 0x44),
            success: Color::Rgb(0x22, 0xC5, 0x5E),
        })
    }
}

/// Parse `#RRGGBB` into an RGB colour.
pub fn parse_hex(s: &str) -> ShowcaseResult<Color> {
    let invalid = || ShowcaseError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_gold() {
        assert_eq!(parse_hex("#C5A059").unwrap(), Color::Rgb(0xC5, 0xA0, 0x59));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_hex("C5A059").is_err());
        assert!(parse_hex("#C5A05").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn default_theme_uses_accent() {
        assert_eq!(Theme::default().accent, Color::Rgb(0xC5, 0xA0, 0x59));
    }
}
