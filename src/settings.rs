//! Display preferences for the prompter.
//!
//! `PrompterSettings` is the persisted record the settings panel edits and the
//! speed shortcuts adjust. Every field carries a serde default so records saved
//! by older builds pick up new fields with their documented value.

use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: u32 = 16;
pub const MAX_FONT_SIZE: u32 = 120;
pub const MIN_SCROLL_SPEED: u32 = 1;
pub const MAX_SCROLL_SPEED: u32 = 100;
pub const MIN_TEXT_MARGIN: u32 = 30;
pub const MAX_TEXT_MARGIN: u32 = 100;
pub const MAX_BACKGROUND_OPACITY: u32 = 100;

/// User-adjustable display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrompterSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_text_color")]
    pub text_color: HexColor,
    #[serde(default = "default_background_color")]
    pub background_color: HexColor,
    #[serde(default = "default_background_opacity")]
    pub background_opacity: u32,
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: u32,
    #[serde(default = "default_text_margin")]
    pub text_margin: u32,
    #[serde(default = "default_show_reading_guide")]
    pub show_reading_guide: bool,
}

impl Default for PrompterSettings {
    fn default() -> Self {
        PrompterSettings {
            font_size: default_font_size(),
            text_color: default_text_color(),
            background_color: default_background_color(),
            background_opacity: default_background_opacity(),
            scroll_speed: default_scroll_speed(),
            text_margin: default_text_margin(),
            show_reading_guide: default_show_reading_guide(),
        }
    }
}

impl PrompterSettings {
    /// Pull every numeric field back into its supported range.
    pub fn clamp(&mut self) {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.background_opacity = self.background_opacity.min(MAX_BACKGROUND_OPACITY);
        self.scroll_speed = self.scroll_speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED);
        self.text_margin = self.text_margin.clamp(MIN_TEXT_MARGIN, MAX_TEXT_MARGIN);
    }

    /// Step the scroll speed by `delta`, saturating at the speed bounds.
    /// Returns the resulting speed.
    pub fn adjust_speed(&mut self, delta: i32) -> u32 {
        let next = (self.scroll_speed as i64 + delta as i64)
            .clamp(MIN_SCROLL_SPEED as i64, MAX_SCROLL_SPEED as i64);
        self.scroll_speed = next as u32;
        self.scroll_speed
    }

    pub fn background_alpha(&self) -> f32 {
        self.background_opacity.min(MAX_BACKGROUND_OPACITY) as f32 / 100.0
    }
}

fn default_font_size() -> u32 {
    48
}

fn default_text_color() -> HexColor {
    HexColor::WHITE
}

fn default_background_color() -> HexColor {
    HexColor::BLACK
}

fn default_background_opacity() -> u32 {
    60
}

fn default_scroll_speed() -> u32 {
    5
}

fn default_text_margin() -> u32 {
    80
}

fn default_show_reading_guide() -> bool {
    true
}

/// An opaque RGB color persisted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn parse(raw: &str) -> Option<HexColor> {
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(HexColor {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_color(self, alpha: f32) -> iced::Color {
        iced::Color::from_rgba8(self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_adjustment_saturates_at_bounds() {
        let mut settings = PrompterSettings {
            scroll_speed: MAX_SCROLL_SPEED,
            ..PrompterSettings::default()
        };
        assert_eq!(settings.adjust_speed(1), MAX_SCROLL_SPEED);

        settings.scroll_speed = MIN_SCROLL_SPEED;
        assert_eq!(settings.adjust_speed(-1), MIN_SCROLL_SPEED);

        settings.scroll_speed = 5;
        assert_eq!(settings.adjust_speed(1), 6);
        assert_eq!(settings.adjust_speed(-2), 4);
    }

    #[test]
    fn clamp_pulls_fields_into_range() {
        let mut settings = PrompterSettings {
            font_size: 4,
            background_opacity: 250,
            scroll_speed: 0,
            text_margin: 12,
            ..PrompterSettings::default()
        };
        settings.clamp();
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        assert_eq!(settings.background_opacity, 100);
        assert_eq!(settings.scroll_speed, MIN_SCROLL_SPEED);
        assert_eq!(settings.text_margin, MIN_TEXT_MARGIN);
    }

    #[test]
    fn hex_color_accepts_mixed_case_and_missing_hash() {
        assert_eq!(
            HexColor::parse("#FFa500"),
            Some(HexColor {
                r: 0xff,
                g: 0xa5,
                b: 0x00
            })
        );
        assert_eq!(HexColor::parse("000000"), Some(HexColor::BLACK));
        assert_eq!(HexColor::parse("#fff"), None);
        assert_eq!(HexColor::parse("#gg0000"), None);
        assert_eq!(HexColor::WHITE.to_string(), "#ffffff");
    }
}
