//! Segment colors: parsing, opacity derivation and label contrast.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::constants::TEXT_CONTRAST_THRESHOLD;
use crate::errors::Error;

/// An sRGB color with an alpha channel in `[0, 1]`.
///
/// Serialized as a CSS color string: `#rrggbb` when fully opaque,
/// `rgba(r, g, b, a)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a `#rrggbb` or `#rgb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Rgba::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Rgba::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(Error::InvalidColor(hex.to_string())),
        }
    }

    /// Returns the same color at the given opacity, clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Perceived brightness on a 0-255 scale using the YIQ luma weights.
    ///
    /// Alpha is ignored: the label sits on the segment, so only the hue counts.
    pub fn luma(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Picks dark or light text so a label stays readable on this color.
    pub fn contrasting_text(&self) -> TextColor {
        if self.luma() >= TEXT_CONTRAST_THRESHOLD {
            TextColor::Dark
        } else {
            TextColor::Light
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let channel = |p: &str| p.parse::<u8>().map_err(|_| Error::InvalidColor(s.to_string()));

        match parts.as_slice() {
            [r, g, b] => Ok(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha = a
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidColor(s.to_string()))?;
                Ok(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?).with_opacity(alpha))
            }
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

/// Label text color chosen against a segment's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Dark,
    Light,
}

impl TextColor {
    pub fn css(&self) -> &'static str {
        match self {
            TextColor::Dark => "black",
            TextColor::Light => "white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Rgba::from_hex("#ef4444").unwrap(), Rgba::rgb(0xef, 0x44, 0x44));
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::WHITE);
        assert!(Rgba::from_hex("ef4444").is_err());
        assert!(Rgba::from_hex("#ef44").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
        assert!(Rgba::from_hex("#aébcd").is_err());
        assert!(Rgba::from_hex("#é").is_err());
        assert!(Rgba::from_hex("#+f+f+f").is_err());
        assert!("#aébcd".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let solid: Rgba = "#3b82f6".parse().unwrap();
        assert_eq!(solid.to_string(), "#3b82f6");

        let faded = solid.with_opacity(0.6);
        assert_eq!(faded.to_string(), "rgba(59, 130, 246, 0.6)");
        assert_eq!(faded.to_string().parse::<Rgba>().unwrap(), faded);
    }

    #[test]
    fn test_serializes_as_css_string() {
        let color = Rgba::rgb(0x10, 0xb9, 0x81).with_opacity(0.8);
        assert_eq!(
            serde_json::to_string(&color).unwrap(),
            "\"rgba(16, 185, 129, 0.8)\""
        );
        let back: Rgba = serde_json::from_str("\"#10b981\"").unwrap();
        assert_eq!(back, Rgba::rgb(0x10, 0xb9, 0x81));
    }

    #[test]
    fn test_with_opacity_clamps() {
        assert_eq!(Rgba::BLACK.with_opacity(1.7).a, 1.0);
        assert_eq!(Rgba::BLACK.with_opacity(-0.2).a, 0.0);
    }

    #[test]
    fn test_contrasting_text() {
        // amber is bright, red and slate are dark enough for white text
        assert_eq!(Rgba::from_hex("#f59e0b").unwrap().contrasting_text(), TextColor::Dark);
        assert_eq!(Rgba::from_hex("#ef4444").unwrap().contrasting_text(), TextColor::Light);
        assert_eq!(Rgba::from_hex("#64748b").unwrap().contrasting_text(), TextColor::Light);
        assert_eq!(Rgba::WHITE.contrasting_text(), TextColor::Dark);
        assert_eq!(Rgba::BLACK.contrasting_text(), TextColor::Light);
    }

    #[test]
    fn test_contrast_ignores_alpha() {
        let amber = Rgba::from_hex("#f59e0b").unwrap();
        assert_eq!(amber.with_opacity(0.6).contrasting_text(), amber.contrasting_text());
    }
}
