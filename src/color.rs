//! Color values and the named palettes a figure can be drawn with.
//!
//! Names are resolved leniently: anything that is not a known name maps to
//! the documented default instead of failing.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Color
// ============================================================================

/// An opaque 8-bit sRGB color.
///
/// Displays as a lowercase `#rrggbb` hex string, which is the form written
/// into SVG attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(Srgb<u8>);

impl Color {
    /// Creates a color from a packed `0xRRGGBB` value.
    pub fn from_hex(rgb: u32) -> Self {
        Self(Srgb::new(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }

    /// Returns the `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    /// Returns the underlying `palette` color.
    pub fn into_srgb(self) -> Srgb<u8> {
        self.0
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self(rgb)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|_| Error::Color(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// The six colors that make up a body's yarn texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Base fill of the yarn tile and solid fill of hands and feet.
    pub main: Color,
    /// Upper strand accent.
    pub light: Color,
    /// Outline and middle strand accent.
    pub dark: Color,
    /// Sheen, stitch dots and rim highlights.
    pub highlight: Color,
    /// Raw yarn tone of the palette.
    pub yarn_base: Color,
    /// Drop shadows and the dark end of the sheen gradient.
    pub shadow: Color,
}

impl Palette {
    fn from_table(hex: [u32; 6]) -> Self {
        let [main, light, dark, highlight, yarn_base, shadow] = hex.map(Color::from_hex);
        Self {
            main,
            light,
            dark,
            highlight,
            yarn_base,
            shadow,
        }
    }
}

// ============================================================================
// BodyColor
// ============================================================================

/// Named body palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyColor {
    #[default]
    Chocolate,
    Vanilla,
    Blue,
}

impl BodyColor {
    /// Every palette, in display order.
    pub const ALL: [BodyColor; 3] = [Self::Chocolate, Self::Vanilla, Self::Blue];

    /// Looks up a palette by name, falling back to [`BodyColor::Chocolate`].
    pub fn from_name(name: &str) -> Self {
        let key = name.trim().to_ascii_lowercase();
        match Self::ALL.into_iter().find(|c| c.name() == key) {
            Some(color) => color,
            None => {
                log::debug!("unknown body color {:?}, using {}", name, Self::default().name());
                Self::default()
            }
        }
    }

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chocolate => "chocolate",
            Self::Vanilla => "vanilla",
            Self::Blue => "blue",
        }
    }

    /// The concrete colors of this palette.
    pub fn palette(&self) -> Palette {
        match self {
            Self::Chocolate => {
                Palette::from_table([0x5C3317, 0x7B4B2A, 0x3D210F, 0x8B5A2B, 0x4A2511, 0x2E1A0D])
            }
            Self::Vanilla => {
                Palette::from_table([0xF5DEB3, 0xFFF8DC, 0xD4A574, 0xFFFACD, 0xE8D4A8, 0xC4A67C])
            }
            Self::Blue => {
                Palette::from_table([0x4169E1, 0x6495ED, 0x27408B, 0x87CEEB, 0x2B4F8C, 0x1A2D5E])
            }
        }
    }
}

impl From<String> for BodyColor {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<BodyColor> for String {
    fn from(color: BodyColor) -> Self {
        color.name().to_string()
    }
}

// ============================================================================
// EyeColor
// ============================================================================

/// Named eye colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EyeColor {
    #[default]
    Black,
    Blue,
    Green,
    Brown,
    Red,
    Purple,
    Orange,
}

impl EyeColor {
    /// Every eye color, in display order.
    pub const ALL: [EyeColor; 7] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Brown,
        Self::Red,
        Self::Purple,
        Self::Orange,
    ];

    /// Looks up an eye color by name, falling back to [`EyeColor::Black`].
    pub fn from_name(name: &str) -> Self {
        let key = name.trim().to_ascii_lowercase();
        match Self::ALL.into_iter().find(|c| c.name() == key) {
            Some(color) => color,
            None => {
                log::debug!("unknown eye color {:?}, using {}", name, Self::default().name());
                Self::default()
            }
        }
    }

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// The iris color.
    pub fn color(&self) -> Color {
        Color::from_hex(match self {
            Self::Black => 0x1A1A1A,
            Self::Blue => 0x1E90FF,
            Self::Green => 0x228B22,
            Self::Brown => 0x8B4513,
            Self::Red => 0xDC143C,
            Self::Purple => 0x9932CC,
            Self::Orange => 0xFF8C00,
        })
    }
}

impl From<String> for EyeColor {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<EyeColor> for String {
    fn from(color: EyeColor) -> Self {
        color.name().to_string()
    }
}

// ============================================================================
// Resolvers
// ============================================================================

/// Resolves a body palette by name. Unknown names give the chocolate palette.
pub fn resolve_body_palette(name: &str) -> Palette {
    BodyColor::from_name(name).palette()
}

/// Resolves an eye color by name. Unknown names give `#1a1a1a`.
pub fn resolve_eye_color(name: &str) -> Color {
    EyeColor::from_name(name).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_displays_lowercase_hex() {
        assert_eq!(Color::from_hex(0x1E90FF).to_string(), "#1e90ff");
        assert_eq!(Color::from_hex(0x000000).to_string(), "#000000");
    }

    #[test]
    fn color_parses_hex_forms() {
        let long: Color = "#1e90ff".parse().unwrap();
        assert_eq!(long.rgb(), (0x1e, 0x90, 0xff));

        let bare: Color = "ffb6c1".parse().unwrap();
        assert_eq!(bare, Color::from_hex(0xFFB6C1));

        let short: Color = "#fff".parse().unwrap();
        assert_eq!(short, Color::from_hex(0xFFFFFF));
    }

    #[test]
    fn color_rejects_garbage() {
        let err = "#12345z".parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::Color(ref s) if s == "#12345z"));
    }

    #[test]
    fn known_palettes_resolve() {
        assert_eq!(resolve_body_palette("vanilla").main.to_string(), "#f5deb3");
        assert_eq!(resolve_body_palette("blue").shadow.to_string(), "#1a2d5e");
        assert_eq!(resolve_body_palette("chocolate").yarn_base.to_string(), "#4a2511");
    }

    #[test]
    fn unknown_palette_falls_back_to_chocolate() {
        assert_eq!(resolve_body_palette("mauve"), BodyColor::Chocolate.palette());
        assert_eq!(resolve_body_palette(""), BodyColor::Chocolate.palette());
    }

    #[test]
    fn names_are_case_and_space_insensitive() {
        assert_eq!(BodyColor::from_name(" Vanilla "), BodyColor::Vanilla);
        assert_eq!(EyeColor::from_name("PURPLE"), EyeColor::Purple);
    }

    #[test]
    fn unknown_eye_color_falls_back_to_near_black() {
        assert_eq!(resolve_eye_color("teal").to_string(), "#1a1a1a");
        assert_eq!(resolve_eye_color("blue").to_string(), "#1e90ff");
    }

    #[test]
    fn every_name_round_trips() {
        for color in BodyColor::ALL {
            assert_eq!(BodyColor::from_name(color.name()), color);
        }
        for color in EyeColor::ALL {
            assert_eq!(EyeColor::from_name(color.name()), color);
        }
    }

    #[test]
    fn serde_uses_names_and_never_fails_on_unknown() {
        let color: BodyColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(color, BodyColor::Blue);

        let fallback: EyeColor = serde_json::from_str("\"chartreuse\"").unwrap();
        assert_eq!(fallback, EyeColor::Black);

        assert_eq!(serde_json::to_string(&EyeColor::Orange).unwrap(), "\"orange\"");
    }
}
