/// Text and highlight colours offered by the colour pickers.
///
/// Serialized as `"#RRGGBB"` / `"#RRGGBBAA"` strings.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize, w: usize| -> Option<u8> {
            let v = u8::from_str_radix(&digits[i * w..i * w + w], 16).ok()?;
            // Short form repeats each nibble: "f" -> "ff".
            Some(if w == 1 { v * 17 } else { v })
        };
        match digits.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::rgba(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        match self.a {
            255 => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            a => format!("#{:02X}{:02X}{:02X}{a:02X}", self.r, self.g, self.b),
        }
    }

    /// CSS value passed to the fore/back colour commands.
    ///
    /// Opaque colours use lowercase hex; translucent ones use `rgba()`.
    pub fn to_css(self) -> String {
        match self.a {
            255 => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            a => format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(a) / 255.0
            ),
        }
    }
}

/// Colours shown in the pickers when the config does not list any.
pub fn default_palette() -> Vec<HexColor> {
    vec![
        HexColor::rgb(0, 0, 0),
        HexColor::rgb(255, 255, 255),
        HexColor::rgb(231, 76, 60),
        HexColor::rgb(230, 126, 34),
        HexColor::rgb(241, 196, 15),
        HexColor::rgb(46, 204, 113),
        HexColor::rgb(52, 152, 219),
        HexColor::rgb(155, 89, 182),
    ]
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("invalid hex color: {s}"))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(HexColor::from_hex("#E74C3C"), Some(HexColor::rgb(231, 76, 60)));
        assert_eq!(HexColor::from_hex("#e74c3c"), Some(HexColor::rgb(231, 76, 60)));
        assert_eq!(HexColor::from_hex("#f00"), Some(HexColor::rgb(255, 0, 0)));
        assert_eq!(
            HexColor::from_hex("#3498DB80"),
            Some(HexColor::rgba(52, 152, 219, 128))
        );
    }

    #[test]
    fn test_invalid_input() {
        for bad in ["", "#", "#GG0000", "#12345", "123456", "#ééé"] {
            assert!(HexColor::from_hex(bad).is_none(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_to_css() {
        assert_eq!(HexColor::rgb(231, 76, 60).to_css(), "#e74c3c");
        assert_eq!(
            HexColor::rgba(255, 255, 0, 51).to_css(),
            "rgba(255, 255, 0, 0.200)"
        );
    }

    #[test]
    fn test_display_uses_uppercase_hex() {
        assert_eq!(HexColor::rgb(46, 204, 113).to_string(), "#2ECC71");
    }

    #[test]
    fn test_default_palette_is_opaque() {
        let palette = default_palette();
        assert_eq!(palette.len(), 8);
        assert!(palette.iter().all(|c| c.a == 255));
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HexColor::rgba(155, 89, 182, 200);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#9B59B6C8\"");
        let parsed: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn test_serde_rejects_bad_color() {
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }
}
