//! 24-bit RGB color value.
//!
//! Palette entries, random colors and cached assignments are all stored as
//! [`HexColor`]. Rendering to CSS strings lives in [`crate::format`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 characters)")]
    InvalidLength(usize),
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// A color as three 8-bit channels.
///
/// `Display` renders the six lowercase hex digits without a leading `#`,
/// which is the internal representation used for cache keys and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl HexColor {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    ///
    /// # Example
    /// ```
    /// use distinct_palette::HexColor;
    /// let green = HexColor::from_rgb24(0x00FF00);
    /// assert_eq!(green.to_bytes(), [0, 255, 0]);
    /// ```
    #[inline]
    pub const fn from_rgb24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Packed `0xRRGGBB` value.
    #[inline]
    pub const fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The 3-digit shorthand (`aabbcc` -> `abc`), if every channel repeats
    /// its nibble.
    pub fn shorthand(self) -> Option<String> {
        let repeats = |c: u8| c >> 4 == c & 0x0F;
        if repeats(self.r) && repeats(self.g) && repeats(self.b) {
            Some(format!("{:x}{:x}{:x}", self.r & 0x0F, self.g & 0x0F, self.b & 0x0F))
        } else {
            None
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for HexColor {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use distinct_palette::HexColor;
    ///
    /// let red: HexColor = "#F00".parse().unwrap();
    /// assert_eq!(red, HexColor::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(bad));
        }
        let digits: Vec<u8> = s.bytes().map(nibble).collect();

        match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 => Ok(Self::new(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::new(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
            )),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

/// Value of one ASCII hex digit (already validated).
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_round_trip() {
        for value in [0x000000, 0xFFFFFF, 0x43002C, 0x0E4CA1, 0x010067] {
            assert_eq!(HexColor::from_rgb24(value).to_rgb24(), value);
        }
    }

    #[test]
    fn test_display_is_lowercase_and_padded() {
        assert_eq!(HexColor::from_rgb24(0x43002C).to_string(), "43002c");
        assert_eq!(HexColor::from_rgb24(0x000001).to_string(), "000001");
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(HexColor::from_rgb24(0xAABBCC).shorthand().as_deref(), Some("abc"));
        assert_eq!(HexColor::from_rgb24(0x000000).shorthand().as_deref(), Some("000"));
        assert_eq!(HexColor::from_rgb24(0xFFFFFF).shorthand().as_deref(), Some("fff"));
        assert_eq!(HexColor::from_rgb24(0x01FFFE).shorthand(), None);
        assert_eq!(HexColor::from_rgb24(0xAABBCD).shorthand(), None);
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: HexColor = "#FFFFFF".parse().unwrap();
        assert_eq!(white, HexColor::new(255, 255, 255));

        let no_hash: HexColor = "43002C".parse().unwrap();
        assert_eq!(no_hash, HexColor::new(0x43, 0x00, 0x2C));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: HexColor = "#ABC".parse().unwrap();
        assert_eq!(color, HexColor::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!("#GGG".parse::<HexColor>(), Err(ParseColorError::InvalidHex('G')));
        assert_eq!("+FFFFF".parse::<HexColor>(), Err(ParseColorError::InvalidHex('+')));
        assert_eq!(
            "#FFFF".parse::<HexColor>(),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!("".parse::<HexColor>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<HexColor>(), Err(ParseColorError::InvalidLength(0)));
    }

    #[test]
    fn test_hex_parsing_case_and_whitespace() {
        let upper: HexColor = "  #ABCDEF  ".parse().unwrap();
        let lower: HexColor = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }
}
