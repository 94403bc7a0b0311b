//! Rendering of assigned colors into CSS strings.

use std::fmt;
use std::str::FromStr;

use crate::api::AutoColorError;
use crate::color::HexColor;

/// Output representation requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorType {
    /// `#rrggbb`, shortened to `#rgb` when possible
    #[default]
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,opacity)`
    Rgba,
}

impl ColorType {
    pub const ALL: [ColorType; 3] = [ColorType::Hex, ColorType::Rgb, ColorType::Rgba];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorType::Hex => "hex",
            ColorType::Rgb => "rgb",
            ColorType::Rgba => "rgba",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorType {
    type Err = AutoColorError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ColorType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or(AutoColorError::InvalidColorType(normalized))
    }
}

/// Alpha value for `rgba` output.
///
/// Text is kept so it can be emitted exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq)]
pub enum Opacity {
    Number(f64),
    Text(String),
}

impl Opacity {
    /// Numeric value, or `None` when the opacity is not a finite number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Opacity::Number(value) => Some(*value).filter(|v| v.is_finite()),
            Opacity::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Check that the opacity is a number within `[0, 1]`.
    pub fn validate(&self) -> Result<f64, AutoColorError> {
        let value = self
            .value()
            .ok_or_else(|| AutoColorError::OpacityNotNumeric(self.to_string()))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(AutoColorError::OpacityOutOfRange(value));
        }
        Ok(value)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Opacity::Number(1.0)
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opacity::Number(value) => write!(f, "{value}"),
            Opacity::Text(text) => f.write_str(text.trim()),
        }
    }
}

impl From<f64> for Opacity {
    fn from(value: f64) -> Self {
        Opacity::Number(value)
    }
}

impl From<f32> for Opacity {
    fn from(value: f32) -> Self {
        // Through the decimal form so 0.3f32 renders as 0.3, not 0.30000001192092896
        Opacity::Number(value.to_string().parse().unwrap_or(value as f64))
    }
}

impl From<i32> for Opacity {
    fn from(value: i32) -> Self {
        Opacity::Number(value as f64)
    }
}

impl From<&str> for Opacity {
    fn from(value: &str) -> Self {
        Opacity::Text(value.to_string())
    }
}

impl From<String> for Opacity {
    fn from(value: String) -> Self {
        Opacity::Text(value)
    }
}

/// Render `color` as `color_type`.
///
/// # Example
///
/// ```
/// use distinct_palette::{format_color, ColorType, HexColor, Opacity};
///
/// let green = HexColor::from_rgb24(0x00FF00);
/// assert_eq!(format_color(green, ColorType::Hex, &Opacity::default()), "#0f0");
/// assert_eq!(format_color(green, ColorType::Rgba, &Opacity::from(0.5)), "rgba(0,255,0,0.5)");
/// ```
pub fn format_color(color: HexColor, color_type: ColorType, opacity: &Opacity) -> String {
    match color_type {
        ColorType::Hex => match color.shorthand() {
            Some(short) => format!("#{short}"),
            None => format!("#{color}"),
        },
        ColorType::Rgb => format!("rgb({},{},{})", color.r, color.g, color.b),
        ColorType::Rgba => format!("rgba({},{},{},{})", color.r, color.g, color.b, opacity),
    }
}
