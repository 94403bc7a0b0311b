//! Perceived lightness based on the HSP color model
//! (<http://alienryderflex.com/hsp.html>).

use super::hex::HexColor;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Lightness of `color` in the range 0.0 (black) to 1.0 (white).
///
/// `sqrt(0.299·r² + 0.587·g² + 0.114·b²) / 255`
///
/// # Example
/// ```
/// use distinct_palette::{perceived_lightness, HexColor};
/// assert_eq!(perceived_lightness(HexColor::from_rgb24(0x000000)), 0.0);
/// ```
#[inline]
pub fn perceived_lightness(color: HexColor) -> f64 {
    let r = color.r as f64;
    let g = color.g as f64;
    let b = color.b as f64;
    (r * r * RED_WEIGHT + g * g * GREEN_WEIGHT + b * b * BLUE_WEIGHT).sqrt() / 255.0
}
