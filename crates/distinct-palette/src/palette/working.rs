//! Working palette derived from the base colors.
//!
//! A [`Palette`] is built once per engine: the base colors, optionally
//! narrowed to a lightness band and then cut to a maximum length. The result
//! is frozen for the rest of the engine's life.

use super::base::BASE_COLORS;
use crate::color::{perceived_lightness, HexColor};

/// An ordered list of colors the selector picks from.
///
/// Order is inherited from [`BASE_COLORS`]; filtering and truncation never
/// reorder entries.
///
/// # Example
///
/// ```
/// use distinct_palette::Palette;
///
/// let palette = Palette::base().with_lightness(0.2, 0.8).truncated(10);
/// assert!(palette.len() <= 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    /// The full base palette.
    pub fn base() -> Self {
        Self {
            colors: BASE_COLORS.to_vec(),
        }
    }

    /// A palette made of arbitrary colors, in the given order.
    pub fn from_colors(colors: impl IntoIterator<Item = HexColor>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Keep only colors whose perceived lightness lies in `[min, max]`
    /// (both ends inclusive).
    pub fn with_lightness(self, min: f64, max: f64) -> Self {
        let colors = self
            .colors
            .into_iter()
            .filter(|&color| {
                let lightness = perceived_lightness(color);
                lightness <= max && lightness >= min
            })
            .collect();
        Self { colors }
    }

    /// Keep at most the first `limit` colors.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.colors.truncate(limit);
        self
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if filtering removed every color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<HexColor> {
        self.colors.get(idx).copied()
    }

    /// Returns true if `color` is one of the palette entries.
    pub fn contains(&self, color: HexColor) -> bool {
        self.colors.contains(&color)
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.colors.iter().copied()
    }

    /// The colors as a slice.
    pub fn as_slice(&self) -> &[HexColor] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_palette() {
        let palette = Palette::base();
        assert_eq!(palette.len(), BASE_COLORS.len());
        assert!(!palette.is_empty());
        assert_eq!(palette.get(0), Some(HexColor::from_rgb24(0x000000)));
        assert_eq!(palette.get(BASE_COLORS.len()), None);
    }

    #[test]
    fn test_lightness_filter_bounds_hold() {
        let (min, max) = (0.2, 0.8);
        let palette = Palette::base().with_lightness(min, max);

        assert!(!palette.is_empty());
        assert!(palette.len() < BASE_COLORS.len());
        for color in palette.iter() {
            let l = perceived_lightness(color);
            assert!(l >= min && l <= max, "{color} has lightness {l}");
        }
        // Black and white sit at the extremes and must be gone
        assert!(!palette.contains(HexColor::from_rgb24(0x000000)));
        assert!(!palette.contains(HexColor::from_rgb24(0xFFFFFF)));
    }

    #[test]
    fn test_lightness_filter_keeps_every_qualifying_color() {
        let (min, max) = (0.3, 0.7);
        let palette = Palette::base().with_lightness(min, max);
        let expected = BASE_COLORS
            .iter()
            .filter(|&&c| (min..=max).contains(&perceived_lightness(c)))
            .count();
        assert_eq!(palette.len(), expected);
    }

    #[test]
    fn test_lightness_filter_preserves_order() {
        let palette = Palette::base().with_lightness(0.2, 0.8);
        let positions: Vec<usize> = palette
            .iter()
            .map(|c| BASE_COLORS.iter().position(|&b| b == c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_truncate() {
        let palette = Palette::base().truncated(5);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.as_slice(), &BASE_COLORS[..5]);

        // Larger limit than available colors is a no-op
        assert_eq!(Palette::base().truncated(500).len(), BASE_COLORS.len());
    }

    #[test]
    fn test_filter_can_empty_palette() {
        let palette = Palette::from_colors([HexColor::from_rgb24(0x000000)]).with_lightness(0.5, 1.0);
        assert!(palette.is_empty());
        assert_eq!(palette.get(0), None);
    }
}
