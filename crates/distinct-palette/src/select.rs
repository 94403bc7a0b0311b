//! Picking strategies: how a key is turned into a color.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::api::AutoColorError;
use crate::color::{crc32, HexColor};
use crate::palette::Palette;

/// Strategy used for keys that are not in the assignment cache yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingMethod {
    /// Hash of the key modulo palette size; the same key always gets the
    /// same color, across engines with the same configuration.
    #[default]
    Static,
    /// Round robin over the palette in first-seen order.
    Dynamic,
    /// A uniformly random palette entry per new key (repeats possible).
    DynamicRandom,
    /// A uniformly random 24-bit color, ignoring the palette.
    Random,
}

impl PickingMethod {
    pub const ALL: [PickingMethod; 4] = [
        PickingMethod::Static,
        PickingMethod::Dynamic,
        PickingMethod::DynamicRandom,
        PickingMethod::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PickingMethod::Static => "static",
            PickingMethod::Dynamic => "dynamic",
            PickingMethod::DynamicRandom => "dynamic-random",
            PickingMethod::Random => "random",
        }
    }

    /// Whether results are drawn from the working palette.
    pub fn uses_palette(self) -> bool {
        !matches!(self, PickingMethod::Random)
    }
}

impl fmt::Display for PickingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickingMethod {
    type Err = AutoColorError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PickingMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == normalized)
            .ok_or(AutoColorError::InvalidPickingMethod(normalized))
    }
}

/// Hash used by [`PickingMethod::Static`].
///
/// Keys that read as a whole number hash to that number, so numeric ids
/// spread over the palette in order; anything else goes through CRC-32.
pub fn static_hash(key: &str) -> i64 {
    key.parse::<i64>()
        .unwrap_or_else(|_| crc32(key.as_bytes()) as i64)
}

/// Pick a color for `key`.
///
/// `used` is the number of colors assigned so far (cache misses), which
/// drives the dynamic round robin.
///
/// # Errors
///
/// [`AutoColorError::EmptyPalette`] when a palette-based method meets an
/// empty palette.
pub fn resolve<R: Rng>(
    method: PickingMethod,
    key: &str,
    palette: &Palette,
    used: usize,
    rng: &mut R,
) -> Result<HexColor, AutoColorError> {
    let len = palette.len();
    let index = match method {
        PickingMethod::Random => return Ok(HexColor::from_rgb24(rng.gen_range(0..=0xFF_FFFF))),
        _ if len == 0 => return Err(AutoColorError::EmptyPalette),
        PickingMethod::Static => static_hash(key).rem_euclid(len as i64) as usize,
        PickingMethod::Dynamic => used % len,
        PickingMethod::DynamicRandom => rng.gen_range(0..len),
    };

    palette.get(index).ok_or(AutoColorError::EmptyPalette)
}
