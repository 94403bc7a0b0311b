//! Color value type and the per-color computations the engine needs.
//!
//! - [`HexColor`]: a 24-bit RGB value with hex parsing and rendering
//! - [`perceived_lightness`]: HSP-model lightness used by the palette filter
//! - [`crc32`]: IEEE CRC-32 used to hash non-numeric keys
//!
//! # Example
//!
//! ```
//! use distinct_palette::{perceived_lightness, HexColor};
//!
//! let white: HexColor = "FFFFFF".parse().unwrap();
//! assert!(perceived_lightness(white) > 0.999);
//! ```

mod crc;
mod hex;
mod lightness;

pub use crc::crc32;
pub use hex::{HexColor, ParseColorError};
pub use lightness::perceived_lightness;
