//! Palette types
//!
//! This module holds the fixed base palette and the [`Palette`] type that
//! the engine derives from it once per instance.

mod base;
mod working;

pub use base::BASE_COLORS;
pub use working::Palette;
