//! Unified error type for the distinct-palette public API.
//!
//! [`AutoColorError`] covers every failure the engine can record. Errors are
//! never thrown past the caller: setters and [`AutoColor::try_color`]
//! return them, and the engine keeps a copy in its error log.
//!
//! [`AutoColor::try_color`]: crate::AutoColor::try_color

use thiserror::Error;

use super::config::LightnessBound;

/// Broad classification of an [`AutoColorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected setter argument or an inconsistent configuration found at
    /// initialization.
    Configuration,
    /// Rejected argument to a color request.
    CallTime,
    /// Internal precondition that configuration made impossible to satisfy.
    Invariant,
}

/// Every error the engine can record or return.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutoColorError {
    #[error("color picking method must be one of 'static', 'dynamic', 'dynamic-random', 'random', got '{0}'")]
    InvalidPickingMethod(String),

    #[error("color type must be one of 'hex', 'rgb', 'rgba', got '{0}'")]
    InvalidColorType(String),

    #[error("lightness limit kind must be 'max' or 'min', got '{0}'")]
    InvalidLightnessKind(String),

    #[error("lightness value must be a number, got '{0}'")]
    LightnessNotNumeric(String),

    #[error("{bound} lightness must be in <{low};{high}>, got {value}")]
    LightnessOutOfRange {
        bound: LightnessBound,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("difference between maximum and minimum lightness must be at least {required}, got max {max}, min {min}")]
    LightnessGapTooSmall { min: f64, max: f64, required: f64 },

    #[error("maximum number of colors must be {expected}, got {value}")]
    MaximumColorsOutOfRange { value: i64, expected: String },

    #[error("opacity must be a number, got '{0}'")]
    OpacityNotNumeric(String),

    #[error("opacity must be in <0;1>, got {0}")]
    OpacityOutOfRange(f64),

    #[error("input must be a number or a string, {0} given")]
    CompositeInput(&'static str),

    #[error("no colors left in the palette after applying lightness and size limits")]
    EmptyPalette,

    #[error("color assignment disabled after {errors} earlier error(s)")]
    Poisoned { errors: usize },
}

impl AutoColorError {
    /// Which part of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AutoColorError::InvalidPickingMethod(_)
            | AutoColorError::InvalidColorType(_)
            | AutoColorError::InvalidLightnessKind(_)
            | AutoColorError::LightnessNotNumeric(_)
            | AutoColorError::LightnessOutOfRange { .. }
            | AutoColorError::LightnessGapTooSmall { .. }
            | AutoColorError::MaximumColorsOutOfRange { .. } => ErrorKind::Configuration,
            AutoColorError::OpacityNotNumeric(_)
            | AutoColorError::OpacityOutOfRange(_)
            | AutoColorError::CompositeInput(_) => ErrorKind::CallTime,
            AutoColorError::EmptyPalette | AutoColorError::Poisoned { .. } => ErrorKind::Invariant,
        }
    }
}
