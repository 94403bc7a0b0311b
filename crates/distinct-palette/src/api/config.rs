//! Engine settings and the validation rules they are checked against.

use std::fmt;
use std::str::FromStr;

use super::error::AutoColorError;
use crate::diagnostics::OverlayScope;
use crate::format::ColorType;
use crate::select::PickingMethod;

/// Which end of the lightness band a limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightnessBound {
    Max,
    Min,
}

impl fmt::Display for LightnessBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightnessBound::Max => f.write_str("max"),
            LightnessBound::Min => f.write_str("min"),
        }
    }
}

impl FromStr for LightnessBound {
    type Err = AutoColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(LightnessBound::Max),
            "min" => Ok(LightnessBound::Min),
            other => Err(AutoColorError::InvalidLightnessKind(other.to_string())),
        }
    }
}

/// Validation ranges. Two generations of the rules exist; `Current` is the
/// default and `Legacy` reproduces the stricter first generation.
///
/// | Rule | Current | Legacy |
/// |------|---------|--------|
/// | max lightness | `[0.2, 1.0]` | `[0.5, 1.0]` |
/// | min lightness | `[0.0, 0.8]` | `[0.0, 0.5]` |
/// | minimum max-min gap | 0.2 | 0.5 |
/// | maximum colors | `>= 2` | `[6, 32]` |
/// | error log after rendering | kept | cleared |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ruleset {
    #[default]
    Current,
    Legacy,
}

impl Ruleset {
    /// Accepted `(low, high)` for a lightness limit.
    pub fn lightness_range(self, bound: LightnessBound) -> (f64, f64) {
        match (self, bound) {
            (Ruleset::Current, LightnessBound::Max) => (0.2, 1.0),
            (Ruleset::Current, LightnessBound::Min) => (0.0, 0.8),
            (Ruleset::Legacy, LightnessBound::Max) => (0.5, 1.0),
            (Ruleset::Legacy, LightnessBound::Min) => (0.0, 0.5),
        }
    }

    /// Smallest allowed `max - min`.
    pub fn minimum_lightness_gap(self) -> f64 {
        match self {
            Ruleset::Current => 0.2,
            Ruleset::Legacy => 0.5,
        }
    }

    /// Accepted `(low, high)` for the maximum number of colors.
    pub fn maximum_colors_range(self) -> (i64, Option<i64>) {
        match self {
            Ruleset::Current => (2, None),
            Ruleset::Legacy => (6, Some(32)),
        }
    }

    /// Whether the error log is emptied once it has been rendered.
    pub fn clears_log_after_render(self) -> bool {
        matches!(self, Ruleset::Legacy)
    }

    pub(crate) fn check_lightness(self, bound: LightnessBound, value: f64) -> Result<f64, AutoColorError> {
        if !value.is_finite() {
            return Err(AutoColorError::LightnessNotNumeric(value.to_string()));
        }
        let (low, high) = self.lightness_range(bound);
        if value < low || value > high {
            return Err(AutoColorError::LightnessOutOfRange {
                bound,
                value,
                low,
                high,
            });
        }
        Ok(value)
    }

    pub(crate) fn check_maximum_colors(self, value: i64) -> Result<usize, AutoColorError> {
        let (low, high) = self.maximum_colors_range();
        let expected = match high {
            Some(high) => format!("in <{low};{high}>"),
            None => format!("at least {low}"),
        };
        if value < low || high.is_some_and(|high| value > high) {
            return Err(AutoColorError::MaximumColorsOutOfRange { value, expected });
        }
        usize::try_from(value).map_err(|_| AutoColorError::MaximumColorsOutOfRange { value, expected })
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ruleset::Current => f.write_str("current"),
            Ruleset::Legacy => f.write_str("legacy"),
        }
    }
}

/// Settings of one engine, as accepted by its setters.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub picking_method: PickingMethod,
    pub color_type: ColorType,
    pub lightness_min: f64,
    pub lightness_max: f64,
    pub maximum_colors: Option<usize>,
    pub debugging: bool,
    pub ruleset: Ruleset,
    pub overlay_scope: OverlayScope,
}

impl EngineConfig {
    /// Whether the lightness band differs from the full `[0, 1]` range.
    pub fn filters_lightness(&self) -> bool {
        self.lightness_min != 0.0 || self.lightness_max != 1.0
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            picking_method: PickingMethod::Static,
            color_type: ColorType::Hex,
            lightness_min: 0.0,
            lightness_max: 1.0,
            maximum_colors: None,
            debugging: false,
            ruleset: Ruleset::Current,
            overlay_scope: OverlayScope::Instance,
        }
    }
}
