//! AutoColor engine -- the primary entry point for the crate.
//!
//! [`AutoColor`] owns the configuration, the lazily built working palette,
//! the assignment cache and the error log of one color namespace.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{EngineConfig, LightnessBound, Ruleset};
use super::error::AutoColorError;
use crate::cache::AssignmentCache;
use crate::diagnostics::{registry, DiagnosticSink, ErrorEntry, OverlayScope, TracingSink};
use crate::format::{format_color, Opacity};
use crate::input::ColorInput;
use crate::palette::Palette;
use crate::select;

/// Absorbs binary rounding in `max - min` (e.g. `1.0 - 0.8` is just below 0.2).
const GAP_TOLERANCE: f64 = 1e-9;

/// Assigns stable, visually distinct colors to inputs.
///
/// # Design
///
/// - Setters validate and return `Result`, and every failure is also kept
///   in the error log
/// - The working palette is built on the first color request and frozen
///   afterwards; later lightness or size settings do not change it
/// - Any recorded error poisons the engine: from then on color requests
///   return an empty string ([`color`](Self::color)) or
///   [`AutoColorError::Poisoned`] ([`try_color`](Self::try_color))
/// - With debugging enabled the log is rendered once to the diagnostic sink
///
/// # Example
///
/// ```
/// use distinct_palette::AutoColor;
///
/// let mut colors = AutoColor::new();
/// colors.set_color_picking_method("dynamic").unwrap();
/// colors.set_color_type("rgba").unwrap();
///
/// assert_eq!(colors.color_with_opacity(17, 0.5), "rgba(0,0,0,0.5)");
/// assert_eq!(colors.color_with_opacity("bob", 0.5), "rgba(255,255,255,0.5)");
/// assert_eq!(colors.color_with_opacity(17, 0.5), "rgba(0,0,0,0.5)");
/// ```
pub struct AutoColor {
    config: EngineConfig,
    palette: Option<Palette>,
    cache: AssignmentCache,
    errors: Vec<ErrorEntry>,
    recorded: usize,
    overlay_rendered: bool,
    sink: Box<dyn DiagnosticSink>,
    rng: StdRng,
}

impl AutoColor {
    /// Create an engine with default settings: static picking, hex output,
    /// full lightness range, no size limit.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine whose random strategies are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            config: EngineConfig::default(),
            palette: None,
            cache: AssignmentCache::new(),
            errors: Vec::new(),
            recorded: 0,
            overlay_rendered: false,
            sink: Box::new(TracingSink),
            rng,
        }
    }

    /// Set the picking method: `static`, `dynamic`, `dynamic-random` or
    /// `random` (case-insensitive).
    pub fn set_color_picking_method(&mut self, method: &str) -> Result<(), AutoColorError> {
        match method.parse() {
            Ok(method) => {
                self.config.picking_method = method;
                Ok(())
            }
            Err(e) => Err(self.record("set_color_picking_method", vec![method.to_string()], e)),
        }
    }

    /// Set the output type: `hex`, `rgb` or `rgba` (case-insensitive).
    pub fn set_color_type(&mut self, color_type: &str) -> Result<(), AutoColorError> {
        match color_type.parse() {
            Ok(color_type) => {
                self.config.color_type = color_type;
                Ok(())
            }
            Err(e) => Err(self.record("set_color_type", vec![color_type.to_string()], e)),
        }
    }

    /// Limit the perceived lightness of palette colors. `kind` is `max` or
    /// `min`; accepted values depend on the [`Ruleset`].
    pub fn set_lightness_limit(&mut self, kind: &str, value: f64) -> Result<(), AutoColorError> {
        let checked = kind
            .parse::<LightnessBound>()
            .and_then(|bound| Ok((bound, self.config.ruleset.check_lightness(bound, value)?)));

        match checked {
            Ok((LightnessBound::Max, value)) => {
                self.config.lightness_max = value;
                Ok(())
            }
            Ok((LightnessBound::Min, value)) => {
                self.config.lightness_min = value;
                Ok(())
            }
            Err(e) => Err(self.record(
                "set_lightness_limit",
                vec![kind.to_string(), value.to_string()],
                e,
            )),
        }
    }

    /// Use at most the first `maximum` palette colors; once they are used up
    /// dynamic picking starts over.
    pub fn set_maximum_colors(&mut self, maximum: i64) -> Result<(), AutoColorError> {
        match self.config.ruleset.check_maximum_colors(maximum) {
            Ok(maximum) => {
                self.config.maximum_colors = Some(maximum);
                Ok(())
            }
            Err(e) => Err(self.record("set_maximum_colors", vec![maximum.to_string()], e)),
        }
    }

    /// Select the validation ranges used by later setter calls and by
    /// initialization.
    pub fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.config.ruleset = ruleset;
    }

    /// Render the error log to the diagnostic sink once errors occur.
    pub fn enable_debugging(&mut self) {
        self.config.debugging = true;
    }

    /// Replace the default [`TracingSink`].
    pub fn set_diagnostic_sink(&mut self, sink: impl DiagnosticSink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Render once per engine (default) or once per process.
    pub fn set_overlay_scope(&mut self, scope: OverlayScope) {
        self.config.overlay_scope = scope;
    }

    /// Color for `input` with opacity 1. Empty string on any error.
    pub fn color(&mut self, input: impl Into<ColorInput>) -> String {
        self.try_color(input).unwrap_or_default()
    }

    /// Color for `input`, with `opacity` used by `rgba` output. Empty string
    /// on any error.
    pub fn color_with_opacity(&mut self, input: impl Into<ColorInput>, opacity: impl Into<Opacity>) -> String {
        self.try_color_with_opacity(input, opacity).unwrap_or_default()
    }

    /// Like [`color`](Self::color) but reports why no color was produced.
    pub fn try_color(&mut self, input: impl Into<ColorInput>) -> Result<String, AutoColorError> {
        self.try_color_with_opacity(input, Opacity::default())
    }

    /// Like [`color_with_opacity`](Self::color_with_opacity) but reports why
    /// no color was produced.
    ///
    /// # Errors
    ///
    /// - the opacity or input error detected by this call
    /// - [`AutoColorError::Poisoned`] if an earlier call (or initialization)
    ///   recorded an error
    pub fn try_color_with_opacity(
        &mut self,
        input: impl Into<ColorInput>,
        opacity: impl Into<Opacity>,
    ) -> Result<String, AutoColorError> {
        let input = input.into();
        let opacity = opacity.into();

        let call_error = match opacity.validate() {
            Err(e) => Some(e),
            Ok(_) if input.is_composite() => Some(AutoColorError::CompositeInput(input.kind_name())),
            Ok(_) => None,
        }
        .map(|e| self.record("color", vec![input.to_string(), opacity.to_string()], e));

        self.initialize();
        self.render_diagnostics();

        if let Some(e) = call_error {
            return Err(e);
        }
        if self.is_poisoned() {
            return Err(AutoColorError::Poisoned {
                errors: self.recorded,
            });
        }

        let key = input
            .key()
            .ok_or(AutoColorError::CompositeInput(input.kind_name()))?;
        let palette = self.palette.as_ref().ok_or(AutoColorError::EmptyPalette)?;
        let method = self.config.picking_method;
        let rng = &mut self.rng;

        let assigned = self
            .cache
            .get_or_assign(&key, |used| select::resolve(method, &key, palette, used, rng));

        match assigned {
            Ok(color) => Ok(format_color(color, self.config.color_type, &opacity)),
            Err(e) => Err(self.record("color", vec![key, opacity.to_string()], e)),
        }
    }

    /// Build the working palette if that has not happened yet, and return it.
    ///
    /// Runs automatically on the first color request. Configuration problems
    /// found here (lightness gap, empty palette) are recorded like any other
    /// error.
    pub fn initialize(&mut self) -> &Palette {
        let palette = match self.palette.take() {
            Some(palette) => palette,
            None => self.build_palette(),
        };
        self.palette.insert(palette)
    }

    fn build_palette(&mut self) -> Palette {
        let min = self.config.lightness_min;
        let max = self.config.lightness_max;
        let required = self.config.ruleset.minimum_lightness_gap();

        if max - min + GAP_TOLERANCE < required {
            self.record(
                "initialize",
                vec![],
                AutoColorError::LightnessGapTooSmall { min, max, required },
            );
        }

        let mut palette = Palette::base();
        if self.config.filters_lightness() {
            palette = palette.with_lightness(min, max);
        }
        if let Some(limit) = self.config.maximum_colors {
            palette = palette.truncated(limit);
        }

        tracing::debug!(
            colors = palette.len(),
            lightness_min = min,
            lightness_max = max,
            maximum_colors = ?self.config.maximum_colors,
            "Working palette initialized"
        );

        if palette.is_empty() {
            self.record("initialize", vec![], AutoColorError::EmptyPalette);
        }
        palette
    }

    fn record(&mut self, operation: &'static str, arguments: Vec<String>, error: AutoColorError) -> AutoColorError {
        tracing::warn!(operation, %error, "Recorded auto color error");
        self.errors.push(ErrorEntry::new(operation, arguments, error.clone()));
        self.recorded += 1;
        error
    }

    fn render_diagnostics(&mut self) {
        if !self.config.debugging || !self.is_poisoned() || self.overlay_rendered {
            return;
        }
        self.overlay_rendered = true;

        if self.config.overlay_scope == OverlayScope::Process && !registry::claim() {
            return;
        }
        self.sink.render(&self.errors);

        if self.config.ruleset.clears_log_after_render() {
            self.errors.clear();
        }
    }

    /// Current settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The error log. Under [`Ruleset::Legacy`] it is emptied after being
    /// rendered.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Whether any error has been recorded.
    pub fn is_poisoned(&self) -> bool {
        self.recorded > 0
    }

    /// The working palette, once built.
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Number of distinct inputs that received a color.
    pub fn assigned_count(&self) -> usize {
        self.cache.len()
    }
}

impl Default for AutoColor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AutoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoColor")
            .field("config", &self.config)
            .field("palette", &self.palette.as_ref().map(Palette::len))
            .field("assigned", &self.cache.len())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
