//! distinct-palette: Stable, visually distinct colors for arbitrary values
//!
//! This library hands out colors from a curated palette of 65 mutually
//! distant colors, so that labels, users, categories or chart series get a
//! color that is easy to tell apart from its neighbours and stays the same
//! for the same value.
//!
//! # Quick Start
//!
//! The [`AutoColor`] engine is the primary entry point:
//!
//! ```
//! use distinct_palette::AutoColor;
//!
//! let mut colors = AutoColor::new();
//!
//! // Static picking: same input, same color, in every run.
//! assert_eq!(colors.color(42), "#91d0cb");
//! assert_eq!(colors.color("42"), "#91d0cb");
//! ```
//!
//! # Picking Methods
//!
//! | Method           | Source        | Stable across runs | Distinct |
//! |------------------|---------------|--------------------|----------|
//! | `static`         | palette       | yes                | no       |
//! | `dynamic`        | palette       | order dependent    | yes      |
//! | `dynamic-random` | palette       | no                 | no       |
//! | `random`         | 24-bit space  | no                 | no       |
//!
//! Within one engine an input always gets the color it got first.
//!
//! # Output
//!
//! [`ColorType`] selects `#rrggbb` (shortened to `#rgb` when possible),
//! `rgb(r,g,b)` or `rgba(r,g,b,a)`:
//!
//! ```
//! use distinct_palette::AutoColor;
//!
//! let mut colors = AutoColor::new();
//! colors.set_color_type("rgba").unwrap();
//! assert_eq!(colors.color_with_opacity(2, 0.25), "rgba(0,255,0,0.25)");
//! ```
//!
//! # Errors
//!
//! Setters return [`AutoColorError`] and also keep it in the engine's error
//! log. Once anything was logged the engine is poisoned and color requests
//! yield an empty string. With debugging enabled the log is handed once to
//! a [`DiagnosticSink`]: [`TracingSink`] by default, or [`HtmlOverlay`] for
//! an in-page panel.

pub mod api;
pub mod cache;
pub mod color;
pub mod diagnostics;
pub mod format;
pub mod input;
pub mod palette;
pub mod select;


pub use api::{AutoColor, AutoColorError, EngineConfig, ErrorKind, LightnessBound, Ruleset};
pub use color::{crc32, perceived_lightness, HexColor, ParseColorError};
pub use diagnostics::{render_overlay, DiagnosticSink, ErrorEntry, HtmlOverlay, OverlayScope, TracingSink};
pub use format::{format_color, ColorType, Opacity};
pub use input::ColorInput;
pub use palette::{Palette, BASE_COLORS};
pub use select::PickingMethod;
