//! Public API for the distinct-palette crate.
//!
//! This module provides the high-level API: the [`AutoColor`] engine, its
//! settings and the [`AutoColorError`] taxonomy.

mod config;
mod engine;
mod error;

pub use config::{EngineConfig, LightnessBound, Ruleset};
pub use engine::AutoColor;
pub use error::{AutoColorError, ErrorKind};
