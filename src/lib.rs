//! autocolor - stable, visually distinct colors from the command line
//!
//! Settings file handling and output rendering for the `autocolor` binary.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod output;
