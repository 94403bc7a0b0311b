pub mod config;

pub use config::{AppConfig, LightnessConfig, OpacitySetting, RulesetName};
