//! Test fixtures and constants.

use std::path::PathBuf;
use tempfile::TempDir;

/// Settings files used across tests
pub mod configs {
    /// Round robin over the first four colors, rgb output
    pub const DYNAMIC_RGB: &str = "picking_method: dynamic\ncolor_type: rgb\nmaximum_colors: 4\n";

    /// Valid settings with every key present
    pub const FULL: &str = r#"
picking_method: dynamic-random
color_type: rgba
lightness:
  min: 0.2
  max: 0.8
maximum_colors: 10
debugging: false
ruleset: current
seed: 42
opacity: 0.5
"#;

    /// Lightness band narrower than the required gap
    pub const NARROW_BAND: &str = "lightness:\n  min: 0.7\n  max: 0.8\n";

    /// Two rejected values
    pub const TWO_ERRORS: &str = "picking_method: sometimes\ncolor_type: cmyk\n";

    /// Valid under the current rules, rejected under the legacy ones
    pub const LEGACY_TOO_FEW: &str = "ruleset: legacy\nmaximum_colors: 3\n";

    /// Typo in a key
    pub const UNKNOWN_KEY: &str = "picking: static\n";
}

/// A settings file in its own temporary directory
pub struct ConfigFile {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write `yaml` to a fresh temporary `autocolor.yaml`
pub fn write_config(yaml: &str) -> ConfigFile {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("autocolor.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");
    ConfigFile { _dir: dir, path }
}
