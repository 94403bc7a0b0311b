use crate::error::ConfigError;
use distinct_palette::{AutoColor, AutoColorError, Opacity, Ruleset};
use serde::Deserialize;
use std::path::Path;

/// Engine settings loaded from a YAML file. Every key is optional.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// `static`, `dynamic`, `dynamic-random` or `random`
    #[serde(default)]
    pub picking_method: Option<String>,

    /// `hex`, `rgb` or `rgba`
    #[serde(default)]
    pub color_type: Option<String>,

    #[serde(default)]
    pub lightness: LightnessConfig,

    #[serde(default)]
    pub maximum_colors: Option<i64>,

    /// Render recorded errors once they occur
    #[serde(default)]
    pub debugging: bool,

    #[serde(default)]
    pub ruleset: RulesetName,

    /// Seed for the random picking methods
    #[serde(default)]
    pub seed: Option<u64>,

    /// Default opacity for `rgba` output
    #[serde(default)]
    pub opacity: Option<OpacitySetting>,
}

/// Perceived lightness band of the working palette
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LightnessConfig {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RulesetName {
    #[default]
    Current,
    Legacy,
}

impl From<RulesetName> for Ruleset {
    fn from(name: RulesetName) -> Self {
        match name {
            RulesetName::Current => Ruleset::Current,
            RulesetName::Legacy => Ruleset::Legacy,
        }
    }
}

/// Opacity as written in the file; strings are passed through verbatim.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OpacitySetting {
    Number(f64),
    Text(String),
}

impl From<OpacitySetting> for Opacity {
    fn from(setting: OpacitySetting) -> Self {
        match setting {
            OpacitySetting::Number(value) => Opacity::Number(value),
            OpacitySetting::Text(text) => Opacity::Text(text),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            picking_method = ?config.picking_method,
            color_type = ?config.color_type,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Create an engine and apply these settings to it
    pub fn build_engine(&self) -> (AutoColor, Vec<AutoColorError>) {
        let mut engine = match self.seed {
            Some(seed) => AutoColor::with_seed(seed),
            None => AutoColor::new(),
        };
        let errors = self.apply(&mut engine);
        (engine, errors)
    }

    /// Apply the settings in file order. Rejected values are also recorded
    /// by the engine itself; the returned list is for reporting.
    pub fn apply(&self, engine: &mut AutoColor) -> Vec<AutoColorError> {
        engine.set_ruleset(self.ruleset.into());
        if self.debugging {
            engine.enable_debugging();
        }

        let mut results = Vec::new();
        if let Some(method) = &self.picking_method {
            results.push(engine.set_color_picking_method(method));
        }
        if let Some(color_type) = &self.color_type {
            results.push(engine.set_color_type(color_type));
        }
        if let Some(min) = self.lightness.min {
            results.push(engine.set_lightness_limit("min", min));
        }
        if let Some(max) = self.lightness.max {
            results.push(engine.set_lightness_limit("max", max));
        }
        if let Some(maximum) = self.maximum_colors {
            results.push(engine.set_maximum_colors(maximum));
        }

        results.into_iter().filter_map(Result::err).collect()
    }

    /// Opacity used when the caller gives none
    pub fn default_opacity(&self) -> Opacity {
        self.opacity.clone().map(Opacity::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distinct_palette::{ColorType, PickingMethod};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.picking_method, None);
        assert_eq!(config.ruleset, RulesetName::Current);
        assert!(!config.debugging);
        assert_eq!(config.default_opacity(), Opacity::Number(1.0));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
picking_method: dynamic
color_type: rgba
lightness:
  min: 0.2
  max: 0.8
maximum_colors: 10
debugging: true
ruleset: legacy
seed: 42
opacity: "0.50"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.picking_method.as_deref(), Some("dynamic"));
        assert_eq!(config.color_type.as_deref(), Some("rgba"));
        assert_eq!(config.lightness.min, Some(0.2));
        assert_eq!(config.lightness.max, Some(0.8));
        assert_eq!(config.maximum_colors, Some(10));
        assert!(config.debugging);
        assert_eq!(config.ruleset, RulesetName::Legacy);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.default_opacity(), Opacity::Text("0.50".to_string()));
    }

    #[test]
    fn test_numeric_opacity() {
        let config: AppConfig = serde_yaml::from_str("opacity: 0.25").unwrap();
        assert_eq!(config.default_opacity(), Opacity::Number(0.25));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = serde_yaml::from_str::<AppConfig>("picking_mode: static");
        assert!(result.is_err());

        let result = serde_yaml::from_str::<AppConfig>("lightness: { low: 0.1 }");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_sets_engine() {
        let config: AppConfig =
            serde_yaml::from_str("picking_method: dynamic\ncolor_type: rgb\nmaximum_colors: 3").unwrap();
        let (engine, errors) = config.build_engine();

        assert!(errors.is_empty());
        assert_eq!(engine.config().picking_method, PickingMethod::Dynamic);
        assert_eq!(engine.config().color_type, ColorType::Rgb);
        assert_eq!(engine.config().maximum_colors, Some(3));
    }

    #[test]
    fn test_apply_reports_rejected_values() {
        let config: AppConfig =
            serde_yaml::from_str("picking_method: sometimes\nmaximum_colors: 4\nruleset: legacy").unwrap();
        let (engine, errors) = config.build_engine();

        assert_eq!(errors.len(), 2);
        assert_eq!(engine.errors().len(), 2);
        assert!(engine.is_poisoned());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color_type: hex").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.color_type.as_deref(), Some("hex"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = AppConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
