use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input is not valid JSON: {input}: {source}")]
    Json {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
