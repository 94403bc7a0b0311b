//! Input parsing and output rendering for the CLI.

use crate::error::InputError;
use distinct_palette::{perceived_lightness, ColorInput, Palette};
use serde::Serialize;
use serde_json::Value;

/// How `assign` prints its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `input<TAB>color`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Serialize)]
struct Assignment<'a> {
    input: &'a Value,
    color: &'a str,
}

/// Turn one raw input into an engine input.
///
/// Without `json` the text is used verbatim. With `json` it is parsed so
/// that numbers, booleans and structured values keep their type.
pub fn parse_input(raw: &str, json: bool) -> Result<ColorInput, InputError> {
    if !json {
        return Ok(ColorInput::Text(raw.to_string()));
    }
    let value: Value = serde_json::from_str(raw).map_err(|source| InputError::Json {
        input: raw.to_string(),
        source,
    })?;
    Ok(json_to_input(value))
}

/// `null` maps to the empty string, like `false`.
pub fn json_to_input(value: Value) -> ColorInput {
    match value {
        Value::Null => ColorInput::Text(String::new()),
        Value::Bool(b) => ColorInput::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ColorInput::Integer(i)
            } else if let Some(u) = n.as_u64() {
                ColorInput::from(u)
            } else {
                ColorInput::Float(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => ColorInput::Text(s),
        Value::Array(items) => ColorInput::List(items.into_iter().map(json_to_input).collect()),
        Value::Object(map) => ColorInput::Map(
            map.into_iter()
                .map(|(key, value)| (key, json_to_input(value)))
                .collect(),
        ),
    }
}

/// Render one assignment. An empty `color` means the engine produced none.
pub fn render_assignment(format: OutputFormat, raw: &str, json_input: bool, color: &str) -> String {
    match format {
        OutputFormat::Text => format!("{raw}\t{color}"),
        OutputFormat::Json => {
            let input = if json_input {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            };
            // Serializing a borrowed Value and &str cannot fail
            serde_json::to_string(&Assignment {
                input: &input,
                color,
            })
            .unwrap_or_default()
        }
    }
}

/// One line per palette entry: index, hex and perceived lightness.
pub fn render_palette(palette: &Palette) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(index, color)| format!("{index:>2}\t#{color}\t{:.3}\n", perceived_lightness(color)))
        .collect()
}
