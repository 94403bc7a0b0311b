//! Inputs accepted by the color entry point.
//!
//! Callers hand in numbers and strings interchangeably, so the boundary is an
//! explicit sum type. Every scalar variant coerces to a canonical string key;
//! two inputs get the same color exactly when their keys are equal.

use std::fmt;

/// A value to assign a color to.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Structured values are accepted at the type level so they can be
    /// reported, but never receive a color.
    List(Vec<ColorInput>),
    Map(Vec<(String, ColorInput)>),
}

impl ColorInput {
    /// Canonical key, or `None` for structured values.
    ///
    /// - integers: decimal (`42`)
    /// - floats: shortest round-trip form, integral values without a
    ///   fraction (`3.0` -> `3`, `0.5` -> `0.5`)
    /// - text: verbatim
    /// - booleans: `true` -> `1`, `false` -> empty string
    pub fn key(&self) -> Option<String> {
        match self {
            ColorInput::Integer(value) => Some(value.to_string()),
            ColorInput::Float(value) => Some(value.to_string()),
            ColorInput::Text(value) => Some(value.clone()),
            ColorInput::Bool(true) => Some("1".to_string()),
            ColorInput::Bool(false) => Some(String::new()),
            ColorInput::List(_) | ColorInput::Map(_) => None,
        }
    }

    /// Returns true for lists and maps.
    pub fn is_composite(&self) -> bool {
        matches!(self, ColorInput::List(_) | ColorInput::Map(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ColorInput::Integer(_) => "integer",
            ColorInput::Float(_) => "float",
            ColorInput::Text(_) => "string",
            ColorInput::Bool(_) => "boolean",
            ColorInput::List(_) => "list",
            ColorInput::Map(_) => "map",
        }
    }
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => f.write_str(&key),
            None => write!(f, "<{}>", self.kind_name()),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ColorInput {
                fn from(value: $ty) -> Self {
                    ColorInput::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ColorInput {
    /// Values above `i64::MAX` keep their exact decimal form as text.
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ColorInput::Integer)
            .unwrap_or_else(|_| ColorInput::Text(value.to_string()))
    }
}

impl From<usize> for ColorInput {
    fn from(value: usize) -> Self {
        ColorInput::from(value as u64)
    }
}

impl From<f32> for ColorInput {
    fn from(value: f32) -> Self {
        ColorInput::Float(value as f64)
    }
}

impl From<f64> for ColorInput {
    fn from(value: f64) -> Self {
        ColorInput::Float(value)
    }
}

impl From<bool> for ColorInput {
    fn from(value: bool) -> Self {
        ColorInput::Bool(value)
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        ColorInput::Text(value)
    }
}

impl From<&String> for ColorInput {
    fn from(value: &String) -> Self {
        ColorInput::Text(value.clone())
    }
}

impl<T: Into<ColorInput>> From<Vec<T>> for ColorInput {
    fn from(values: Vec<T>) -> Self {
        ColorInput::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_string_share_keys() {
        assert_eq!(ColorInput::from(42).key(), ColorInput::from("42").key());
        assert_eq!(ColorInput::from(3.0).key(), Some("3".to_string()));
        assert_eq!(ColorInput::from(0.5).key(), Some("0.5".to_string()));
        assert_eq!(ColorInput::from(-7i32).key(), Some("-7".to_string()));
    }

    #[test]
    fn test_bool_keys() {
        assert_eq!(ColorInput::from(true).key(), Some("1".to_string()));
        assert_eq!(ColorInput::from(false).key(), Some(String::new()));
    }

    #[test]
    fn test_large_unsigned_stays_exact() {
        let input = ColorInput::from(u64::MAX);
        assert_eq!(input, ColorInput::Text("18446744073709551615".to_string()));
        assert_eq!(ColorInput::from(7usize), ColorInput::Integer(7));
    }

    #[test]
    fn test_composites_have_no_key() {
        let list = ColorInput::from(vec![1, 2, 3]);
        assert!(list.is_composite());
        assert_eq!(list.key(), None);
        assert_eq!(list.to_string(), "<list>");

        let map = ColorInput::Map(vec![("id".to_string(), ColorInput::from(1))]);
        assert!(map.is_composite());
        assert_eq!(map.kind_name(), "map");
    }
}
