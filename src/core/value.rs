use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;

/// Decoded JSON scalar: either a plottable number or a categorical label.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Text(String),
}

impl TypedValue {
    /// Decodes one JSON scalar node.
    ///
    /// Attempt order is fixed: a JSON number first, then a string coerced to a
    /// number when it parses as a finite float, then the string as text. Every
    /// other node kind is rejected.
    pub fn from_json(node: &Value) -> Result<Self, ValidationError> {
        match node {
            Value::Number(number) => number
                .as_f64()
                .filter(|value| value.is_finite())
                .map(Self::Number)
                .ok_or_else(|| ValidationError::MalformedValue {
                    found: format!("number `{number}` outside f64 range"),
                }),
            Value::String(text) => Ok(Self::from_text(text)),
            other => Err(ValidationError::MalformedValue {
                found: json_kind(other).to_owned(),
            }),
        }
    }

    /// Applies numeric-string coercion to a raw string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(text.to_owned()),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Label form used on axes and in diagnostics.
    ///
    /// Numbers always carry a fractional part (`50.0`, `0.25`); text is
    /// returned unchanged.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Canonical float formatting shared by value labels and gridline labels.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

impl PartialOrd for TypedValue {
    /// Numbers order by value and text orders lexicographically. Mixed variants
    /// have no ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => left.partial_cmp(right),
            (Self::Text(left), Self::Text(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for TypedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = Value::deserialize(deserializer)?;
        Self::from_json(&node).map_err(serde::de::Error::custom)
    }
}

fn json_kind(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        assert_eq!(
            TypedValue::from_json(&json!("42")).expect("decode"),
            TypedValue::Number(42.0)
        );
        assert_eq!(
            TypedValue::from_json(&json!("-0.5")).expect("decode"),
            TypedValue::Number(-0.5)
        );
    }

    #[test]
    fn plain_strings_stay_text() {
        assert_eq!(
            TypedValue::from_json(&json!("abc")).expect("decode"),
            TypedValue::Text("abc".to_owned())
        );
        assert_eq!(TypedValue::from_text("inf"), TypedValue::Text("inf".to_owned()));
        assert_eq!(TypedValue::from_text(" 4"), TypedValue::Text(" 4".to_owned()));
    }

    #[test]
    fn json_numbers_decode_directly() {
        assert_eq!(
            TypedValue::from_json(&json!(42)).expect("decode"),
            TypedValue::Number(42.0)
        );
    }

    #[test]
    fn non_scalar_nodes_are_rejected() {
        for node in [json!(true), json!(null), json!({"a": 1}), json!([1, 2])] {
            let err = TypedValue::from_json(&node).expect_err("must reject");
            assert!(matches!(err, ValidationError::MalformedValue { .. }));
        }
    }

    #[test]
    fn ordering_is_defined_within_a_variant_only() {
        let one = TypedValue::Number(1.0);
        let two = TypedValue::Number(2.0);
        let apple = TypedValue::Text("apple".to_owned());
        let pear = TypedValue::Text("pear".to_owned());

        assert!(one < two);
        assert!(apple < pear);
        assert!(!(one < apple));
        assert!(!(apple < one));
        assert_eq!(one.partial_cmp(&apple), None);
    }

    #[test]
    fn canonical_string_keeps_fractional_part() {
        assert_eq!(TypedValue::Number(50.0).canonical_string(), "50.0");
        assert_eq!(TypedValue::Number(2.5).canonical_string(), "2.5");
        assert_eq!(TypedValue::Text("Jan".to_owned()).canonical_string(), "Jan");
    }
}
