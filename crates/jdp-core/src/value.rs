//! The JSON value model.
//!
//! A [`Value`] is one of the seven JSON variants. Objects preserve
//! insertion order (via [`indexmap::IndexMap`]) so that diff emission can
//! honour "left-object key order for surviving keys, added keys appended
//! in right-object order", even though structural equality and
//! lookups ignore that order.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{DiffError, Number};

/// A JSON value: `Null`, `Bool` (covering the `true`/`false` variants),
/// `Number`, `String`, `Array`, or `Object`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON `true`/`false`.
    Bool(bool),
    /// JSON number, stored as IEEE-754 double precision.
    Number(Number),
    /// JSON string, a UTF-8 byte sequence.
    String(String),
    /// JSON array: an ordered sequence of values.
    Array(Vec<Value>),
    /// JSON object: an ordered mapping from string keys to values.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Convenience constructor for the number `0`, used by the wire
    /// encoders' deletion-triple padding.
    #[must_use]
    pub fn zero() -> Self {
        Self::Number(Number::new(0.0))
    }

    /// Parses a JSON string into a [`Value`].
    ///
    /// ```
    /// # use jdp_core::Value;
    /// let value = Value::from_json_str("{\"a\":1}").unwrap();
    /// assert!(matches!(value, Value::Object(_)));
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, DiffError> {
        let json: JsonValue = serde_json::from_str(input)?;
        Ok(Self::from_json_value(json))
    }

    /// Converts a [`serde_json::Value`] into a [`Value`].
    #[must_use]
    pub fn from_json_value(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(Number::new(n.as_f64().unwrap_or(f64::NAN))),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => {
                Self::Array(items.into_iter().map(Self::from_json_value).collect())
            }
            JsonValue::Object(map) => {
                let mut object = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Self::from_json_value(value));
                }
                Self::Object(object)
            }
        }
    }

    /// Converts this value into a [`serde_json::Value`] for interop with
    /// the rest of the `serde_json` ecosystem (e.g. CLI output).
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(n.get())
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Array(items) => JsonValue::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Object(map) => {
                let mut object = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json_value());
                }
                JsonValue::Object(object)
            }
        }
    }

    /// Returns the object entries if this value is an [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the array entries if this value is an [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the number if this value is a [`Value::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str("<unrepresentable value>"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => {
                let value = n.get();
                if value == value.trunc() && value.is_finite() && value.abs() < 1e15 {
                    #[allow(clippy::cast_possible_truncation)]
                    serializer.serialize_i64(value as i64)
                } else {
                    serializer.serialize_f64(value)
                }
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut ser_map = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser_map.serialize_entry(key, value)?;
                }
                ser_map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer).map_err(de::Error::custom)?;
        Ok(Self::from_json_value(json))
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Self::from_json_value(value)
    }
}

/// Type-dispatched recursive structural equality.
///
/// Identical variants compare structurally; differing variants are
/// always unequal. Numbers compare bitwise under `strict`, or within
/// `1e-9` absolute tolerance otherwise (see [`Number::equals`]); this
/// mode also governs prefix/suffix trimming and Myers-snake extension in
/// the array diff.
///
/// ```
/// # use jdp_core::{equal, Value};
/// let a = Value::from_json_str("1.0").unwrap();
/// let b = Value::from_json_str("1.0000000001").unwrap();
/// assert!(!equal(&a, &b, true));
/// assert!(equal(&a, &b, false));
/// ```
#[must_use]
pub fn equal(left: &Value, right: &Value, strict: bool) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.equals(*b, strict),
        (Value::String(a), Value::String(b)) => a.len() == b.len() && a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| equal(x, y, strict))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, value)| match b.get(key) {
                    Some(other) => equal(value, other, strict),
                    None => false,
                })
        }
        _ => false,
    }
}
