//! Deep conversion between `serde_json::Value` trees and dicts.
//!
//! JSON objects become dicts of the receiving flavor at every depth, arrays
//! become sequences, and primitives go through [`JsonScalar`]. The same rules
//! drive structural equality, so a dict compares equal to the JSON it was
//! built from.

use serde_json::{Map, Value as Json};

use crate::dict::Dict;
use crate::error::{DictError, Result};
use crate::flavor::Flavor;
use crate::scalar::{JsonScalar, Scalar};
use crate::value::Value;

impl<S: JsonScalar, F: Flavor> Dict<S, F> {
    /// Build a dict from a JSON object, converting nested objects recursively.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::TypeMismatch`] if `source` is not an object, or if
    /// a primitive anywhere in the tree is rejected by `S`. Nothing is returned
    /// on failure; there is no partially built dict.
    ///
    /// # Examples
    ///
    /// ```
    /// use appending_dict::SetterDict;
    /// use serde_json::json;
    ///
    /// let source = json!({"a": 1, "b": {"c": 3}});
    /// let sd = SetterDict::from_json(&source).unwrap();
    /// assert_eq!(sd, source);
    /// ```
    pub fn from_json(source: &Json) -> Result<Self> {
        match source {
            Json::Object(map) => dict_from_object(map, ""),
            other => Err(DictError::TypeMismatch {
                path: String::new(),
                expected: "an object",
                found: kind(other),
            }),
        }
    }

    /// Parse JSON text, then build a dict with [`Dict::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`DictError::JsonParse`] for malformed input, otherwise the same
    /// errors as [`Dict::from_json`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Json = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Export the dict as a `serde_json::Value` object.
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<S: JsonScalar, F: Flavor> Value<S, F> {
    pub fn to_json(&self) -> Json {
        match self {
            Value::Scalar(s) => s.to_json(),
            Value::Sequence(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(dict) => dict.to_json(),
        }
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> Value<S, F> {
    // Leaves compare as payloads, so `1` and `1.0` agree for `f64`.
    fn eq_json(&self, other: &Json) -> bool {
        match (self, other) {
            (Value::Scalar(s), other) => S::from_json(other).is_some_and(|o| o == *s),
            (Value::Sequence(items), Json::Array(others)) => {
                items.len() == others.len()
                    && items.iter().zip(others).all(|(item, o)| item.eq_json(o))
            }
            (Value::Map(dict), Json::Object(map)) => dict.eq_json_map(map),
            _ => false,
        }
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> Dict<S, F> {
    fn eq_json_map(&self, map: &Map<String, Json>) -> bool {
        self.len() == map.len()
            && self
                .iter()
                .all(|(key, value)| map.get(key).is_some_and(|o| value.eq_json(o)))
    }
}

fn dict_from_object<S: JsonScalar, F: Flavor>(
    map: &Map<String, Json>,
    path: &str,
) -> Result<Dict<S, F>> {
    let mut dict = Dict::<S, F>::new();
    for (key, value) in map {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        let value: Value<S, F> = value_from_json(value, &child_path)?;
        dict.set(key.clone(), value);
    }
    Ok(dict)
}

fn value_from_json<S: JsonScalar, F: Flavor>(value: &Json, path: &str) -> Result<Value<S, F>> {
    match value {
        Json::Object(map) => Ok(Value::Map(dict_from_object(map, path)?)),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| value_from_json(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        primitive => S::from_json(primitive)
            .map(Value::Scalar)
            .ok_or_else(|| DictError::TypeMismatch {
                path: path.to_owned(),
                expected: S::EXPECTED,
                found: kind(primitive),
            }),
    }
}

fn kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

// With the default scalar every JSON value is representable, so these
// conversions are total and usable as `write`/`set` arguments.

impl<F: Flavor> From<Json> for Value<Scalar, F> {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Scalar(Scalar::Null),
            Json::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            Json::Number(n) => Value::Scalar(Scalar::Number(n)),
            Json::String(s) => Value::Scalar(Scalar::String(s)),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(map.into()),
        }
    }
}

impl<F: Flavor> From<Map<String, Json>> for Dict<Scalar, F> {
    fn from(map: Map<String, Json>) -> Self {
        let mut dict = Dict::new();
        for (key, value) in map {
            dict.set(key, Value::<Scalar, F>::from(value));
        }
        dict
    }
}

impl<F: Flavor> From<Map<String, Json>> for Value<Scalar, F> {
    fn from(map: Map<String, Json>) -> Self {
        Value::Map(map.into())
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> PartialEq<Json> for Dict<S, F> {
    fn eq(&self, other: &Json) -> bool {
        match other {
            Json::Object(map) => self.eq_json_map(map),
            _ => false,
        }
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> PartialEq<Map<String, Json>> for Dict<S, F> {
    fn eq(&self, other: &Map<String, Json>) -> bool {
        self.eq_json_map(other)
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> PartialEq<Dict<S, F>> for Json {
    fn eq(&self, other: &Dict<S, F>) -> bool {
        other == self
    }
}

impl<S: JsonScalar + PartialEq, F: Flavor> PartialEq<Json> for Value<S, F> {
    fn eq(&self, other: &Json) -> bool {
        self.eq_json(other)
    }
}
