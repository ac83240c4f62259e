//! Scalar payloads stored at the leaves of a dict.
//!
//! A dict is generic over its leaf type. [`Scalar`] is the default: it mirrors
//! the JSON primitives so that any JSON document can be loaded without loss.
//! Narrower payloads (`i64`, `String`, ...) are supported through
//! [`JsonScalar`], which is the only contract the JSON interop needs.

use serde::Serialize;
use serde_json::{Number, Value as Json};

/// A JSON-like primitive: the default leaf type of a dict.
///
/// Containers are not scalars. Arrays and objects are represented by
/// [`crate::Value::Sequence`] and [`crate::Value::Map`] instead, so a
/// `Scalar` can never smuggle a foreign map into the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Returns the string slice if this scalar is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integral number that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

/// Non-finite floats have no JSON representation and become `Null`,
/// matching `serde_json`'s own `From<f64>`.
impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Scalar::Null, Scalar::Number)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

/// Conversion between a leaf type and JSON primitives.
///
/// `from_json` returns `None` for any value the leaf type cannot hold,
/// including arrays and objects. During construction that rejection surfaces
/// as [`crate::DictError::TypeMismatch`]; during comparison against JSON it
/// makes the two sides unequal.
pub trait JsonScalar: Sized {
    /// Human-readable name of the accepted JSON type, used in error messages.
    const EXPECTED: &'static str;

    fn from_json(value: &Json) -> Option<Self>;

    fn to_json(&self) -> Json;
}

impl JsonScalar for Scalar {
    const EXPECTED: &'static str = "a JSON primitive";

    fn from_json(value: &Json) -> Option<Self> {
        match value {
            Json::Null => Some(Scalar::Null),
            Json::Bool(b) => Some(Scalar::Bool(*b)),
            Json::Number(n) => Some(Scalar::Number(n.clone())),
            Json::String(s) => Some(Scalar::String(s.clone())),
            Json::Array(_) | Json::Object(_) => None,
        }
    }

    fn to_json(&self) -> Json {
        match self {
            Scalar::Null => Json::Null,
            Scalar::Bool(b) => Json::Bool(*b),
            Scalar::Number(n) => Json::Number(n.clone()),
            Scalar::String(s) => Json::String(s.clone()),
        }
    }
}

impl JsonScalar for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_json(value: &Json) -> Option<Self> {
        value.as_bool()
    }

    fn to_json(&self) -> Json {
        Json::Bool(*self)
    }
}

impl JsonScalar for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_json(value: &Json) -> Option<Self> {
        value.as_i64()
    }

    fn to_json(&self) -> Json {
        Json::from(*self)
    }
}

impl JsonScalar for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_json(value: &Json) -> Option<Self> {
        value.as_f64()
    }

    fn to_json(&self) -> Json {
        Json::from(*self)
    }
}

impl JsonScalar for String {
    const EXPECTED: &'static str = "a string";

    fn from_json(value: &Json) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_json(&self) -> Json {
        Json::String(self.clone())
    }
}
