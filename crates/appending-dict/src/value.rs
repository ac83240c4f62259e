//! The value tree stored inside a dict, and the accumulation state machine.

use std::fmt;

use crate::dict::Dict;
use crate::flavor::{Appending, Flavor};
use crate::scalar::Scalar;

/// A value held at a dict key.
///
/// Nested maps are always dicts of the same flavor as their parent, so a tree
/// built from an [`crate::AppendingDict`] accumulates at every depth.
#[derive(Clone, PartialEq)]
pub enum Value<S = Scalar, F = Appending> {
    Scalar(S),
    Sequence(Vec<Value<S, F>>),
    Map(Dict<S, F>),
}

impl<S, F: Flavor> Value<S, F> {
    /// Name of the current variant: `"scalar"`, `"sequence"`, or `"map"`.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Map(_) => "map",
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_scalar(&self) -> Option<&S> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value<S, F>]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Dict<S, F>> {
        match self {
            Value::Map(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Dict<S, F>> {
        match self {
            Value::Map(dict) => Some(dict),
            _ => None,
        }
    }

    /// Rebuild this value with nested maps of flavor `G`. No write policy is
    /// applied; the structure is carried over as is.
    pub fn into_flavor<G: Flavor>(self) -> Value<S, G> {
        match self {
            Value::Scalar(s) => Value::Scalar(s),
            Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::into_flavor).collect())
            }
            Value::Map(dict) => Value::Map(dict.into_flavor()),
        }
    }
}

impl<S> Value<S, Appending> {
    /// Fold `incoming` into a value that already occupies a key.
    ///
    /// | current  | incoming | result                          |
    /// |----------|----------|---------------------------------|
    /// | map      | map      | recursive merge, in place       |
    /// | map      | other    | overwrite                       |
    /// | sequence | any      | append                          |
    /// | scalar   | any      | promote to `[current, incoming]`|
    pub(crate) fn accumulate(&mut self, incoming: Self) {
        match self {
            Value::Map(target) => match incoming {
                Value::Map(source) => target.merge(source),
                other => *self = other,
            },
            Value::Sequence(items) => items.push(incoming),
            Value::Scalar(_) => {
                let previous = std::mem::replace(self, Value::Sequence(Vec::new()));
                *self = Value::Sequence(vec![previous, incoming]);
            }
        }
    }
}

impl<S: fmt::Debug, F: Flavor> fmt::Debug for Value<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => s.fmt(f),
            Value::Sequence(items) => f.debug_list().entries(items).finish(),
            Value::Map(dict) => f.debug_map().entries(dict.iter()).finish(),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<F: Flavor> From<$ty> for Value<Scalar, F> {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!((), bool, i32, i64, u64, f64, &str, String, serde_json::Number);

impl<F: Flavor> From<Scalar> for Value<Scalar, F> {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl<S, F: Flavor, T: Into<Value<S, F>>> From<Vec<T>> for Value<S, F> {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Dicts of either flavor are converted to the receiving flavor on the way in.
impl<S, F: Flavor, G: Flavor> From<Dict<S, G>> for Value<S, F> {
    fn from(dict: Dict<S, G>) -> Self {
        Value::Map(dict.into_flavor())
    }
}
