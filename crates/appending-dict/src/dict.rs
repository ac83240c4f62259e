//! The auto-vivifying dict and the accumulating write policy.
//!
//! ```
//! use appending_dict::{AppendingDict, SetterDict};
//! use serde_json::json;
//!
//! let mut sd = SetterDict::new();
//! sd.child("a").unwrap().child("b").unwrap().set("c", 4);
//! assert_eq!(sd, json!({"a": {"b": {"c": 4}}}));
//!
//! let mut ad = AppendingDict::new();
//! ad.write("b", 1);
//! ad.write("b", 2);
//! assert_eq!(ad, json!({"b": [1, 2]}));
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::error::{DictError, Result};
use crate::flavor::{Appending, Flavor, Setter};
use crate::scalar::Scalar;
use crate::value::Value;

/// An insertion-ordered map from string keys to [`Value`]s that creates empty
/// nested dicts on demand.
///
/// `S` is the leaf payload and `F` the write [`Flavor`]. Most code uses one of
/// the two aliases, [`SetterDict`] or [`AppendingDict`].
///
/// Equality with another dict ignores key order, like an ordinary map.
#[derive(Clone, PartialEq)]
pub struct Dict<S, F> {
    entries: IndexMap<String, Value<S, F>>,
    flavor: PhantomData<F>,
}

/// A dict of [`Scalar`] leaves where assignment overwrites.
pub type SetterDict = Dict<Scalar, Setter>;

/// A dict of [`Scalar`] leaves where repeated assignment accumulates and
/// nested maps merge. Use `Dict<S, Appending>` for other leaf types.
pub type AppendingDict = Dict<Scalar, Appending>;

impl<S, F: Flavor> Dict<S, F> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            flavor: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up `key` without vivifying it.
    pub fn peek(&self, key: &str) -> Option<&Value<S, F>> {
        self.entries.get(key)
    }

    /// Look up `key`, inserting an empty dict of the same flavor if it is absent.
    ///
    /// This is a read that can mutate: the inserted child stays in place even
    /// if nothing is ever written to it. A key that already holds a value,
    /// empty map or not, is returned untouched.
    pub fn get(&mut self, key: &str) -> &mut Value<S, F> {
        let index = match self.entries.get_index_of(key) {
            Some(index) => index,
            None => {
                self.entries
                    .insert_full(key.to_owned(), Value::Map(Self::new()))
                    .0
            }
        };
        &mut self.entries[index]
    }

    /// Vivifying lookup that requires a nested dict, for chaining deep paths.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::NotAMap`] if `key` already holds a scalar or a
    /// sequence.
    pub fn child(&mut self, key: &str) -> Result<&mut Self> {
        match self.get(key) {
            Value::Map(dict) => Ok(dict),
            other => Err(DictError::NotAMap {
                key: key.to_owned(),
                found: other.shape(),
            }),
        }
    }

    /// Store `value` at `key`, replacing whatever was there. Returns the
    /// previous value. The key keeps its original position when replaced.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<S, F>>,
    ) -> Option<Value<S, F>> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value<S, F>> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value<S, F>> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value<S, F>> {
        self.entries.iter()
    }

    /// Rebuild this dict, and every dict nested in it, as flavor `G`.
    pub fn into_flavor<G: Flavor>(self) -> Dict<S, G> {
        Dict {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, value.into_flavor()))
                .collect(),
            flavor: PhantomData,
        }
    }
}

impl<S> Dict<S, Appending> {
    /// Assign `value` to `key` under the accumulating policy.
    ///
    /// An absent key simply stores the value. On a present key:
    ///
    /// - map receiving a map: the incoming map is merged in recursively;
    /// - map receiving anything else: the incoming value replaces the map;
    /// - sequence: the incoming value is appended;
    /// - scalar: the key is promoted to `[old, incoming]`.
    ///
    /// Incoming sequences are never flattened: appending `[1, 2]` to a
    /// sequence adds one element.
    pub fn write(&mut self, key: impl Into<String>, value: impl Into<Value<S, Appending>>) {
        let key = key.into();
        let incoming = value.into();
        match self.entries.get_mut(&key) {
            Some(current) => {
                tracing::trace!(
                    key = %key,
                    current = current.shape(),
                    incoming = incoming.shape(),
                    "accumulating write"
                );
                current.accumulate(incoming);
            }
            None => {
                self.entries.insert(key, incoming);
            }
        }
    }

    /// Merge `source` into this dict in place.
    ///
    /// Nested maps descend into the (vivified) child at the same key; every
    /// other value goes through [`Dict::write`], so merged leaves accumulate
    /// next to what is already there. A nested map aimed at a key that holds a
    /// scalar or sequence is dropped.
    pub(crate) fn merge(&mut self, source: Self) {
        for (key, incoming) in source.entries {
            match incoming {
                Value::Map(nested) => match self.get(&key) {
                    Value::Map(target) => target.merge(nested),
                    other => {
                        tracing::warn!(
                            key = %key,
                            shape = other.shape(),
                            "cannot merge a map into a non-map value; entry skipped"
                        );
                    }
                },
                other => self.write(key, other),
            }
        }
    }
}

impl<S, F: Flavor> Default for Dict<S, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, F: Flavor> fmt::Debug for Dict<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", F::NAME)?;
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<S, F, K, V> Extend<(K, V)> for Dict<S, F>
where
    F: Flavor,
    K: Into<String>,
    V: Into<Value<S, F>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            F::assign(self, key.into(), value.into());
        }
    }
}

impl<S, F, K, V> FromIterator<(K, V)> for Dict<S, F>
where
    F: Flavor,
    K: Into<String>,
    V: Into<Value<S, F>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<S, F> IntoIterator for Dict<S, F> {
    type Item = (String, Value<S, F>);
    type IntoIter = indexmap::map::IntoIter<String, Value<S, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, S, F> IntoIterator for &'a Dict<S, F> {
    type Item = (&'a String, &'a Value<S, F>);
    type IntoIter = indexmap::map::Iter<'a, String, Value<S, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
