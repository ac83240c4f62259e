//! Write policies, selected at the type level.
//!
//! Both dict flavors share storage, vivification, and conversion. They differ
//! only in what happens when a value is assigned to a key through a generic
//! path ([`Extend`], [`FromIterator`], deserialization). That single decision
//! is the [`Flavor::assign`] hook.

use crate::dict::Dict;
use crate::value::Value;

/// The write policy of a [`Dict`].
pub trait Flavor: Sized {
    /// Name used in `Debug` output.
    const NAME: &'static str;

    /// Store `value` at `key` according to this flavor's policy.
    fn assign<S>(dict: &mut Dict<S, Self>, key: String, value: Value<S, Self>);
}

/// Plain overwrite: the last write to a key wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Setter;

/// Accumulate repeated writes into a sequence and merge nested maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appending;

impl Flavor for Setter {
    const NAME: &'static str = "SetterDict";

    fn assign<S>(dict: &mut Dict<S, Self>, key: String, value: Value<S, Self>) {
        dict.set(key, value);
    }
}

impl Flavor for Appending {
    const NAME: &'static str = "AppendingDict";

    fn assign<S>(dict: &mut Dict<S, Self>, key: String, value: Value<S, Self>) {
        dict.write(key, value);
    }
}
