//! # appending-dict
//!
//! Nested, auto-vivifying maps for building up structured results one path at
//! a time.
//!
//! Two flavors share one implementation:
//!
//! - [`SetterDict`] creates intermediate levels on demand, so deep keys can be
//!   set without preparing their parents. Assignment overwrites.
//! - [`AppendingDict`] does the same, but a repeated assignment to a key turns
//!   it into a list of every value written, and assigning a map to a key that
//!   already holds a map merges the two recursively.
//!
//! ## Quick start
//!
//! ```rust
//! use appending_dict::AppendingDict;
//! use serde_json::json;
//!
//! let mut ad = AppendingDict::new();
//! ad.child("b").unwrap().child("c").unwrap().write("d", 3);
//! ad.write("b", json!({"c": {"d": 4}}));
//! assert_eq!(ad, json!({"b": {"c": {"d": [3, 4]}}}));
//! ```
//!
//! ## Modules
//!
//! - [`dict`] — `Dict`, vivification, and the accumulating write policy
//! - [`value`] — the `Value` tree (scalar, sequence, map)
//! - [`flavor`] — type-level write policies (`Setter`, `Appending`)
//! - [`scalar`] — the default `Scalar` leaf and the `JsonScalar` contract
//! - [`json`] — conversion to and from `serde_json::Value`, structural equality
//! - [`error`] — Error types for conversion and traversal failures

pub mod dict;
pub mod error;
pub mod flavor;
pub mod json;
pub mod scalar;
mod serde_impl;
pub mod value;

pub use dict::{AppendingDict, Dict, SetterDict};
pub use error::DictError;
pub use flavor::{Appending, Flavor, Setter};
pub use scalar::{JsonScalar, Scalar};
pub use value::Value;
