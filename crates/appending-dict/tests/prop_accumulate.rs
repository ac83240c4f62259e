/// Property-based tests for dict construction and the accumulating write policy.
///
/// Strategies generate nested JSON objects (up to 3 levels deep) made of
/// primitives, arrays, and objects, and sequences of primitive writes. The
/// properties checked:
///
/// - construction from any object reproduces it structurally
/// - writing N >= 2 scalars to one key yields exactly those N values, in order
/// - merging an object with disjoint keys into a dict keeps every old key
/// - deserialization and `from_json` agree when the document has unique keys
use appending_dict::{AppendingDict, SetterDict};
use proptest::prelude::*;
use serde_json::{json, Map, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Generate a JSON object key.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

/// Generate a JSON primitive (string, integer, float, bool, null).
fn arb_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(Number::from(n))),
        (-10_000i64..10_000i64).prop_filter_map("finite float", |n| {
            Number::from_f64(n as f64 / 8.0).map(Value::Number)
        }),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

/// Generate an arbitrary JSON value, nesting arrays and objects.
fn arb_json() -> impl Strategy<Value = Value> {
    arb_primitive().prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..5).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Generate a JSON object whose values are arbitrary JSON.
fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((arb_key(), arb_json()), 0..6).prop_map(|pairs| {
        let mut map = Map::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn construction_round_trips(object in arb_object()) {
        let source = Value::Object(object);
        let sd = SetterDict::from_json(&source).unwrap();
        prop_assert_eq!(&sd, &source);
        prop_assert_eq!(sd.to_json(), source.clone());

        let ad = AppendingDict::from_json(&source).unwrap();
        prop_assert_eq!(ad.to_json(), source);
    }

    #[test]
    fn repeated_scalar_writes_accumulate_in_order(
        key in arb_key(),
        values in prop::collection::vec(arb_primitive(), 2..10),
    ) {
        let mut ad = AppendingDict::new();
        for value in &values {
            ad.write(key.as_str(), value.clone());
        }
        prop_assert_eq!(ad, json!({ key: values }));
    }

    #[test]
    fn single_write_stores_value_unchanged(key in arb_key(), value in arb_json()) {
        let mut ad = AppendingDict::new();
        ad.write(key.as_str(), value.clone());
        prop_assert_eq!(ad, json!({ key: value }));
    }

    #[test]
    fn disjoint_merge_keeps_every_key(
        existing in arb_object(),
        incoming in arb_object(),
    ) {
        let incoming: Map<String, Value> = incoming
            .into_iter()
            .filter(|(k, _)| !existing.contains_key(k))
            .collect();
        let mut ad = AppendingDict::new();
        ad.write("root", existing.clone());
        ad.write("root", incoming.clone());

        let mut expected = existing;
        expected.extend(incoming);
        prop_assert_eq!(ad, json!({ "root": expected }));
    }

    #[test]
    fn deserialize_agrees_with_from_json(object in arb_object()) {
        let source = Value::Object(object);
        let text = serde_json::to_string(&source).unwrap();
        let deserialized: AppendingDict = serde_json::from_str(&text).unwrap();
        let constructed = AppendingDict::from_json(&source).unwrap();
        prop_assert_eq!(deserialized, constructed);
    }
}
