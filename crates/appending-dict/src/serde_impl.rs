//! `Serialize` and `Deserialize` for dicts and values.
//!
//! Serialization is structural: maps become maps, sequences become
//! sequences, scalars serialize as themselves. Deserialization routes every
//! entry through the flavor's write policy, so an [`crate::AppendingDict`]
//! read from a document with a repeated key accumulates both values.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dict::Dict;
use crate::error::DictError;
use crate::flavor::Flavor;
use crate::scalar::Scalar;
use crate::value::Value;

impl<S: Serialize, F: Flavor> Serialize for Dict<S, F> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<S: Serialize, F: Flavor> Serialize for Value<S, F> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        match self {
            Value::Scalar(s) => s.serialize(serializer),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Map(dict) => dict.serialize(serializer),
        }
    }
}

/// A map key that must arrive as a string.
struct Key(String);

fn invalid_key<E: de::Error>(found: String) -> E {
    E::custom(DictError::InvalidKey { found })
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
                Ok(Key(v))
            }

            fn visit_char<E: de::Error>(self, v: char) -> Result<Key, E> {
                Ok(Key(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
                Err(invalid_key(format!("boolean `{v}`")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
                Err(invalid_key(format!("integer `{v}`")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
                Err(invalid_key(format!("integer `{v}`")))
            }

            fn visit_i128<E: de::Error>(self, v: i128) -> Result<Key, E> {
                Err(invalid_key(format!("integer `{v}`")))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<Key, E> {
                Err(invalid_key(format!("integer `{v}`")))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
                Err(invalid_key(format!("float `{v}`")))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
                Err(invalid_key("unit".to_owned()))
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Key, E> {
                Err(invalid_key(format!("bytes {v:?}")))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Key, E> {
                self.visit_bytes(&v)
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

struct DictVisitor<F>(PhantomData<F>);

impl<'de, F: Flavor> Visitor<'de> for DictVisitor<F> {
    type Value = Dict<Scalar, F>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dict = Dict::new();
        while let Some(Key(key)) = access.next_key()? {
            let value: Value<Scalar, F> = access.next_value()?;
            F::assign(&mut dict, key, value);
        }
        Ok(dict)
    }
}

impl<'de, F: Flavor> Deserialize<'de> for Dict<Scalar, F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictVisitor(PhantomData))
    }
}

struct ValueVisitor<F>(PhantomData<F>);

impl<'de, F: Flavor> Visitor<'de> for ValueVisitor<F> {
    type Value = Value<Scalar, F>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a primitive, a sequence, or a map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::Scalar(Scalar::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Value::Scalar(Scalar::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element::<Value<Scalar, F>>()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        DictVisitor(PhantomData).visit_map(access).map(Value::Map)
    }
}

impl<'de, F: Flavor> Deserialize<'de> for Value<Scalar, F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor(PhantomData))
    }
}
