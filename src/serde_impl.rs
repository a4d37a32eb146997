use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{DynValue, Object};

/// Upper bound on memory preallocated from an input-supplied length hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

/// Capacity to reserve for `hint` elements of `T`, capped so a hostile hint cannot force a
/// large allocation before any element has been read.
fn cautious<T>(hint: Option<usize>) -> usize {
    let per_elem = core::mem::size_of::<T>().max(1);
    hint.unwrap_or(0).min(MAX_PREALLOC_BYTES / per_elem)
}

impl Serialize for DynValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            m.serialize_entry(k, v)?;
        }
        m.end()
    }
}

impl<'de> Deserialize<'de> for DynValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DynValueVisitor)
    }
}

struct DynValueVisitor;

impl<'de> Visitor<'de> for DynValueVisitor {
    type Value = DynValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a null, boolean, number, string, array or object")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(DynValue::Bool(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DynValue::Number(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DynValue::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DynValue::Number(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DynValue::String(String::from(v)))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(DynValue::String(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(crate::to_value(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(DynValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(DynValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items: Vec<DynValue> = Vec::with_capacity(cautious::<DynValue>(seq.size_hint()));
        while let Some(v) = seq.next_element::<DynValue>()? {
            items.push(v);
        }
        Ok(DynValue::Array(items))
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut obj = Object::with_capacity(cautious::<(String, DynValue)>(map.size_hint()));
        while let Some((k, v)) = map.next_entry::<String, DynValue>()? {
            obj.insert(k, v);
        }
        Ok(DynValue::Object(obj))
    }
}
