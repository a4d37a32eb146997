//! Host adapter over `serde_json::Value`.

use serde_json::{Map, Number, Value};

use crate::host::{HostValue, ValueKind};

impl HostValue for Value {
    fn null() -> Self {
        Self::Null
    }

    fn from_bool(value: bool) -> Self {
        Self::Bool(value)
    }

    fn from_number(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }

    fn from_string(value: String) -> Self {
        Self::String(value)
    }

    fn new_array(len: usize) -> Self {
        Self::Array(vec![Self::Null; len])
    }

    fn new_object() -> Self {
        Self::Object(Map::new())
    }

    fn set_index(&mut self, index: usize, value: Self) {
        if let Self::Array(items) = self {
            if index >= items.len() {
                items.resize(index + 1, Self::Null);
            }
            items[index] = value;
        }
    }

    fn set_property(&mut self, key: &str, value: Self) {
        if let Self::Object(map) = self {
            map.insert(key.to_owned(), value);
        }
    }

    fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        Self::as_bool(self)
    }

    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }

    fn as_str(&self) -> Option<&str> {
        Self::as_str(self)
    }

    fn array_len(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }

    fn property(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}
