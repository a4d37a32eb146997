use alloc::string::String;
use alloc::vec::Vec;

use crate::host::{HostValue, ValueKind};

/// An owned dynamic value: the six-variant tree exchanged with the host.
///
/// There is no integer variant. Every number is carried as `f64`, so integers beyond
/// 2^53 lose precision on the way through.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynValue {
    /// `null`.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Text string.
    String(String),
    /// Ordered sequence.
    Array(Vec<DynValue>),
    /// String-keyed object.
    Object(Object),
}

impl DynValue {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` iff this is `Null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Boolean payload.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Number payload.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Array payload.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Object payload.
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Mutable object payload.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Property lookup; `None` unless this is an object holding `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Element lookup; `None` unless this is an array longer than `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }
}

/// A string-keyed object that remembers insertion order.
///
/// Equality ignores key order: two objects are equal when they hold the same keys mapped to
/// equal values.
#[derive(Debug, Clone, Default)]
pub struct Object(Vec<(String, DynValue)>);

impl Object {
    /// Construct an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Construct an empty object with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the object has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|(k, _)| k == key)
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DynValue> {
        self.position(key).map(|i| &self.0[i].1)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut DynValue> {
        let i = self.position(key)?;
        Some(&mut self.0[i].1)
    }

    /// Returns `true` iff `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert `value` under `key`, returning the previous value.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: DynValue) -> Option<DynValue> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(core::mem::replace(&mut self.0[i].1, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, returning its value. Later entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<DynValue> {
        let i = self.position(key)?;
        Some(self.0.remove(i).1)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl<K: Into<String>> FromIterator<(K, DynValue)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, DynValue)>>(iter: I) -> Self {
        let mut obj = Self::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl IntoIterator for Object {
    type Item = (String, DynValue);
    type IntoIter = alloc::vec::IntoIter<(String, DynValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<bool> for DynValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for DynValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for DynValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for DynValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for DynValue {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for DynValue {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl HostValue for DynValue {
    fn null() -> Self {
        Self::Null
    }

    fn from_bool(value: bool) -> Self {
        Self::Bool(value)
    }

    fn from_number(value: f64) -> Self {
        Self::Number(value)
    }

    fn from_string(value: String) -> Self {
        Self::String(value)
    }

    fn new_array(len: usize) -> Self {
        let mut items = Vec::with_capacity(len);
        items.resize(len, Self::Null);
        Self::Array(items)
    }

    fn new_object() -> Self {
        Self::Object(Object::new())
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
        if let Self::Object(obj) = self {
            obj.insert(key, value);
        }
    }

    fn kind(&self) -> ValueKind {
        Self::kind(self)
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
        self.as_array().map_or(0, <[Self]>::len)
    }

    fn index(&self, index: usize) -> Option<&Self> {
        self.get_index(index)
    }

    fn property(&self, key: &str) -> Option<&Self> {
        self.get(key)
    }

    fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        let entries: &[(String, Self)] = match self {
            Self::Object(obj) => &obj.0,
            _ => &[],
        };
        entries.iter().map(|(k, _)| k.as_str())
    }
}
