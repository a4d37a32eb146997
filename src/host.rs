//! The host runtime boundary.
//!
//! The engine never touches a concrete host representation. Everything it needs from the host's
//! dynamic values is expressed by [`HostValue`]; adapters implement it for [`crate::DynValue`]
//! and, behind the `serde_json` feature, for `serde_json::Value`.

use alloc::string::String;

/// The variant tag of a host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null` (hosts that also know `undefined` report it as `Null`).
    Null,
    /// `true` / `false`.
    Bool,
    /// Double-precision number.
    Number,
    /// Text string.
    String,
    /// Object in the array family.
    Array,
    /// Any other object.
    Object,
}

impl ValueKind {
    /// Lowercase name as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// A dynamic value owned by the host environment.
///
/// Construction methods are used by the encoder, inspection methods by the decoder.
/// Mutators are no-ops when applied to a value of the wrong kind.
pub trait HostValue: Sized {
    /// The `null` value.
    fn null() -> Self;

    /// A boolean value.
    fn from_bool(value: bool) -> Self;

    /// A number. Hosts without a representation for non-finite numbers map them to `null`.
    fn from_number(value: f64) -> Self;

    /// A string value.
    fn from_string(value: String) -> Self;

    /// An array of `len` elements, each initialized to `null`.
    fn new_array(len: usize) -> Self;

    /// An empty object.
    fn new_object() -> Self;

    /// Set element `index` of an array, growing it with `null` padding if needed.
    fn set_index(&mut self, index: usize, value: Self);

    /// Set a named property of an object, overwriting an existing value in place.
    fn set_property(&mut self, key: &str, value: Self);

    /// The variant tag.
    fn kind(&self) -> ValueKind;

    /// Returns true iff this is an object of the array family.
    fn is_array(&self) -> bool {
        self.kind() == ValueKind::Array
    }

    /// Boolean payload.
    fn as_bool(&self) -> Option<bool>;

    /// Number payload.
    fn as_number(&self) -> Option<f64>;

    /// String payload.
    fn as_str(&self) -> Option<&str>;

    /// Array length, or `0` for anything that is not an array.
    fn array_len(&self) -> usize;

    /// Indexed element of an array.
    fn index(&self, index: usize) -> Option<&Self>;

    /// Named property of an object.
    fn property(&self, key: &str) -> Option<&Self>;

    /// Own keys of an object, in host order. Empty for anything that is not an object.
    fn keys(&self) -> impl Iterator<Item = &str> + '_;
}
