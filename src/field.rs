//! Field-name resolution for records.
//!
//! A field may carry an annotation ("tag") in the familiar `name,modifier,...` form:
//!
//! - no tag: the declared name is the key;
//! - `"-"`: the field is excluded from both encoding and decoding;
//! - otherwise the key is the text before the first comma. An empty name part keeps the
//!   declared name. Modifiers after it are parsed; only `omitempty` has an effect, and only on
//!   encoding.

/// Separator between the key and its modifiers.
pub const MODIFIER_SEPARATOR: char = ',';

/// The tag that excludes a field.
pub const EXCLUDED_TAG: &str = "-";

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Declared field name.
    pub name: &'static str,
    /// External-name annotation, if any.
    pub tag: Option<&'static str>,
}

impl Field {
    /// A field without annotation.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, tag: None }
    }

    /// A field with an annotation.
    #[must_use]
    pub const fn tagged(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
        }
    }

    /// Resolve the external key of this field.
    #[must_use]
    pub fn resolve(&self) -> FieldKey<'static> {
        resolve_field_key(self.name, self.tag)
    }
}

/// How a field appears in a dynamic object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
    /// The field never appears.
    Excluded,
    /// The field appears under `key`.
    Named {
        /// External key.
        key: &'a str,
        /// Leave the field out when its encoded value is empty.
        omit_empty: bool,
    },
}

impl<'a> FieldKey<'a> {
    /// External key, or `None` when excluded.
    #[must_use]
    pub const fn key(&self) -> Option<&'a str> {
        match self {
            Self::Excluded => None,
            Self::Named { key, .. } => Some(*key),
        }
    }
}

/// Resolve the external key for a field named `name` carrying the optional annotation `tag`.
#[must_use]
pub fn resolve_field_key<'a>(name: &'a str, tag: Option<&'a str>) -> FieldKey<'a> {
    let Some(tag) = tag else {
        return FieldKey::Named {
            key: name,
            omit_empty: false,
        };
    };
    if tag == EXCLUDED_TAG {
        return FieldKey::Excluded;
    }

    let mut parts = tag.split(MODIFIER_SEPARATOR);
    let key = match parts.next() {
        Some(k) if !k.is_empty() => k,
        _ => name,
    };
    let omit_empty = parts.any(|m| m.trim() == "omitempty");
    FieldKey::Named { key, omit_empty }
}
