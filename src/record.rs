//! Records: structs with named, individually typed fields.
//!
//! `#[derive(DynEncode)]` and `#[derive(DynDecode)]` implement [`RecordEncode`] and
//! [`RecordDecode`] for structs with named fields. The traits only expose per-field access;
//! key resolution, exclusion and empty-value omission live in [`encode_record`] and
//! [`decode_record`].

use crate::field::{Field, FieldKey};
use crate::host::{HostValue, ValueKind};
use crate::trace::skip_mismatch;
use crate::DecodeError;

/// Field-wise encoding of a record.
pub trait RecordEncode {
    /// Fields in declaration order.
    const FIELDS: &'static [Field];

    /// Encode the field at `index` in [`Self::FIELDS`].
    ///
    /// Never called for excluded fields.
    fn encode_field<H: HostValue>(&self, index: usize) -> H;
}

/// Field-wise decoding of a record.
pub trait RecordDecode {
    /// Fields in declaration order.
    const FIELDS: &'static [Field];

    /// Decode `source` into the field at `index` in [`Self::FIELDS`].
    ///
    /// Never called for excluded fields.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the field's own decode.
    fn decode_field<H: HostValue>(&mut self, index: usize, source: &H)
        -> Result<(), DecodeError>;
}

/// Encode a record as an object, fields in declaration order.
///
/// Excluded fields contribute no key. Fields marked `omitempty` are left out when their value
/// encodes to an empty value (see [`is_empty_value`]).
#[must_use]
pub fn encode_record<R: RecordEncode, H: HostValue>(record: &R) -> H {
    let mut obj = H::new_object();
    for (index, field) in R::FIELDS.iter().enumerate() {
        let FieldKey::Named { key, omit_empty } = field.resolve() else {
            continue;
        };
        let value: H = record.encode_field(index);
        if omit_empty && is_empty_value(&value) {
            continue;
        }
        obj.set_property(key, value);
    }
    obj
}

/// Decode an object into a record, fields in declaration order.
///
/// A source that is not an object leaves the record untouched. Fields whose key is missing or
/// `null` keep their current value. The first field that fails aborts the decode.
///
/// # Errors
///
/// Returns the first field error, unchanged.
pub fn decode_record<R: RecordDecode, H: HostValue>(
    record: &mut R,
    source: &H,
) -> Result<(), DecodeError> {
    if source.kind() != ValueKind::Object {
        skip_mismatch!("object", source);
        return Ok(());
    }
    for (index, field) in R::FIELDS.iter().enumerate() {
        let Some(key) = field.resolve().key() else {
            continue;
        };
        match source.property(key) {
            Some(value) if value.kind() != ValueKind::Null => record.decode_field(index, value)?,
            _ => {}
        }
    }
    Ok(())
}

/// Returns `true` for `null`, `false`, `0`, `""`, `[]` and `{}`.
#[must_use]
pub fn is_empty_value<H: HostValue>(value: &H) -> bool {
    match value.kind() {
        ValueKind::Null => true,
        ValueKind::Bool => value.as_bool() == Some(false),
        ValueKind::Number => value.as_number() == Some(0.0),
        ValueKind::String => value.as_str().is_some_and(str::is_empty),
        ValueKind::Array => value.array_len() == 0,
        ValueKind::Object => value.keys().next().is_none(),
    }
}
