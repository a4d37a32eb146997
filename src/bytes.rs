//! Byte-sequence convention.
//!
//! Byte sequences travel as host strings rather than arrays of numbers. The bytes are the text:
//! valid UTF-8 passes through unchanged in both directions. A host string cannot hold invalid
//! UTF-8, so such sequences fall back to an array of byte values, which the decoder accepts as
//! well. Every byte sequence survives the round trip.

use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use crate::host::{HostValue, ValueKind};

/// Encode a byte sequence: its text when valid UTF-8, otherwise an array of byte values.
pub(crate) fn encode_bytes<H: HostValue>(bytes: &[u8]) -> H {
    if let Ok(text) = core::str::from_utf8(bytes) {
        return H::from_string(text.to_owned());
    }
    let mut arr = H::new_array(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        arr.set_index(i, H::from_number(f64::from(b)));
    }
    arr
}

/// Decode a byte sequence from either accepted representation.
///
/// A string yields its UTF-8 bytes. An array yields one byte per element, narrowed with
/// [`number_to_byte`]; elements that are not numbers become 0. Returns `None` for any other
/// source.
pub(crate) fn decode_bytes<H: HostValue>(source: &H) -> Option<Vec<u8>> {
    match source.kind() {
        ValueKind::String => source.as_str().map(|s| s.as_bytes().to_vec()),
        ValueKind::Array => {
            let len = source.array_len();
            let mut out = Vec::with_capacity(len);
            for i in 0..len {
                let n = source.index(i).and_then(HostValue::as_number);
                out.push(n.map_or(0, number_to_byte));
            }
            Some(out)
        }
        _ => None,
    }
}

/// The one narrowing rule for bytes: fraction truncated, saturating at 0 and 255, NaN is 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn number_to_byte(n: f64) -> u8 {
    n as u8
}
