use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::bytes::{decode_bytes, encode_bytes, number_to_byte};
use crate::host::{HostValue, ValueKind};
use crate::trace::skip_mismatch;
use crate::value::{DynValue, Object};
use crate::DecodeError;

/// Encode a native value into a host value.
///
/// Encoding is total: every implementation produces some host value and never fails.
pub trait DynEncode {
    /// Encode `self` into a freshly constructed host value.
    fn encode<H: HostValue>(&self) -> H;

    /// Encode a contiguous sequence of `Self`.
    ///
    /// Sequences become arrays; `u8` overrides this so byte sequences become strings.
    #[doc(hidden)]
    fn encode_slice<H: HostValue>(items: &[Self]) -> H
    where
        Self: Sized,
    {
        let mut arr = H::new_array(items.len());
        for (i, item) in items.iter().enumerate() {
            arr.set_index(i, item.encode());
        }
        arr
    }
}

/// Decode a host value into an existing native value.
///
/// Decoding overlays the destination: shapes that do not fit are skipped and leave it
/// untouched. Only hard failures are reported as errors.
pub trait DynDecode {
    /// Decode `source` into `self`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a nested decode. The built-in implementations never
    /// fail on their own.
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError>;

    /// Replace `items` with a new sequence decoded from `source`.
    ///
    /// `u8` overrides this so a byte sequence accepts both of its representations.
    #[doc(hidden)]
    fn decode_vec<H: HostValue>(items: &mut Vec<Self>, source: &H) -> Result<(), DecodeError>
    where
        Self: Sized + Default,
    {
        if !source.is_array() {
            skip_mismatch!("array", source);
            return Ok(());
        }
        let len = source.array_len();
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let mut item = Self::default();
            if let Some(src) = source.index(i) {
                item.decode_from(src)?;
            }
            out.push(item);
        }
        *items = out;
        Ok(())
    }

    /// Overlay a fixed-length sequence position by position.
    #[doc(hidden)]
    fn decode_slice<H: HostValue>(items: &mut [Self], source: &H) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        if !source.is_array() {
            skip_mismatch!("array", source);
            return Ok(());
        }
        let len = source.array_len().min(items.len());
        for (i, item) in items.iter_mut().take(len).enumerate() {
            if let Some(src) = source.index(i) {
                item.decode_from(src)?;
            }
        }
        Ok(())
    }
}

/// A place [`decode`] may write into.
///
/// Only `&mut T` is writable. `Option<&mut T>` models a destination that may be absent and a
/// shared `&T` one that cannot be written; both report
/// [`ErrorCode::InvalidDestination`](crate::ErrorCode::InvalidDestination) instead of decoding.
pub trait Destination<'a> {
    /// The native type being decoded.
    type Target: DynDecode;

    /// The writable slot, or `None` when there is nothing to write into.
    fn into_slot(self) -> Option<&'a mut Self::Target>;
}

impl<'a, T: DynDecode> Destination<'a> for &'a mut T {
    type Target = T;

    fn into_slot(self) -> Option<&'a mut T> {
        Some(self)
    }
}

impl<'a, T: DynDecode> Destination<'a> for Option<&'a mut T> {
    type Target = T;

    fn into_slot(self) -> Option<&'a mut T> {
        self
    }
}

impl<'a, T: DynDecode> Destination<'a> for &'a T {
    type Target = T;

    fn into_slot(self) -> Option<&'a mut T> {
        None
    }
}

/// Encode a native value into any host representation.
#[must_use]
pub fn encode<H: HostValue, T: DynEncode + ?Sized>(value: &T) -> H {
    value.encode()
}

/// Encode a native value into the owned [`DynValue`] model.
#[must_use]
pub fn to_value<T: DynEncode + ?Sized>(value: &T) -> DynValue {
    value.encode()
}

/// Decode `source` into `destination`.
///
/// # Errors
///
/// Returns `InvalidDestination` if the destination is absent or not writable, and otherwise
/// any error raised by a nested decode, unchanged.
pub fn decode<'a, H: HostValue, D: Destination<'a> + 'a>(
    source: &H,
    destination: D,
) -> Result<(), DecodeError> {
    let slot = destination
        .into_slot()
        .ok_or_else(DecodeError::invalid_destination)?;
    slot.decode_from(source)
}

/// Decode `source` into a fresh `T::default()`.
///
/// # Errors
///
/// Returns any error raised by a nested decode.
pub fn from_value<T: DynDecode + Default, H: HostValue>(source: &H) -> Result<T, DecodeError> {
    let mut out = T::default();
    out.decode_from(source)?;
    Ok(out)
}

/// Materialize `source` as an untyped tree.
///
/// This is the "any" decode path: it mirrors the source exactly and cannot fail.
#[must_use]
pub fn decode_value<H: HostValue>(source: &H) -> DynValue {
    match source.kind() {
        ValueKind::Null => DynValue::Null,
        ValueKind::Bool => DynValue::Bool(source.as_bool().unwrap_or_default()),
        ValueKind::Number => DynValue::Number(source.as_number().unwrap_or_default()),
        ValueKind::String => DynValue::String(source.as_str().unwrap_or_default().to_owned()),
        ValueKind::Array => {
            let len = source.array_len();
            let items = (0..len)
                .map(|i| source.index(i).map_or(DynValue::Null, decode_value))
                .collect();
            DynValue::Array(items)
        }
        ValueKind::Object => {
            let mut obj = Object::new();
            for key in source.keys() {
                let value = source.property(key).map_or(DynValue::Null, decode_value);
                obj.insert(key, value);
            }
            DynValue::Object(obj)
        }
    }
}

/// Visit every property of an object source; non-objects are skipped.
fn decode_entries<H, F>(source: &H, mut f: F) -> Result<(), DecodeError>
where
    H: HostValue,
    F: FnMut(&str, &H) -> Result<(), DecodeError>,
{
    if source.kind() != ValueKind::Object {
        skip_mismatch!("object", source);
        return Ok(());
    }
    for key in source.keys() {
        if let Some(value) = source.property(key) {
            f(key, value)?;
        }
    }
    Ok(())
}

impl DynEncode for () {
    fn encode<H: HostValue>(&self) -> H {
        H::null()
    }
}

impl DynDecode for () {
    fn decode_from<H: HostValue>(&mut self, _source: &H) -> Result<(), DecodeError> {
        Ok(())
    }
}

impl DynEncode for bool {
    fn encode<H: HostValue>(&self) -> H {
        H::from_bool(*self)
    }
}

impl DynDecode for bool {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        match source.as_bool() {
            Some(b) => *self = b,
            None => skip_mismatch!("boolean", source),
        }
        Ok(())
    }
}

macro_rules! number_codec {
    ($($t:ty),* $(,)?) => {
        $(
            impl DynEncode for $t {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn encode<H: HostValue>(&self) -> H {
                    H::from_number(*self as f64)
                }
            }

            impl DynDecode for $t {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
                    match source.as_number() {
                        Some(n) => *self = n as $t,
                        None => skip_mismatch!("number", source),
                    }
                    Ok(())
                }
            }
        )*
    };
}

number_codec!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64);

impl DynEncode for u8 {
    fn encode<H: HostValue>(&self) -> H {
        H::from_number(f64::from(*self))
    }

    fn encode_slice<H: HostValue>(items: &[Self]) -> H {
        encode_bytes(items)
    }
}

impl DynDecode for u8 {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        match source.as_number() {
            Some(n) => *self = number_to_byte(n),
            None => skip_mismatch!("number", source),
        }
        Ok(())
    }

    fn decode_vec<H: HostValue>(items: &mut Vec<Self>, source: &H) -> Result<(), DecodeError> {
        match decode_bytes(source) {
            Some(bytes) => *items = bytes,
            None => skip_mismatch!("string or array", source),
        }
        Ok(())
    }

    fn decode_slice<H: HostValue>(items: &mut [Self], source: &H) -> Result<(), DecodeError> {
        match decode_bytes(source) {
            Some(bytes) => {
                let len = bytes.len().min(items.len());
                items[..len].copy_from_slice(&bytes[..len]);
            }
            None => skip_mismatch!("string or array", source),
        }
        Ok(())
    }
}

impl DynEncode for char {
    fn encode<H: HostValue>(&self) -> H {
        H::from_string(String::from(*self))
    }
}

impl DynDecode for char {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        let mut chars = source.as_str().unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => *self = c,
            _ => skip_mismatch!("single-character string", source),
        }
        Ok(())
    }
}

impl DynEncode for str {
    fn encode<H: HostValue>(&self) -> H {
        H::from_string(self.to_owned())
    }
}

impl DynEncode for String {
    fn encode<H: HostValue>(&self) -> H {
        H::from_string(self.clone())
    }
}

impl DynDecode for String {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        match source.as_str() {
            Some(s) => s.clone_into(self),
            None => skip_mismatch!("string", source),
        }
        Ok(())
    }
}

impl<T: DynEncode> DynEncode for [T] {
    fn encode<H: HostValue>(&self) -> H {
        T::encode_slice(self)
    }
}

impl<T: DynEncode, const N: usize> DynEncode for [T; N] {
    fn encode<H: HostValue>(&self) -> H {
        T::encode_slice(self)
    }
}

impl<T: DynDecode, const N: usize> DynDecode for [T; N] {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        T::decode_slice(self, source)
    }
}

impl<T: DynEncode> DynEncode for Vec<T> {
    fn encode<H: HostValue>(&self) -> H {
        T::encode_slice(self)
    }
}

impl<T: DynDecode + Default> DynDecode for Vec<T> {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        T::decode_vec(self, source)
    }
}

impl<T: DynEncode> DynEncode for Option<T> {
    fn encode<H: HostValue>(&self) -> H {
        match self {
            Some(v) => v.encode(),
            None => H::null(),
        }
    }
}

impl<T: DynDecode + Default> DynDecode for Option<T> {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        if source.kind() == ValueKind::Null {
            *self = None;
            return Ok(());
        }
        match self {
            Some(v) => v.decode_from(source),
            None => {
                let mut v = T::default();
                v.decode_from(source)?;
                *self = Some(v);
                Ok(())
            }
        }
    }
}

impl<T: DynEncode + ?Sized> DynEncode for &T {
    fn encode<H: HostValue>(&self) -> H {
        (**self).encode()
    }
}

impl<T: DynEncode + ?Sized> DynEncode for &mut T {
    fn encode<H: HostValue>(&self) -> H {
        (**self).encode()
    }
}

impl<T: DynEncode + ?Sized> DynEncode for Box<T> {
    fn encode<H: HostValue>(&self) -> H {
        (**self).encode()
    }
}

impl<T: DynDecode + ?Sized> DynDecode for Box<T> {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        (**self).decode_from(source)
    }
}

impl<T: DynEncode + ?Sized> DynEncode for Rc<T> {
    fn encode<H: HostValue>(&self) -> H {
        (**self).encode()
    }
}

impl<T: DynEncode + ?Sized> DynEncode for Arc<T> {
    fn encode<H: HostValue>(&self) -> H {
        (**self).encode()
    }
}

macro_rules! tuple_codec {
    ($len:expr => $($idx:tt $t:ident),+) => {
        impl<$($t: DynEncode),+> DynEncode for ($($t,)+) {
            fn encode<H: HostValue>(&self) -> H {
                let mut arr = H::new_array($len);
                $(arr.set_index($idx, self.$idx.encode());)+
                arr
            }
        }

        impl<$($t: DynDecode),+> DynDecode for ($($t,)+) {
            fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
                if !source.is_array() {
                    skip_mismatch!("array", source);
                    return Ok(());
                }
                $(
                    if let Some(src) = source.index($idx) {
                        self.$idx.decode_from(src)?;
                    }
                )+
                Ok(())
            }
        }
    };
}

tuple_codec!(1 => 0 A);
tuple_codec!(2 => 0 A, 1 B);
tuple_codec!(3 => 0 A, 1 B, 2 C);
tuple_codec!(4 => 0 A, 1 B, 2 C, 3 D);
tuple_codec!(5 => 0 A, 1 B, 2 C, 3 D, 4 E);
tuple_codec!(6 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
tuple_codec!(7 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
tuple_codec!(8 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 I);

impl<K: AsRef<str>, V: DynEncode> DynEncode for BTreeMap<K, V> {
    fn encode<H: HostValue>(&self) -> H {
        let mut obj = H::new_object();
        for (k, v) in self {
            obj.set_property(k.as_ref(), v.encode());
        }
        obj
    }
}

impl<V: DynDecode + Default> DynDecode for BTreeMap<String, V> {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        decode_entries(source, |key, value| {
            let mut slot = V::default();
            slot.decode_from(value)?;
            self.insert(key.to_owned(), slot);
            Ok(())
        })
    }
}

#[cfg(feature = "std")]
impl<K: AsRef<str>, V: DynEncode, S> DynEncode for std::collections::HashMap<K, V, S> {
    fn encode<H: HostValue>(&self) -> H {
        let mut obj = H::new_object();
        for (k, v) in self {
            obj.set_property(k.as_ref(), v.encode());
        }
        obj
    }
}

#[cfg(feature = "std")]
impl<V, S> DynDecode for std::collections::HashMap<String, V, S>
where
    V: DynDecode + Default,
    S: core::hash::BuildHasher,
{
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        decode_entries(source, |key, value| {
            let mut slot = V::default();
            slot.decode_from(value)?;
            self.insert(key.to_owned(), slot);
            Ok(())
        })
    }
}

impl DynEncode for DynValue {
    fn encode<H: HostValue>(&self) -> H {
        match self {
            Self::Null => H::null(),
            Self::Bool(b) => H::from_bool(*b),
            Self::Number(n) => H::from_number(*n),
            Self::String(s) => H::from_string(s.clone()),
            Self::Array(items) => {
                let mut arr = H::new_array(items.len());
                for (i, item) in items.iter().enumerate() {
                    arr.set_index(i, item.encode());
                }
                arr
            }
            Self::Object(obj) => obj.encode(),
        }
    }
}

impl DynDecode for DynValue {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        *self = decode_value(source);
        Ok(())
    }
}

impl DynEncode for Object {
    fn encode<H: HostValue>(&self) -> H {
        let mut obj = H::new_object();
        for (k, v) in self.iter() {
            obj.set_property(k, v.encode());
        }
        obj
    }
}

impl DynDecode for Object {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        decode_entries(source, |key, value| {
            self.insert(key, decode_value(value));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use alloc::vec;

    #[test]
    fn absent_and_shared_destinations_are_rejected() {
        let src = DynValue::Number(1.0);
        let err = decode(&src, None::<&mut i32>).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDestination);

        let plain = 0i32;
        let err = decode(&src, &plain).unwrap_err();
        assert!(err.is_invalid_destination());
        assert_eq!(plain, 0);
    }

    #[test]
    fn present_option_destination_is_written() {
        let mut out = 0i32;
        decode(&DynValue::Number(7.0), Some(&mut out)).unwrap();
        assert_eq!(out, 7);
    }

    #[test]
    fn numbers_truncate_into_integers() {
        let mut i = 0i32;
        i.decode_from(&DynValue::Number(3.9)).unwrap();
        assert_eq!(i, 3);

        let mut u = 0u8;
        u.decode_from(&DynValue::Number(300.0)).unwrap();
        assert_eq!(u, 255);

        u.decode_from(&DynValue::Number(f64::NAN)).unwrap();
        assert_eq!(u, 0);
    }

    #[test]
    fn no_cross_category_coercion() {
        let mut n = 5i64;
        n.decode_from(&DynValue::from("12")).unwrap();
        assert_eq!(n, 5);

        let mut s = String::from("keep");
        s.decode_from(&DynValue::Number(1.0)).unwrap();
        assert_eq!(s, "keep");

        let mut b = true;
        b.decode_from(&DynValue::Null).unwrap();
        assert!(b);
    }

    #[test]
    fn option_null_clears_and_value_fills() {
        let mut o = Some(3u32);
        o.decode_from(&DynValue::Null).unwrap();
        assert_eq!(o, None);
        o.decode_from(&DynValue::Number(9.0)).unwrap();
        assert_eq!(o, Some(9));
    }

    #[test]
    fn fixed_arrays_overlay_by_position() {
        let mut arr = [1u16, 2, 3];
        arr.decode_from(&DynValue::Array(vec![DynValue::from(10)]))
            .unwrap();
        assert_eq!(arr, [10, 2, 3]);

        let mut raw = [0u8; 4];
        raw.decode_from(&DynValue::from("ab")).unwrap();
        assert_eq!(raw, [b'a', b'b', 0, 0]);
    }

    #[test]
    fn tuples_encode_as_arrays() {
        let v = to_value(&(1u8, "a", true));
        assert_eq!(
            v,
            DynValue::Array(vec![
                DynValue::Number(1.0),
                DynValue::from("a"),
                DynValue::Bool(true)
            ])
        );

        let mut t = (0u8, String::new(), false);
        t.decode_from(&v).unwrap();
        assert_eq!(t, (1, String::from("a"), true));
    }

    #[test]
    fn char_needs_exactly_one_character() {
        let mut c = 'x';
        c.decode_from(&DynValue::from("ab")).unwrap();
        assert_eq!(c, 'x');
        c.decode_from(&DynValue::from("\u{e9}")).unwrap();
        assert_eq!(c, '\u{e9}');
    }
}
