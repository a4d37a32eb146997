//! Fallback encodings for values that are not data.
//!
//! Closures, channels, handles and similar values have no dynamic representation. Wrapping them
//! keeps encoding total: they become strings instead of failing.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::host::HostValue;
use crate::trace::skip_mismatch;
use crate::{DecodeError, DynDecode, DynEncode};

/// A value encoded as the name of its type.
///
/// Decoding into an `Opaque` is a no-op: the host cannot produce such values.
///
/// ```
/// use dynval::{to_value, DynValue, Opaque};
///
/// let (tx, _rx) = std::sync::mpsc::channel::<u8>();
/// let v = to_value(&Opaque(tx));
/// assert!(v.as_str().unwrap().contains("Sender"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opaque<T: ?Sized>(pub T);

impl<T: ?Sized> DynEncode for Opaque<T> {
    fn encode<H: HostValue>(&self) -> H {
        H::from_string(String::from(core::any::type_name::<T>()))
    }
}

impl<T: ?Sized> DynDecode for Opaque<T> {
    fn decode_from<H: HostValue>(&mut self, _source: &H) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// A value encoded as its [`Display`](fmt::Display) text.
///
/// Decoding parses a string source with [`FromStr`]; other sources and parse failures leave the
/// value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rendered<T>(pub T);

impl<T: fmt::Display> DynEncode for Rendered<T> {
    fn encode<H: HostValue>(&self) -> H {
        H::from_string(self.0.to_string())
    }
}

impl<T: FromStr> DynDecode for Rendered<T> {
    fn decode_from<H: HostValue>(&mut self, source: &H) -> Result<(), DecodeError> {
        match source.as_str().map(str::parse) {
            Some(Ok(v)) => self.0 = v,
            _ => skip_mismatch!("parsable string", source),
        }
        Ok(())
    }
}
