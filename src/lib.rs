//! # dynval
//!
//! Bidirectional marshaling between native Rust data and a JSON-like dynamic value model owned
//! by a host environment (a script engine, a JSON document, an FFI boundary).
//!
//! ## Design principles
//!
//! - **Encoding is total.**
//!   [`encode`] and [`to_value`] turn any [`DynEncode`] value into a host value and never fail.
//!   Values that are not data go through [`Opaque`] or [`Rendered`] and become strings.
//! - **Decoding is an overlay.**
//!   [`decode`] writes into an existing destination. Shapes that do not fit are skipped and
//!   leave the destination untouched; only an unusable destination or an error raised by a
//!   hand-written implementation aborts the call.
//! - **The host is an interface.**
//!   The engine only talks to the host through [`HostValue`]. [`DynValue`] is the built-in
//!   representation and doubles as the untyped "any" destination.
//!
//! ## Data model
//!
//! Six variants: `null`, boolean, number (`f64`), string, array, object. All integer widths are
//! carried as `f64`; integers beyond 2^53 lose precision.
//!
//! | native                              | dynamic                      |
//! |-------------------------------------|------------------------------|
//! | `()`, `None`                        | null                         |
//! | `bool`                              | boolean                      |
//! | integers, floats                    | number                       |
//! | `String`, `str`, `char`             | string                       |
//! | `Vec<u8>`, `[u8]`, `[u8; N]`        | string (the bytes as UTF-8)  |
//! | `Vec<T>`, `[T]`, `[T; N]`, tuples   | array                        |
//! | `HashMap<String, V>`, `BTreeMap`    | object                       |
//! | `#[derive(DynEncode, DynDecode)]`   | object keyed by field names  |
//! | [`DynValue`]                        | mirrored exactly             |
//!
//! ## Records
//!
//! ```
//! use dynval::{decode, dynval, to_value, DynDecode, DynEncode};
//!
//! #[derive(Debug, Default, PartialEq, DynEncode, DynDecode)]
//! struct User {
//!     #[dynval(tag = "name")]
//!     name: String,
//!     #[dynval(rename = "age")]
//!     years: u32,
//!     #[dynval(skip)]
//!     session: String,
//! }
//!
//! let user = User { name: "Alice".into(), years: 30, session: "x".into() };
//! let v = to_value(&user);
//! assert_eq!(v, dynval!({"name": "Alice", "age": 30}));
//!
//! let mut back = User::default();
//! decode(&v, &mut back).unwrap();
//! assert_eq!(back, User { name: "Alice".into(), years: 30, session: String::new() });
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: `HashMap` support and `std::error::Error` for [`DecodeError`].
//! - `serde`: `Serialize`/`Deserialize` for [`DynValue`].
//! - `serde_json`: [`HostValue`] for `serde_json::Value`.
//! - `tracing`: debug events under target `dynval::decode` for every skipped mismatch.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible and requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod bytes;
mod codec;
mod error;
pub mod field;
mod host;
#[cfg(feature = "serde_json")]
mod json;
mod macros;
mod opaque;
pub mod record;
#[cfg(feature = "serde")]
mod serde_impl;
mod trace;
mod value;

pub use crate::codec::{
    decode, decode_value, encode, from_value, to_value, Destination, DynDecode, DynEncode,
};
pub use crate::error::{DecodeError, ErrorCode};
pub use crate::field::{resolve_field_key, Field, FieldKey};
pub use crate::host::{HostValue, ValueKind};
#[doc(hidden)]
pub use crate::macros::__dynval_macro;
pub use crate::opaque::{Opaque, Rendered};
pub use crate::record::{decode_record, encode_record, RecordDecode, RecordEncode};
pub use crate::value::{DynValue, Object};

pub use dynval_derive::{DynDecode, DynEncode};
