//! Dynamic value construction macro.
//!
//! Map key rules (same ergonomics as `serde_json::json!`):
//! - `{ a: 1 }` uses the literal key `"a"` (identifier stringized)
//! - `{ "a": 1 }` uses the literal string key `"a"`
//! - `{ (k): 1 }` uses the expression `k` as the key (anything that is `Into<String>`)
//!
//! Values that are not a single token tree (negative numbers, method calls) must be wrapped in
//! parentheses: `{ "n": (-1) }`.

/// Construct a [`crate::DynValue`] using a JSON-like literal syntax.
///
/// Supported forms:
/// - `dynval!(null)`
/// - `dynval!(true)` / `dynval!(false)`
/// - `dynval!([ ... ])`
/// - `dynval!({ key: value, "key": value, (expr_key): value, ... })`
/// - `dynval!(expr)` where `expr` implements [`crate::DynEncode`].
///
/// ```
/// use dynval::{dynval, DynValue};
///
/// let user_key = "dynamic";
/// let v = dynval!({
///     a: 1,
///     (user_key): [true, null, 1.5],
/// });
/// assert_eq!(v.get("a"), Some(&DynValue::Number(1.0)));
/// ```
#[macro_export]
macro_rules! dynval {
    (null) => {
        $crate::DynValue::Null
    };
    (true) => {
        $crate::DynValue::Bool(true)
    };
    (false) => {
        $crate::DynValue::Bool(false)
    };

    ([ $($elem:tt),* $(,)? ]) => {{
        #[allow(unused_mut)]
        let mut items = $crate::__dynval_macro::Vec::new();
        $(
            items.push($crate::dynval!($elem));
        )*
        $crate::DynValue::Array(items)
    }};

    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut obj = $crate::Object::new();
        $(
            obj.insert($crate::__dynval_key!($key), $crate::dynval!($value));
        )*
        $crate::DynValue::Object(obj)
    }};

    ($other:expr) => {{
        $crate::to_value(&$other)
    }};
}

/// Internal helper for map keys.
#[doc(hidden)]
#[macro_export]
macro_rules! __dynval_key {
    ($key:ident) => {
        ::core::stringify!($key)
    };
    (($key:expr)) => {
        $key
    };
    ($key:literal) => {
        $key
    };
}

/// Hidden support module used by `dynval!` expansions.
#[doc(hidden)]
pub mod __dynval_macro {
    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}
