use core::fmt;

/// A structured code identifying why a decode call failed.
///
/// Shape mismatches between the source and the destination are never errors; they are
/// skipped and leave the destination untouched. Only the cases below abort a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The destination was absent or not writable.
    InvalidDestination,
    /// A hand-written [`crate::DynDecode`] implementation refused the source value.
    Rejected(&'static str),
}

/// A decode failure.
///
/// Errors raised while decoding a nested field or element are passed to the caller
/// unchanged: the engine neither wraps nor aggregates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The error code.
    pub code: ErrorCode,
}

impl DecodeError {
    /// Construct an error from its code.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    /// The destination was absent or not writable.
    #[inline]
    #[must_use]
    pub const fn invalid_destination() -> Self {
        Self::new(ErrorCode::InvalidDestination)
    }

    /// Construct a rejection for use in hand-written decode implementations.
    #[inline]
    #[must_use]
    pub const fn rejected(reason: &'static str) -> Self {
        Self::new(ErrorCode::Rejected(reason))
    }

    /// Returns true iff this error reports an unusable destination.
    #[inline]
    #[must_use]
    pub const fn is_invalid_destination(self) -> bool {
        matches!(self.code, ErrorCode::InvalidDestination)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidDestination => {
                f.write_str("dynval decode failed: destination must be a writable reference")
            }
            ErrorCode::Rejected(reason) => write!(f, "dynval decode failed: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
