//! Diagnostics for skipped decode mismatches.

/// Report a source whose shape does not fit the destination and is therefore skipped.
///
/// Expands to a `tracing::debug!` event with the `tracing` feature and to nothing otherwise.
macro_rules! skip_mismatch {
    ($expected:expr, $source:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            target: "dynval::decode",
            expected = $expected,
            found = $crate::HostValue::kind($source).name(),
            "shape mismatch, destination left unchanged"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (&$expected, &$source);
    }};
}

pub(crate) use skip_mismatch;
