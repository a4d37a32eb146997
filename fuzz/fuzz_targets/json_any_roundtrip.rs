#![no_main]

use libfuzzer_sys::fuzz_target;

use dynval::{decode_value, encode};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    // Materializing and re-encoding into the same host must be a fixed point.
    let first = decode_value(&json);
    let again: serde_json::Value = encode(&first);
    assert_eq!(decode_value(&again), first);
});
