#![no_main]

use libfuzzer_sys::fuzz_target;

use dynval::{from_value, to_value};

fuzz_target!(|data: &[u8]| {
    let v = to_value(data);
    let back: Vec<u8> = from_value(&v).expect("byte decode never fails");
    assert_eq!(back, data);
});
