//! Fuzz target for normalize_key_handle
//!
//! This fuzzer tests recovered-key coercion with:
//! - Arbitrary non-numeric garbage
//! - Huge decimal strings (overflow past 160 bits)
//! - Malformed and case-corrupted hex forms
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sealgram_proto::normalize_key_handle;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(address) = normalize_key_handle(raw) else {
        return;
    };

    // A normalized address must be a fixed point of normalization
    let canonical = address.to_string();
    let renormalized = normalize_key_handle(&canonical).expect("canonical form must normalize");
    assert_eq!(renormalized, address);
});
