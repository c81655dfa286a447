//! Fuzz target for Envelope::decode
//!
//! This fuzzer tests payload parsing with:
//! - Arbitrary separators and field counts
//! - Invalid and truncated base64
//! - Unknown version tags
//! - Oversized fields
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sealgram_proto::Envelope;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(envelope) = Envelope::decode(payload) else {
        return;
    };

    // A decoded envelope must re-encode and decode to itself
    let reencoded = envelope.encode();
    let roundtrip = Envelope::decode(&reencoded).expect("re-encoded envelope must decode");
    assert_eq!(roundtrip, envelope);
});
