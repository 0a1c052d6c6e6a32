//! Fuzz target: `ClientStatus` parsing and serialization.
//!
//! Any status that parses must serialize and parse back to itself.

#![no_main]

use campus_core::ClientStatus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(status) = serde_json::from_slice::<ClientStatus>(data) else {
        return;
    };
    let json = serde_json::to_string(&status).expect("ClientStatus serialization must not fail");
    let back: ClientStatus =
        serde_json::from_str(&json).expect("serialized ClientStatus must parse");
    assert_eq!(back, status);
});
