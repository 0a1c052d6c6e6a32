//! Fuzz target: JSON deserialization of `ErrorBody`.
//!
//! Arbitrary bytes fed to the error body parser must never panic.

#![no_main]

use campus_core::ErrorBody;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    let _ = serde_json::from_slice::<ErrorBody>(data);
});
