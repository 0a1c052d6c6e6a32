//! Fuzz target: inbound classification of arbitrary tags and messages.
//!
//! The first line of the input is the category tag, the rest the message.
//! Classification must be total and only ever yield one of the three shapes.

#![no_main]

use campus_core::{ClassifiedError, ErrorLabel};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (tag, message) = text.split_once('\n').unwrap_or((text, ""));

    let classified = ClassifiedError::from_tag(Some(tag), message);
    match classified.error_label {
        ErrorLabel::Unauthorized => assert_eq!(classified.http_status, 401),
        ErrorLabel::Validation => {
            assert_eq!(classified.http_status, 400);
            assert_eq!(classified.message, message);
        }
        ErrorLabel::Internal => assert_eq!(classified.http_status, 500),
    }

    let json = serde_json::to_vec(&classified.body()).expect("error body serialization must not fail");
    let again = serde_json::to_vec(&ClassifiedError::from_tag(Some(tag), message).body())
        .expect("error body serialization must not fail");
    assert_eq!(json, again, "classification must be idempotent");
});
