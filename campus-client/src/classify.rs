//! Application-layer classification of failed calls.
//!
//! Independent of [`intercept`](crate::intercept): callers that hold a
//! [`RequestError`](crate::RequestError) classify its
//! [`original`](crate::RequestError::original) error.

use campus_core::ClientErrorResult;

use crate::{ClientError, ErrorCode};

/// Turn a failed call into a descriptive result for calling code.
///
/// Total: every error maps to a result and nothing is raised.
#[must_use]
pub fn handle_api_error(error: &ClientError) -> ClientErrorResult {
    if error.code() == ErrorCode::Network {
        return ClientErrorResult::network_error();
    }
    ClientErrorResult::failure(
        error.message().as_deref(),
        error.response_status().map(|s| s.as_u16()),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use campus_core::{ClientStatus, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
    use hyper::StatusCode;
    use proptest::prelude::*;

    use super::*;

    fn network_error() -> ClientError {
        ClientError::Network {
            url: "http://127.0.0.1:5000/".to_owned(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused")),
        }
    }

    #[test]
    fn network_error_classifies_as_network() {
        let result = handle_api_error(&network_error());
        assert!(result.error);
        assert_eq!(result.message, NETWORK_ERROR_MESSAGE);
        assert_eq!(result.status, ClientStatus::NetworkError);
    }

    #[test]
    fn not_found_reports_response_status() {
        let err = ClientError::Status { status: StatusCode::NOT_FOUND, body: String::new() };
        let result = handle_api_error(&err);
        assert_eq!(result.status, ClientStatus::Http(404));
        assert_eq!(result.message, "Request failed with status code 404");

        let json = match serde_json::to_string(&result) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert!(json.contains("\"status\":404"), "status must serialize as a number: {json}");
    }

    #[test]
    fn timeout_has_unknown_status() {
        let result = handle_api_error(&ClientError::Timeout { timeout: Duration::from_millis(5000) });
        assert_eq!(result.status, ClientStatus::Unknown);
        assert_eq!(result.message, "timeout of 5000ms exceeded");
    }

    #[test]
    fn empty_message_falls_back_to_default() {
        let result = handle_api_error(&ClientError::Other(String::new()));
        assert_eq!(result.message, UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(result.status, ClientStatus::Unknown);
    }

    #[test]
    fn classifying_twice_is_byte_identical() {
        let err = ClientError::Status { status: StatusCode::BAD_GATEWAY, body: String::new() };
        let first = serde_json::to_vec(&handle_api_error(&err)).ok();
        let second = serde_json::to_vec(&handle_api_error(&err)).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn any_error_status_is_reported(code in 400u16..600) {
            let status = match StatusCode::from_u16(code) {
                Ok(s) => s,
                Err(e) => panic!("invalid status {code}: {e}"),
            };
            let result = handle_api_error(&ClientError::Status { status, body: String::new() });
            prop_assert!(result.error);
            prop_assert_eq!(result.status, ClientStatus::Http(code));
        }
    }
}
