//! Transport-layer response interceptor.
//!
//! Runs on every call made through [`ApiClient`](crate::ApiClient), before
//! the caller sees the result.

use crate::{ApiResponse, ClientError, ErrorCode, RequestError};

/// Pass successes through and rewrap unreachable-server failures.
///
/// Network failures are logged and rejected as
/// [`RequestError::Connection`] with the original error attached. Every
/// other failure is returned unchanged as [`RequestError::Client`].
///
/// # Errors
/// Returns a [`RequestError`] whenever `result` is an error.
pub fn intercept(result: Result<ApiResponse, ClientError>) -> Result<ApiResponse, RequestError> {
    result.map_err(reject)
}

fn reject(err: ClientError) -> RequestError {
    if err.code() == ErrorCode::Network {
        tracing::error!(error = %err, source = ?std::error::Error::source(&err), "network error occurred");
        return RequestError::Connection { original: err };
    }
    RequestError::Client(err)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use hyper::body::Bytes;
    use hyper::{HeaderMap, StatusCode};

    use super::*;

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut out) = self.0.lock() {
                out.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn intercept_logged(err: ClientError) -> (RequestError, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let rejection = match tracing::subscriber::with_default(subscriber, || intercept(Err(err))) {
            Ok(r) => panic!("expected rejection, got {r:?}"),
            Err(e) => e,
        };
        let logs = match captured.0.lock() {
            Ok(out) => String::from_utf8_lossy(&out).into_owned(),
            Err(e) => panic!("log buffer poisoned: {e}"),
        };
        (rejection, logs)
    }

    fn network_error() -> ClientError {
        ClientError::Network {
            url: "http://127.0.0.1:5000/".to_owned(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused")),
        }
    }

    #[test]
    fn success_passes_through_unchanged() {
        let response = ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"[]"),
        };
        let passed = match intercept(Ok(response)) {
            Ok(r) => r,
            Err(e) => panic!("success must pass through: {e}"),
        };
        assert_eq!(passed.status, StatusCode::OK);
        assert_eq!(passed.body, Bytes::from_static(b"[]"));
    }

    #[test]
    fn network_error_is_rewrapped_with_original() {
        match intercept(Err(network_error())) {
            Err(RequestError::Connection { original }) => {
                assert_eq!(original.code(), ErrorCode::Network);
            }
            other => panic!("expected Connection rejection, got {other:?}"),
        }
    }

    #[test]
    fn other_errors_pass_through_unchanged() {
        let err = ClientError::Status { status: StatusCode::NOT_FOUND, body: "missing".to_owned() };
        match intercept(Err(err)) {
            Err(RequestError::Client(ClientError::Status { status, body })) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "missing");
            }
            other => panic!("expected unchanged Status error, got {other:?}"),
        }
    }

    #[test]
    fn network_error_is_logged() {
        let (rejection, logs) = intercept_logged(network_error());
        assert!(matches!(rejection, RequestError::Connection { .. }));
        assert!(logs.contains("network error occurred"), "missing log line: {logs}");
        assert!(logs.contains("127.0.0.1:5000"), "log must carry the original error: {logs}");
    }

    #[test]
    fn passed_through_errors_are_not_logged() {
        let err = ClientError::Status { status: StatusCode::NOT_FOUND, body: String::new() };
        let (rejection, logs) = intercept_logged(err);
        assert!(matches!(rejection, RequestError::Client(_)));
        assert!(logs.is_empty(), "pass-through must not log: {logs}");
    }
}
