//! Error types for the client crate.

use std::{fmt, time::Duration};

use hyper::StatusCode;

/// Boxed error kept as the source of a connection failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message carried by requests rejected because the server was unreachable.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

/// Transport code attached to every [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The server could not be reached.
    Network,
    /// The per-call timeout elapsed.
    Timeout,
    /// The server answered with a 4xx status.
    BadRequest,
    /// The server answered with any other non-success status.
    BadResponse,
    /// The request URL could not be parsed.
    InvalidUrl,
    /// Anything else.
    Unknown,
}

impl ErrorCode {
    /// Wire name of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "ERR_NETWORK",
            Self::Timeout => "ECONNABORTED",
            Self::BadRequest => "ERR_BAD_REQUEST",
            Self::BadResponse => "ERR_BAD_RESPONSE",
            Self::InvalidUrl => "ERR_INVALID_URL",
            Self::Unknown => "ERR_UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by a single outbound call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The connection to the server could not be established.
    #[error("Network Error: could not connect to {url}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The exchange did not finish within the configured timeout.
    #[error("timeout of {}ms exceeded", .timeout.as_millis())]
    Timeout { timeout: Duration },

    /// The server answered with a non-success status.
    #[error("Request failed with status code {}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    /// The request URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A JSON body could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Transport code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Network { .. } => ErrorCode::Network,
            Self::Timeout { .. } => ErrorCode::Timeout,
            Self::Status { status, .. } if status.is_client_error() => ErrorCode::BadRequest,
            Self::Status { .. } => ErrorCode::BadResponse,
            Self::InvalidUrl { .. } => ErrorCode::InvalidUrl,
            Self::Json(_) | Self::Other(_) => ErrorCode::Unknown,
        }
    }

    /// Status of the response attached to this error, if one was received.
    #[must_use]
    pub fn response_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The error's own message, or `None` when it has none.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        (!message.is_empty()).then_some(message)
    }
}

/// Rejection produced by the transport-layer interceptor.
///
/// Unreachable-server failures are rewrapped with a user-facing message;
/// every other [`ClientError`] passes through untouched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RequestError {
    /// The server could not be reached. `original` is kept for inspection.
    #[error("Unable to connect to the server. Please check your internet connection.")]
    Connection {
        #[source]
        original: ClientError,
    },

    /// Any other failure, unchanged.
    #[error(transparent)]
    Client(ClientError),
}

impl RequestError {
    /// The underlying client error.
    #[must_use]
    pub fn original(&self) -> &ClientError {
        match self {
            Self::Connection { original } | Self::Client(original) => original,
        }
    }

    /// Consume the rejection and return the underlying client error.
    #[must_use]
    pub fn into_original(self) -> ClientError {
        match self {
            Self::Connection { original } | Self::Client(original) => original,
        }
    }
}
