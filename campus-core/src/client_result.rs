//! Outbound classification result handed back to calling code.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

/// Message returned when the remote server could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network connection error. Please check your internet connection.";

/// Message returned when a failed call carries no message of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Where a failed outbound call ended up.
///
/// Serialized as `"network_error"`, `"unknown"`, or the bare status number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    /// The remote server could not be reached at all.
    NetworkError,
    /// The server answered with this HTTP status.
    Http(u16),
    /// No response was received and the cause is not a network failure.
    Unknown,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError => f.write_str("network_error"),
            Self::Http(code) => write!(f, "{code}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl FromStr for ClientStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "network_error" => Ok(Self::NetworkError),
            "unknown" => Ok(Self::Unknown),
            other => other
                .parse::<u16>()
                .map(Self::Http)
                .map_err(|_| CoreError::InvalidClientStatus { value: other.to_owned() }),
        }
    }
}

impl Serialize for ClientStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NetworkError => serializer.serialize_str("network_error"),
            Self::Http(code) => serializer.serialize_u16(*code),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for ClientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(u16),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => Ok(Self::Http(code)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Descriptive result for a failed outbound call.
///
/// The classifier only runs on failure, so `error` is always `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ClientErrorResult {
    pub error: bool,
    pub message: String,
    pub status: ClientStatus,
}

impl ClientErrorResult {
    /// Result for a call that never reached the server.
    #[must_use]
    pub fn network_error() -> Self {
        Self {
            error: true,
            message: NETWORK_ERROR_MESSAGE.to_owned(),
            status: ClientStatus::NetworkError,
        }
    }

    /// Result for any other failure.
    ///
    /// A missing or empty message falls back to a generic one; a missing
    /// status becomes [`ClientStatus::Unknown`].
    #[must_use]
    pub fn failure(message: Option<&str>, status: Option<u16>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(UNEXPECTED_ERROR_MESSAGE);
        Self {
            error: true,
            message: message.to_owned(),
            status: status.map_or(ClientStatus::Unknown, ClientStatus::Http),
        }
    }
}
