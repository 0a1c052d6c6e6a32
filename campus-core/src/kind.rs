//! Closed taxonomy of inbound request failures.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Category tag carried by authentication failures.
pub const UNAUTHORIZED_TAG: &str = "UnauthorizedError";

/// Category tag carried by validation failures.
pub const VALIDATION_TAG: &str = "ValidationError";

/// The kind of failure raised while handling an inbound request.
///
/// Kinds are chosen where the error is raised, so classification is an
/// exhaustive match rather than a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The caller did not present valid credentials.
    AuthenticationFailure,
    /// The request was understood but its contents were rejected.
    ValidationFailure,
    /// Anything else. Details never reach the client.
    Other,
}

impl ErrorKind {
    /// Map a free-form category tag onto a kind.
    ///
    /// Missing and unrecognised tags both classify as [`ErrorKind::Other`].
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(UNAUTHORIZED_TAG) => Self::AuthenticationFailure,
            Some(VALIDATION_TAG) => Self::ValidationFailure,
            _ => Self::Other,
        }
    }

    /// The category tag for this kind, if it has one.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::AuthenticationFailure => Some(UNAUTHORIZED_TAG),
            Self::ValidationFailure => Some(VALIDATION_TAG),
            Self::Other => None,
        }
    }

    /// HTTP status code returned for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::AuthenticationFailure => 401,
            Self::ValidationFailure => 400,
            Self::Other => 500,
        }
    }

    /// Response label for this kind.
    #[must_use]
    pub const fn label(self) -> ErrorLabel {
        match self {
            Self::AuthenticationFailure => ErrorLabel::Unauthorized,
            Self::ValidationFailure => ErrorLabel::Validation,
            Self::Other => ErrorLabel::Internal,
        }
    }
}

/// Short category string placed in the `error` field of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorLabel {
    #[serde(rename = "Unauthorized access")]
    Unauthorized,
    #[serde(rename = "Validation Error")]
    Validation,
    #[serde(rename = "Internal Server Error")]
    Internal,
}

impl ErrorLabel {
    /// The label as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized access",
            Self::Validation => "Validation Error",
            Self::Internal => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Unauthorized, Self::Validation, Self::Internal]
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| CoreError::UnknownLabel { value: s.to_owned() })
    }
}
