//! Inbound classification result and its JSON body.

use serde::{Deserialize, Serialize};

use crate::kind::{ErrorKind, ErrorLabel};

/// Message returned for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Please provide valid authentication credentials";

/// Message returned for every unclassified failure.
pub const INTERNAL_MESSAGE: &str = "Something went wrong on the server";

/// The response an inbound failure is turned into.
///
/// Built fresh for each failed request and discarded once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ClassifiedError {
    /// HTTP status code: 400, 401 or 500.
    pub http_status: u16,
    /// Short category placed in the `error` field.
    pub error_label: ErrorLabel,
    /// Human-readable detail.
    pub message: String,
}

impl ClassifiedError {
    /// Classify a failure of the given kind.
    ///
    /// `message` is the error's own text. It is only echoed back for
    /// validation failures; the other kinds use a fixed message.
    #[must_use]
    pub fn from_kind(kind: ErrorKind, message: &str) -> Self {
        let message = match kind {
            ErrorKind::AuthenticationFailure => UNAUTHORIZED_MESSAGE,
            ErrorKind::ValidationFailure => message,
            ErrorKind::Other => INTERNAL_MESSAGE,
        };
        Self {
            http_status: kind.http_status(),
            error_label: kind.label(),
            message: message.to_owned(),
        }
    }

    /// Classify a failure identified by a free-form category tag.
    #[must_use]
    pub fn from_tag(tag: Option<&str>, message: &str) -> Self {
        Self::from_kind(ErrorKind::from_tag(tag), message)
    }

    /// The JSON body written to the client.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody { error: self.error_label, message: self.message.clone() }
    }
}

/// Wire shape of an error response: `{"error": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorLabel,
    pub message: String,
}

impl From<ClassifiedError> for ErrorBody {
    fn from(classified: ClassifiedError) -> Self {
        Self { error: classified.error_label, message: classified.message }
    }
}
