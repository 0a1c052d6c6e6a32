//! Error types for the gateway crate.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use campus_core::ErrorKind;

use crate::classifier;

/// Boxed error accepted as an unclassified failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised while handling a request.
///
/// The variant is chosen where the error is raised. Returning one from a
/// handler runs the inbound classifier, which writes the JSON error body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The caller did not present valid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// The request contents were rejected. The message is shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// An internal failure described by a message.
    #[error("{0}")]
    Internal(String),

    /// An internal failure carrying its source error.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl ApiError {
    /// Build an error from a free-form category tag.
    #[must_use]
    pub fn from_tag(tag: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match ErrorKind::from_tag(tag) {
            ErrorKind::AuthenticationFailure => Self::Unauthorized(message),
            ErrorKind::ValidationFailure => Self::Validation(message),
            ErrorKind::Other => Self::Internal(message),
        }
    }

    /// The classification kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized(_) => ErrorKind::AuthenticationFailure,
            Self::Validation(_) => ErrorKind::ValidationFailure,
            Self::Internal(_) | Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        classifier::handle_error(&self)
    }
}

/// Errors that stop the gateway from starting or serving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
