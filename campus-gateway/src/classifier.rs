//! Inbound error classifier.
//!
//! Terminal handler for every failure raised while serving a request:
//! logs the error, picks the response shape, and writes it. Nothing is
//! re-raised.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_core::ClassifiedError;

use crate::ApiError;

/// Log `err` and classify it.
///
/// The full error, including its source chain, is logged on every branch
/// before the response shape is chosen.
#[must_use]
pub fn classify(err: &ApiError) -> ClassifiedError {
    let kind = err.kind();
    tracing::error!(?kind, error = %err, trace = ?err, "request failed");
    ClassifiedError::from_kind(kind, &err.to_string())
}

/// Write a classified error as a JSON response with its status.
#[must_use]
pub fn error_response(classified: &ClassifiedError) -> Response {
    let status =
        StatusCode::from_u16(classified.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(classified.body())).into_response()
}

/// Classify `err` and build its response.
#[must_use]
pub fn handle_error(err: &ApiError) -> Response {
    error_response(&classify(err))
}

/// Turn a panic caught in the handler chain into an internal error response.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    };
    handle_error(&ApiError::Internal(format!("handler panicked: {detail}")))
}
