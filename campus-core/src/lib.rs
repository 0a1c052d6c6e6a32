//! Core types for campus API error classification.
//!
//! Defines the closed inbound error taxonomy, the response shape inbound
//! failures are classified into, and the result object outbound failures
//! are classified into. Everything here is a plain value: no I/O, no state.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod classified;
pub mod client_result;
pub mod error;
pub mod kind;

pub use classified::{ClassifiedError, ErrorBody, INTERNAL_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use client_result::{
    ClientErrorResult, ClientStatus, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};
pub use error::CoreError;
pub use kind::{ErrorKind, ErrorLabel, UNAUTHORIZED_TAG, VALIDATION_TAG};
