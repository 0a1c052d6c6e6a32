//! Outbound HTTP client for the campus API.
//!
//! Requests go to a fixed base URL with a fixed per-call timeout. Failures
//! are normalized at two independent points: the transport-layer
//! interceptor ([`intercept`]), which every call passes through, and the
//! application-layer [`handle_api_error`], which callers invoke explicitly.
//! The two produce different shapes for the same failure.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod http_client;
pub mod interceptor;
pub mod transport;

pub use api::ApiClient;
pub use classify::handle_api_error;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{BoxError, ClientError, ErrorCode, RequestError, CONNECTION_ERROR_MESSAGE};
pub use http_client::HyperTransport;
pub use interceptor::intercept;
pub use transport::{ApiResponse, Transport};
