//! Outbound transport abstraction.
//!
//! Lets the client run over hyper in production and over a stub in tests
//! without changing request construction or error interception.

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::ClientError;

/// A successful response, passed through to callers unchanged.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ApiResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    /// Returns [`ClientError::Json`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends fully-built requests and reports failures as [`ClientError`]s.
///
/// Implementations must be `Send + Sync` so one client can be shared
/// across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the complete response.
    ///
    /// # Errors
    /// Returns [`ClientError::Network`] if the server cannot be reached,
    /// [`ClientError::Timeout`] if the exchange takes too long, and
    /// [`ClientError::Status`] for non-success responses.
    async fn send(&self, request: Request<Full<Bytes>>) -> Result<ApiResponse, ClientError>;
}
