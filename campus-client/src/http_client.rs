//! HTTP/1 transport over TCP built on hyper's pooled client.

use std::time::Duration;

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::{ApiResponse, ClientError, Transport};

/// Transport that sends requests with a pooled hyper client.
///
/// The timeout bounds the whole exchange: connecting, sending, and
/// collecting the response body.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    timeout: Duration,
}

impl HyperTransport {
    /// Create a transport with the given per-call timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client, timeout }
    }

    async fn exchange(&self, request: Request<Full<Bytes>>) -> Result<ApiResponse, ClientError> {
        let url = request.uri().to_string();

        let resp = self
            .client
            .request(request)
            .await
            .map_err(|e| send_error(e, &url))?;

        let (parts, body) = resp.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| ClientError::Other(format!("read response body: {e}")))?
            .to_bytes();

        tracing::debug!(%url, status = parts.status.as_u16(), "response received");

        if !parts.status.is_success() {
            return Err(ClientError::Status {
                status: parts.status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse { status: parts.status, headers: parts.headers, body })
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: Request<Full<Bytes>>) -> Result<ApiResponse, ClientError> {
        match tokio::time::timeout(self.timeout, self.exchange(request)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout { timeout: self.timeout }),
        }
    }
}

fn send_error(err: hyper_util::client::legacy::Error, url: &str) -> ClientError {
    if err.is_connect() {
        ClientError::Network { url: url.to_owned(), source: Box::new(err) }
    } else {
        ClientError::Other(format!("send request: {err}"))
    }
}
