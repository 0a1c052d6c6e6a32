//! The campus API client.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, Uri};
use serde::Serialize;

use crate::{
    intercept, ApiResponse, ClientConfig, ClientError, HyperTransport, RequestError, Transport,
};

const ACCEPT_ANY: &str = "application/json, text/plain, */*";

/// Client for the campus API.
///
/// Built once at startup. Every call resolves its path against the
/// configured base URL, goes through the transport, and then through
/// [`intercept`].
#[derive(Debug, Clone)]
pub struct ApiClient<T = HyperTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<HyperTransport> {
    /// Create a client that talks HTTP/1 over TCP.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let transport = HyperTransport::new(config.timeout());
        Self { config, transport }
    }
}

impl Default for ApiClient<HyperTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET` a path.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, RequestError> {
        self.request(Method::GET, path, None).await
    }

    /// `DELETE` a path.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, RequestError> {
        self.request(Method::DELETE, path, None).await
    }

    /// `POST` a JSON body to a path.
    ///
    /// # Errors
    /// See [`ApiClient::request`]. Encoding failures surface as
    /// [`RequestError::Client`] wrapping [`ClientError::Json`].
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, RequestError> {
        self.send_json(Method::POST, path, body).await
    }

    /// `PUT` a JSON body to a path.
    ///
    /// # Errors
    /// See [`ApiClient::post_json`].
    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, RequestError> {
        self.send_json(Method::PUT, path, body).await
    }

    /// Send a request with an optional JSON body.
    ///
    /// # Errors
    /// Returns [`RequestError::Connection`] if the server cannot be reached
    /// and [`RequestError::Client`] for every other failure, including
    /// non-success statuses and timeouts.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<ApiResponse, RequestError> {
        let url = self.config.resolve(path);
        tracing::debug!(%method, %url, "sending request");

        let result = match build_request(method, &url, body) {
            Ok(req) => self.transport.send(req).await,
            Err(e) => Err(e),
        };
        intercept(result)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, RequestError> {
        let encoded = serde_json::to_vec(body)
            .map_err(|e| RequestError::Client(ClientError::Json(e)))?;
        self.request(method, path, Some(Bytes::from(encoded))).await
    }
}

fn build_request(
    method: Method,
    url: &str,
    body: Option<Bytes>,
) -> Result<Request<Full<Bytes>>, ClientError> {
    let uri = url
        .parse::<Uri>()
        .map_err(|e| ClientError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

    let mut builder = Request::builder().method(method).uri(uri).header(ACCEPT, ACCEPT_ANY);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }

    builder
        .body(Full::new(body.unwrap_or_default()))
        .map_err(|e| ClientError::Other(format!("build request: {e}")))
}
