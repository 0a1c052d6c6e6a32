//! Cross-origin policy applied to every response.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::GatewayError;

const WILDCARD: &str = "*";

/// Origins, methods, and request headers browsers may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsPolicy {
    /// The web frontend served from port 8081 on the loopback interface.
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:8081".to_owned(),
                "http://127.0.0.1:8081".to_owned(),
            ],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .map(str::to_owned)
                .to_vec(),
            allowed_headers: vec!["Content-Type".to_owned(), "Authorization".to_owned()],
        }
    }
}

impl CorsPolicy {
    /// Build the tower layer enforcing this policy.
    ///
    /// A list holding only `"*"` allows any value.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidConfig`] if an origin, method, or
    /// header name cannot be parsed, or if `"*"` is mixed with other entries.
    pub fn layer(&self) -> Result<CorsLayer, GatewayError> {
        let origins = match parse_list("origin", &self.allowed_origins, |o| {
            HeaderValue::from_str(o).map_err(|e| e.to_string())
        })? {
            Some(list) => AllowOrigin::list(list),
            None => AllowOrigin::any(),
        };

        let methods = match parse_list("method", &self.allowed_methods, |m| {
            Method::from_bytes(m.as_bytes()).map_err(|e| e.to_string())
        })? {
            Some(list) => AllowMethods::list(list),
            None => AllowMethods::any(),
        };

        let headers = match parse_list("header", &self.allowed_headers, |h| {
            HeaderName::from_bytes(h.as_bytes()).map_err(|e| e.to_string())
        })? {
            Some(list) => AllowHeaders::list(list),
            None => AllowHeaders::any(),
        };

        Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers))
    }
}

/// Parse one policy list. `Ok(None)` means the list is the lone wildcard.
fn parse_list<T>(
    what: &str,
    values: &[String],
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Option<Vec<T>>, GatewayError> {
    if values.iter().any(|v| v == WILDCARD) {
        if values.len() == 1 {
            return Ok(None);
        }
        return Err(GatewayError::InvalidConfig(format!(
            "{what} wildcard '*' cannot be combined with other entries"
        )));
    }
    values
        .iter()
        .map(|v| parse(v).map_err(|e| GatewayError::InvalidConfig(format!("{what} '{v}': {e}"))))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_builds() {
        let policy = CorsPolicy::default();
        assert_eq!(policy.allowed_origins.len(), 2);
        assert_eq!(policy.allowed_methods, vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"]);
        assert!(policy.layer().is_ok(), "default policy must be valid");
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let policy = CorsPolicy {
            allowed_origins: vec!["http://bad\norigin".to_owned()],
            ..CorsPolicy::default()
        };
        match policy.layer() {
            Err(GatewayError::InvalidConfig(msg)) => assert!(msg.contains("origin")),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("newline in origin must be rejected"),
        }
    }

    #[test]
    fn invalid_header_is_rejected() {
        let policy = CorsPolicy {
            allowed_headers: vec!["Content Type".to_owned()],
            ..CorsPolicy::default()
        };
        assert!(matches!(policy.layer(), Err(GatewayError::InvalidConfig(_))));
    }

    #[test]
    fn lone_wildcard_origin_allows_any() {
        let policy = CorsPolicy {
            allowed_origins: vec!["*".to_owned()],
            ..CorsPolicy::default()
        };
        assert!(policy.layer().is_ok(), "a lone '*' origin must build without panicking");
    }

    #[test]
    fn wildcard_mixed_with_origins_is_rejected() {
        let policy = CorsPolicy {
            allowed_origins: vec!["*".to_owned(), "http://localhost:8081".to_owned()],
            ..CorsPolicy::default()
        };
        match policy.layer() {
            Err(GatewayError::InvalidConfig(msg)) => assert!(msg.contains("wildcard")),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("'*' mixed with other origins must be rejected"),
        }
    }

    #[test]
    fn wildcard_mixed_with_headers_is_rejected() {
        let policy = CorsPolicy {
            allowed_headers: vec!["Content-Type".to_owned(), "*".to_owned()],
            ..CorsPolicy::default()
        };
        assert!(matches!(policy.layer(), Err(GatewayError::InvalidConfig(_))));
    }
}
