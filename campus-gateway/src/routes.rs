//! Router construction and the fixed middleware chain.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{classifier, config::GatewayConfig, cors::CorsPolicy, GatewayError};

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// # Errors
/// Returns [`GatewayError::InvalidConfig`] if the CORS policy is invalid.
pub fn create_router(config: &GatewayConfig) -> Result<Router, GatewayError> {
    apply_middleware(api_routes(), &config.cors)
}

/// Routes served by the gateway.
pub fn api_routes() -> Router {
    Router::new().route("/health", get(health))
}

/// Wrap `routes` in the middleware chain, innermost first:
///
/// 1. handlers return [`ApiError`](crate::ApiError), classified into a JSON
///    error response on the way out;
/// 2. panics anywhere below are caught and classified as internal errors;
/// 3. request tracing;
/// 4. CORS, outermost, so error responses carry CORS headers too.
///
/// # Errors
/// Returns [`GatewayError::InvalidConfig`] if the CORS policy is invalid.
pub fn apply_middleware(routes: Router, cors: &CorsPolicy) -> Result<Router, GatewayError> {
    Ok(routes
        .layer(CatchPanicLayer::custom(classifier::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer()?))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
