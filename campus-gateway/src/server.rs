//! Process bootstrap: bind the listener and serve the router.

use tokio::net::TcpListener;
use tracing::info;

use crate::{routes::create_router, GatewayConfig, GatewayError};

/// Bind `config.listen_addr` and serve until the server stops.
///
/// # Errors
/// Returns [`GatewayError::InvalidConfig`] for an invalid CORS policy,
/// [`GatewayError::Bind`] if the address cannot be bound, and
/// [`GatewayError::Serve`] if serving fails.
pub async fn serve(config: &GatewayConfig) -> Result<(), GatewayError> {
    let app = create_router(config)?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| GatewayError::Bind { addr: config.listen_addr.clone(), source })?;

    info!(addr = %config.listen_addr, "campus-gateway listening");

    axum::serve(listener, app).await.map_err(GatewayError::Serve)
}
