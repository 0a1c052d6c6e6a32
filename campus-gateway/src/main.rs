//! Entry point for the `campus-gateway` HTTP server.

use campus_gateway::{server::serve, GatewayConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env();

    if let Err(e) = serve(&config).await {
        tracing::error!(error = %e, "campus-gateway stopped");
        std::process::exit(1);
    }
}
