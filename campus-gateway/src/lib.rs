//! HTTP gateway for the campus API.
//!
//! Wires the CORS policy and the inbound error classifier around the API
//! routes. Every failure raised while handling a request ends in a JSON
//! `{"error", "message"}` body with status 400, 401 or 500.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod classifier;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod server;

pub use config::GatewayConfig;
pub use cors::CorsPolicy;
pub use error::{ApiError, GatewayError};
