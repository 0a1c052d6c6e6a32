//! Gateway configuration.

use crate::cors::CorsPolicy;

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_ENV: &str = "CAMPUS_LISTEN_ADDR";

/// Address the gateway listens on by default.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub cors: CorsPolicy,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { listen_addr: DEFAULT_LISTEN_ADDR.to_owned(), cors: CorsPolicy::default() }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = lookup(LISTEN_ADDR_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        Self { listen_addr, ..Self::default() }
    }
}
