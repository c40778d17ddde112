use std::{env, str::FromStr, time::Duration};

use fbfs_client::CallStyle;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the computation backend (default: "http://localhost:3001")
    pub backend_url: String,
    /// How the backend call is issued (default: get-query)
    pub backend_call_style: CallStyle,
    /// Timeout for the backend call in seconds (default: 20)
    pub forward_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BACKEND_URL` - Backend base URL (default: "http://localhost:3001")
    /// - `BACKEND_CALL_STYLE` - "get-query" or "post-json" (default: "get-query")
    /// - `FORWARD_TIMEOUT_SECONDS` - Backend call timeout (default: 20)
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            backend_call_style: env::var("BACKEND_CALL_STYLE")
                .ok()
                .and_then(|v| CallStyle::from_str(&v).ok())
                .unwrap_or_default(),
            forward_timeout_seconds: env::var("FORWARD_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Get the backend call timeout as a Duration.
    pub fn forward_timeout(&self) -> Duration {
        Duration::from_secs(self.forward_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
