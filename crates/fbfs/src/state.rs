//! Application state wiring the pipeline's collaborators.
//!
//! The outbound backend call sits behind the [`Forwarder`] trait object so
//! tests can swap the real HTTP client for a double.

use std::sync::Arc;

use fbfs_client::BackendClient;
use fbfs_core::forward::Forwarder;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. No mutable state: each submission is
/// handled independently and nothing persists across requests.
#[derive(Clone)]
pub struct AppState {
    /// Outbound call to the computation backend.
    pub forwarder: Arc<dyn Forwarder>,
    /// Configuration, echoed by the health endpoint.
    pub config: Config,
}

impl AppState {
    /// Creates AppState backed by the real backend client.
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let client = BackendClient::new(
            config.backend_url.clone(),
            config.backend_call_style,
            config.forward_timeout(),
        )?;

        Ok(Self::with_forwarder(config, Arc::new(client)))
    }

    /// Creates AppState with a specific forwarder.
    pub fn with_forwarder(config: Config, forwarder: Arc<dyn Forwarder>) -> Self {
        Self { forwarder, config }
    }
}

// ============================================================================
// Test support - forwarder doubles and a Default impl for unit tests
// ============================================================================
