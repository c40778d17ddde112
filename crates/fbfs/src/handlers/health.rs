//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Passive configuration summary

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections; performs no backend call.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Passive health summary.
///
/// Reports the configured backend without calling it, so probes stay
/// cheap and never count against the backend.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "backend_url": state.config.backend_url,
        "call_style": state.config.backend_call_style.as_str(),
        "forward_timeout_seconds": state.config.forward_timeout_seconds,
    }))
}
