use std::net::SocketAddr;

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Parameters of a mocked fbfs call, from either the query string or a
/// JSON body.
#[derive(Debug, Serialize, Deserialize)]
struct FbfsParams {
    fish_bigger: String,
    fish_smaller: String,
}

/// The response shape the real backend answers with.
#[derive(Debug, Serialize)]
struct FbfsResponse {
    result: String,
}

/// Mock backend server that simulates the fbfs computation endpoint.
pub struct MockBackendServer {
    port: u16,
}

impl MockBackendServer {
    /// Create a new mock backend server.
    ///
    /// # Arguments
    /// * `port` - The port to listen on (typically 3001)
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Run the mock backend server.
    ///
    /// This starts an HTTP server that handles:
    /// - `GET /fbfs?fish_bigger=…&fish_smaller=…`
    /// - `POST /fbfs` with a JSON body `{fish_bigger, fish_smaller}`
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::from(([127, 0, 0, 1], self.port));
        tracing::info!("Mock fbfs backend listening on http://{}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router()).await
    }
}

/// Build the mock router.
///
/// Exposed separately so tests can serve it on an ephemeral port.
pub fn router() -> Router {
    Router::new().route("/fbfs", get(fbfs_get).post(fbfs_post))
}

async fn fbfs_get(Query(params): Query<FbfsParams>) -> Json<FbfsResponse> {
    fbfs_reply(params)
}

async fn fbfs_post(Json(params): Json<FbfsParams>) -> Json<FbfsResponse> {
    fbfs_reply(params)
}

fn fbfs_reply(params: FbfsParams) -> Json<FbfsResponse> {
    tracing::info!(
        fish_bigger = %params.fish_bigger,
        fish_smaller = %params.fish_smaller,
        "Mocked fbfs call"
    );

    let input = serde_json::to_string(&params).unwrap_or_default();
    Json(FbfsResponse {
        result: format!("mocked fbfs result, your input is {input}"),
    })
}
