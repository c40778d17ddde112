//! HTTP client for the fbfs backend.

mod fbfs;

use std::str::FromStr;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default timeout for the backend call.
///
/// The backend can take close to twenty seconds to generate an answer, so
/// the budget has to cover the whole round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// How the backend call is issued. A deployment choice, not a feature:
/// both styles hit the same `/fbfs` path and return the same shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallStyle {
    /// `GET /fbfs?fish_bigger=…&fish_smaller=…`
    #[default]
    GetQuery,
    /// `POST /fbfs` with a JSON body `{fish_bigger, fish_smaller}`.
    PostJson,
}

impl CallStyle {
    /// The configuration spelling of this call style.
    pub fn as_str(self) -> &'static str {
        match self {
            CallStyle::GetQuery => "get-query",
            CallStyle::PostJson => "post-json",
        }
    }
}

impl FromStr for CallStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "get-query" => Ok(CallStyle::GetQuery),
            "post-json" => Ok(CallStyle::PostJson),
            other => Err(format!(
                "unknown call style {other:?}, expected \"get-query\" or \"post-json\""
            )),
        }
    }
}

/// HTTP client for the fbfs computation backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    call_style: CallStyle,
}

impl BackendClient {
    /// Create a new client with the given base URL, call style, and
    /// per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        call_style: CallStyle,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            call_style,
        })
    }

    /// Create from environment (`BACKEND_URL` or default) with the default
    /// call style and timeout.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
        Self::new(base_url, CallStyle::default(), DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured call style.
    pub fn call_style(&self) -> CallStyle {
        self.call_style
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
