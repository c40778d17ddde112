//! Client error types.

use fbfs_core::forward::ForwardError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the backend.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Collapses transport-level detail into the domain error taxonomy the
/// pipeline reports on.
impl From<ClientError> for ForwardError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(err) if err.is_timeout() => ForwardError::Timeout,
            ClientError::Request(err) if err.is_decode() => {
                ForwardError::InvalidResponse(err.to_string())
            }
            ClientError::Request(err) => ForwardError::Unreachable(err.to_string()),
            ClientError::ServerError { status, message } => {
                ForwardError::Status { status, message }
            }
            ClientError::InvalidResponse(message) => ForwardError::InvalidResponse(message),
        }
    }
}
