use thiserror::Error;

/// Errors that can occur when forwarding a submission to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForwardError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),
    #[error("Backend did not answer in time")]
    Timeout,
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Result type for forwarding operations.
pub type Result<T> = std::result::Result<T, ForwardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_display() {
        let error = ForwardError::Unreachable("connection refused".to_string());
        assert_eq!(error.to_string(), "Backend unreachable: connection refused");
    }

    #[test]
    fn test_status_display() {
        let error = ForwardError::Status {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(error.to_string(), "Backend returned 503: overloaded");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            ForwardError::Timeout.to_string(),
            "Backend did not answer in time"
        );
    }
}
