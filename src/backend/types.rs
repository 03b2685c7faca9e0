//! Backend error definitions.

use thiserror::Error;

/// Errors that can occur while building the client or writing entries.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No project to write to.
    #[error("project id must not be empty")]
    EmptyProject,

    /// Endpoint could not be parsed.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("logging API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Token could not be obtained.
    #[error("auth error: {0}")]
    Auth(String),

    /// The background writer needs a tokio runtime.
    #[error("no tokio runtime available to run the log writer")]
    NoRuntime,
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors reported by a flush.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlushError {
    /// Some entries could not be written since the previous flush.
    #[error("{count} log entries failed to send; last error: {last}")]
    Failed { count: u64, last: String },

    /// The background writer is gone.
    #[error("log writer has shut down")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::Status {
            status: 403,
            body: "denied".into(),
        };
        assert_eq!(err.to_string(), "logging API returned status 403: denied");

        let err = FlushError::Failed {
            count: 2,
            last: "boom".into(),
        };
        assert_eq!(err.to_string(), "2 log entries failed to send; last error: boom");
    }
}
