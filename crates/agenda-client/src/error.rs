//! Error types for blocked-agenda fetches.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection failed, timed out, or the request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered, but the body was not the expected record
    /// array.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The client itself could not be constructed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failed operation may be retried as-is.
    ///
    /// Network failures and server-side errors (5xx, 429) are transient;
    /// decode and configuration failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) | Self::Config(_) => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClientError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ClientError::Network(err.to_string()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability_follows_the_taxonomy() {
        assert!(ClientError::Network("timed out".into()).is_retryable());
        assert!(ClientError::Http {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(ClientError::Http {
            status: 429,
            message: String::new()
        }
        .is_retryable());
        assert!(!ClientError::Http {
            status: 404,
            message: String::new()
        }
        .is_retryable());
        assert!(!ClientError::InvalidResponse("truncated".into()).is_retryable());
        assert!(!ClientError::Config("bad url".into()).is_retryable());
    }
}
