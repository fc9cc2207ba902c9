//! Error types for the storefront client.

use thiserror::Error;

/// Result type for storefront client operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Storefront client errors.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration error (missing base URL, request that cannot be replayed)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS, aborted fetch)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server-provided message when the
    /// body carried one, otherwise the raw body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl StorefrontError {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            StorefrontError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's own message for a 400 response.
    pub fn bad_request_message(&self) -> Option<&str> {
        match self {
            StorefrontError::Api { status: 400, message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether a transport-level retry may help.
    pub fn is_transient(&self) -> bool {
        match self {
            StorefrontError::Network(_) => true,
            StorefrontError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorefrontError::Parse(err.to_string())
        } else {
            StorefrontError::Network(err.to_string())
        }
    }
}
