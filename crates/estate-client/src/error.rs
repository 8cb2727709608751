//! Error types for the data-fetch adapter.

use thiserror::Error;

/// Errors that can occur while fetching catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network request failed (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// GraphQL errors with no usable data.
    #[error("GraphQL error: {}", .messages.join("; "))]
    GraphQl {
        /// Messages from the response's `errors` array.
        messages: Vec<String>,
    },

    /// Response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The requested property does not exist.
    #[error("property not found: {id}")]
    NotFound {
        /// Identifier that was requested.
        id: String,
    },
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the property service. Check your connection.",
            Self::NotFound { .. } => "This property is no longer available.",
            Self::InvalidEndpoint(_) => "The property service address is not configured correctly.",
            Self::Http { .. } | Self::GraphQl { .. } | Self::Decode(_) => {
                "The property service returned an unexpected response."
            }
        }
    }

    /// Returns whether the failure is transient and the same request may succeed later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.user_message().contains("connection"));

        let err = ClientError::NotFound {
            id: "p1".to_string(),
        };
        assert!(err.user_message().contains("no longer available"));
    }

    #[test]
    fn test_retryable() {
        assert!(ClientError::Network("timeout".to_string()).is_retryable());
        assert!(
            ClientError::Http {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_retryable()
        );
        assert!(
            !ClientError::Http {
                status: 400,
                message: "bad request".to_string()
            }
            .is_retryable()
        );
        assert!(!ClientError::NotFound { id: "x".to_string() }.is_retryable());
    }

    #[test]
    fn test_graphql_display_joins_messages() {
        let err = ClientError::GraphQl {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "GraphQL error: first; second");
    }
}
