//! Error types for tambo-docs-mcp.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation.

use thiserror::Error;

/// Errors raised by the document handler.
///
/// Handler methods fail loudly to their direct caller; the MCP server is the
/// single place these are converted into error-flagged tool results.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A required tool argument was missing or empty. Raised before any
    /// network call and never cached.
    #[error("{name} is required")]
    InvalidArgument { name: &'static str },

    /// A page fetch failed (HTTP status or transport).
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The landing-page crawl failed. The existing section set is left
    /// untouched; discovery can be retried.
    #[error("failed to discover documentation: {0}")]
    Discovery(#[source] FetchError),
}

/// HTTP boundary errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The request never produced a usable response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result type alias for handler operations.
pub type HandlerResult<T> = std::result::Result<T, HandlerError>;

// Error code implementations for machine-readable error responses
impl HandlerError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Fetch(e) => e.code(),
            Self::Discovery(_) => "DISCOVERY_ERROR",
        }
    }
}

impl FetchError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Status { .. } => "HTTP_STATUS",
            Self::Transport { .. } => "HTTP_TRANSPORT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = HandlerError::InvalidArgument { name: "path" };
        assert_eq!(err.to_string(), "path is required");
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_discovery_wraps_cause() {
        let cause = FetchError::Status {
            url: "https://docs.tambo.co/".into(),
            status: 503,
        };
        let err = HandlerError::Discovery(cause);
        assert!(err.to_string().contains("HTTP 503"));
        assert_eq!(err.code(), "DISCOVERY_ERROR");
    }
}
