//! GitHub API error types

use std::time::Duration;
use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport or protocol failure reported by octocrab
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication required or failed
    #[error("Authentication required")]
    AuthRequired,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Operation exceeded its deadline
    #[error("Operation timed out: {operation} after {duration:?}")]
    Timeout {
        operation: &'static str,
        duration: Duration,
    },

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Classify an octocrab error by the upstream status code.
    ///
    /// GitHub reports rate-limit exhaustion as 403, so 403 and 429 both map
    /// to `RateLimitExceeded`. Anything without a usable status code stays a
    /// transport-level `Octocrab` error.
    pub(crate) fn classify(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => match source.status_code.as_u16() {
                404 => GitHubError::NotFound(source.message.clone()),
                401 => GitHubError::AuthRequired,
                403 | 429 => GitHubError::RateLimitExceeded,
                _ => GitHubError::Octocrab(err),
            },
            _ => GitHubError::Octocrab(err),
        }
    }
}
