//! GitHub API client wrapper
//!
//! Provides a clean API for the upstream operations without exposing
//! Octocrab at the call sites.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repostats::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Unauthenticated: subject to the shared upstream rate limits.
//!     let gh = GitHubClient::unauthenticated()?;
//!
//!     let languages = gh.list_languages("rust-lang", "rust").await??;
//!     println!("{} languages detected", languages.len());
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use octocrab::models::Repository;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone). One instance is constructed at startup and
/// shared read-only across concurrent requests; it holds no mutable state.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create an unauthenticated client against api.github.com
    pub fn unauthenticated() -> GitHubResult<Self> {
        Self::builder().build()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }

    /// Search repositories matching a query fragment.
    ///
    /// A `created:<cutoff>` qualifier is appended so repeated calls see a
    /// stable result set. Only the first page is fetched, at most `per_page`
    /// records, in upstream order.
    pub fn search_repositories(
        &self,
        query_fragment: impl Into<String>,
        created_before: DateTime<Utc>,
        per_page: u8,
        timeout: Duration,
    ) -> AsyncTask<GitHubResult<Vec<Repository>>> {
        crate::github::search_repositories::search_repositories(
            self.inner.clone(),
            query_fragment,
            created_before,
            per_page,
            timeout,
        )
    }

    /// Language byte counts for one repository.
    ///
    /// Repositories with no detected source legitimately return an empty
    /// map.
    pub fn list_languages(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<GitHubResult<HashMap<String, u64>>> {
        crate::github::list_languages::list_languages(self.inner.clone(), owner, repo)
    }
}

/// Builder for creating `GitHubClient` with optional authentication
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        // Without a token the client is anonymous and shares the upstream
        // unauthenticated rate limit.
        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        // Set base URI if provided
        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        // Build Octocrab instance
        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
