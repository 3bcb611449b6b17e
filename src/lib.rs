//! `repostats` - GitHub repository statistics aggregation service
//!
//! A read-through aggregation service over the GitHub API: each inbound
//! request turns into one repository search call whose result page fans out
//! into per-repository language lookups, merged back into an index-aligned
//! JSON response. Built on octocrab with an axum HTTP surface.

// Module declarations
pub mod config;
pub mod filter;
pub mod github;
pub mod runtime;
pub mod server;
pub mod stats;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export aggregation engine types
pub use stats::{
    EnrichConfig, LanguageBytes, LanguageSource, RepoStats, RepoSummary, enrich_repositories,
};

// Re-export filter types
pub use filter::{FilterError, SearchFilter, search_fragment};

// Re-export configuration
pub use config::ServiceConfig;
