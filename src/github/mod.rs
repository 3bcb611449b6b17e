//! GitHub API operations module
//!
//! Provides the two upstream operations the aggregation service depends on,
//! using the octocrab library.

pub mod client;
pub mod error;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// GitHub API operations (internal)
pub(crate) mod list_languages;
pub(crate) mod search_repositories;
