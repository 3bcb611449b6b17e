//! GitHub repository search operation.

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use chrono::{DateTime, SecondsFormat, Utc};
use octocrab::Octocrab;
use octocrab::models::Repository;
use std::sync::Arc;
use std::time::Duration;

/// Search repositories matching `query_fragment`, restricted to those
/// created before `created_before`.
///
/// Returns the first result page in upstream order; no further pages are
/// fetched. The creation-time cutoff is the only pagination control applied.
pub(crate) fn search_repositories(
    inner: Arc<Octocrab>,
    query_fragment: impl Into<String>,
    created_before: DateTime<Utc>,
    per_page: u8,
    timeout: Duration,
) -> AsyncTask<GitHubResult<Vec<Repository>>> {
    let query = build_query(&query_fragment.into(), created_before);

    spawn_task(async move {
        let search_future = inner
            .search()
            .repositories(&query)
            .per_page(per_page)
            .send();

        let page = tokio::time::timeout(timeout, search_future)
            .await
            .map_err(|_| GitHubError::Timeout {
                operation: "repository_search",
                duration: timeout,
            })?
            .map_err(GitHubError::classify)?;

        Ok(page.items)
    })
}

/// Append the creation-time cutoff qualifier to the filter fragment.
fn build_query(fragment: &str, created_before: DateTime<Utc>) -> String {
    let cutoff = created_before.to_rfc3339_opts(SecondsFormat::Secs, true);
    if fragment.is_empty() {
        format!("created:<{cutoff}")
    } else {
        format!("{fragment} created:<{cutoff}")
    }
}
