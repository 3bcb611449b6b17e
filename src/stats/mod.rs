//! Fan-out/fan-in aggregation engine.
//!
//! Turns one search result page into N parallel language-enrichment calls
//! and merges them back into an index-aligned result set. An individual
//! failure degrades its own slot to the empty record; it never fails the
//! batch.

mod types;

// Re-export response types
pub use types::{LanguageBytes, RepoStats, RepoSummary};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::warn;
use tokio::sync::Semaphore;

use crate::github::{GitHubClient, GitHubResult};
use crate::runtime::AsyncTask;

/// Source of per-repository language byte counts.
///
/// The engine reaches upstream through this seam; tests substitute an
/// in-process stub.
pub trait LanguageSource: Send + Sync {
    fn languages(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<HashMap<String, u64>>>;
}

impl LanguageSource for GitHubClient {
    fn languages(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<HashMap<String, u64>>> {
        self.list_languages(owner, repo)
    }
}

/// Tuning knobs for one enrichment batch.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Maximum in-flight enrichment calls.
    pub concurrency_limit: usize,
    /// Deadline per enrichment call; expiry degrades the slot.
    pub enrich_timeout: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 10,
            enrich_timeout: Duration::from_secs(10),
        }
    }
}

/// Enrich every summary with its language breakdown, preserving input order.
///
/// The returned vector always has exactly the input length, and slot `i`
/// corresponds to input `i` regardless of completion order. A failed call
/// leaves the empty record in its slot. Returns only once every call has
/// completed or hit its deadline.
pub async fn enrich_repositories<S: LanguageSource>(
    source: &S,
    summaries: Vec<RepoSummary>,
    config: &EnrichConfig,
) -> Vec<RepoStats> {
    let total = summaries.len();
    if total == 0 {
        return Vec::new();
    }

    let limit = config.concurrency_limit.max(1);
    let semaphore = Arc::new(Semaphore::new(limit));

    let tasks = summaries.into_iter().enumerate().map(|(index, summary)| {
        let semaphore = semaphore.clone();
        async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!(
                        "enrichment semaphore closed, degrading {}",
                        summary.display_name()
                    );
                    return (index, RepoStats::default());
                }
            };

            let stats = enrich_one(source, summary, config.enrich_timeout).await;
            (index, stats)
        }
    });

    // Each index is written exactly once and read only after the stream is
    // drained, so the slots need no lock.
    let mut slots: Vec<Option<RepoStats>> = vec![None; total];

    let mut completed = stream::iter(tasks).buffer_unordered(limit);
    while let Some((index, stats)) = completed.next().await {
        slots[index] = Some(stats);
    }

    slots.into_iter().map(Option::unwrap_or_default).collect()
}

/// Fetch one repository's languages, degrading to the empty record on any
/// failure: missing coordinates, upstream error, lost task, or deadline.
async fn enrich_one<S: LanguageSource>(
    source: &S,
    summary: RepoSummary,
    deadline: Duration,
) -> RepoStats {
    let Some((owner, repo)) = summary.coordinates() else {
        warn!(
            "summary {} has no owner/name, skipping enrichment",
            summary.display_name()
        );
        return RepoStats::default();
    };

    let task = source.languages(owner, repo);
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(Ok(languages))) => RepoStats::new(summary, languages),
        Ok(Ok(Err(err))) => {
            warn!(
                "failed to fetch languages for {}: {err}",
                summary.display_name()
            );
            RepoStats::default()
        }
        Ok(Err(_)) => {
            warn!(
                "language task for {} was dropped before completing",
                summary.display_name()
            );
            RepoStats::default()
        }
        Err(_) => {
            warn!(
                "language fetch for {} timed out after {deadline:?}",
                summary.display_name()
            );
            RepoStats::default()
        }
    }
}
