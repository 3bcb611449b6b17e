//! Response types for enriched repository statistics.

use octocrab::models::Repository;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Byte count for a single language within a repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBytes {
    pub bytes: u64,
}

/// Identity of one repository taken from a search result page.
///
/// Every field is optional; upstream omits them freely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub full_name: Option<String>,
    pub owner: Option<String>,
    pub repository: Option<String>,
}

impl RepoSummary {
    /// Owner login and repository name, when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        match (self.owner.as_deref(), self.repository.as_deref()) {
            (Some(owner), Some(repo)) => Some((owner, repo)),
            _ => None,
        }
    }

    /// Best-effort name for log lines.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("<unknown>")
    }
}

impl From<&Repository> for RepoSummary {
    fn from(repo: &Repository) -> Self {
        Self {
            full_name: repo.full_name.clone(),
            owner: repo.owner.as_ref().map(|owner| owner.login.clone()),
            repository: Some(repo.name.clone()),
        }
    }
}

/// One repository enriched with its language byte counts.
///
/// `Default` is the all-absent record a failed enrichment degrades to;
/// absent fields are omitted from the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub languages: HashMap<String, LanguageBytes>,
}

impl RepoStats {
    /// Combine a search summary with its language breakdown.
    #[must_use]
    pub fn new(summary: RepoSummary, languages: HashMap<String, u64>) -> Self {
        Self {
            full_name: summary.full_name,
            owner: summary.owner,
            repository: summary.repository,
            languages: languages
                .into_iter()
                .map(|(name, bytes)| (name, LanguageBytes { bytes }))
                .collect(),
        }
    }
}
