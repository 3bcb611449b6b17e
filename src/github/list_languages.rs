//! GitHub repository language listing operation.

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::collections::HashMap;
use std::sync::Arc;

/// Fetch language byte counts for a repository.
///
/// Calls `/repos/{owner}/{repo}/languages`, which octocrab has no typed
/// handler for. The response maps language name to bytes of source in that
/// language; an empty map means no detected source.
pub(crate) fn list_languages(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<GitHubResult<HashMap<String, u64>>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let url = format!("/repos/{owner}/{repo}/languages");
        let languages: HashMap<String, u64> = inner
            .get(url, None::<&()>)
            .await
            .map_err(GitHubError::classify)?;
        Ok(languages)
    })
}
