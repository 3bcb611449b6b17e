//! Request handlers and response assembly.
//!
//! The listing handlers share one shape: translate the query string into a
//! filter fragment, run the search bounded to a creation-time cutoff taken
//! at request time, then assemble the page. Only search and encode failures
//! surface as server errors; everything else degrades.

use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use log::{error, info, warn};
use octocrab::models::Repository;
use serde::Serialize;
use serde_json::json;

use crate::filter::search_fragment;
use crate::server::AppState;
use crate::stats::{RepoSummary, enrich_repositories};

/// GET /ping - liveness probe.
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}

/// GET /repos - raw search results for the given filter.
pub async fn list_repos(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let fragment = request_fragment(query.as_deref());

    let repos = match fetch_page(&state, &fragment).await {
        Ok(repos) => repos,
        Err(response) => return response,
    };

    respond_with_page(&repos)
}

/// GET /stats - search results enriched with per-repository language byte
/// counts, index-aligned with the search page.
pub async fn repo_stats(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let fragment = request_fragment(query.as_deref());

    let repos = match fetch_page(&state, &fragment).await {
        Ok(repos) => repos,
        Err(response) => return response,
    };

    // No enrichment is launched for an empty page.
    if repos.is_empty() {
        return no_results();
    }

    let summaries: Vec<RepoSummary> = repos.iter().map(RepoSummary::from).collect();
    let stats = enrich_repositories(&state.client, summaries, &state.config.enrich).await;

    respond_with_page(&stats)
}

/// Translate the raw request query into the upstream filter fragment.
fn request_fragment(raw: Option<&str>) -> String {
    let fragment = search_fragment(raw.unwrap_or(""));
    if fragment.is_empty() {
        warn!("no usable filters provided");
    } else {
        info!("applying filter: {fragment}");
    }
    fragment
}

/// Run the bounded repository search, mapping failure to the 500 response.
async fn fetch_page(state: &AppState, fragment: &str) -> Result<Vec<Repository>, Response> {
    let task = state.client.search_repositories(
        fragment,
        Utc::now(),
        state.config.page_size,
        state.config.search_timeout,
    );

    match task.await {
        Ok(Ok(repos)) => Ok(repos),
        Ok(Err(err)) => {
            error!("failed to fetch repositories: {err}");
            Err(upstream_failure())
        }
        Err(_) => {
            error!("repository search task was dropped before completing");
            Err(upstream_failure())
        }
    }
}

/// Serialize a result page, mapping an empty page to 404 and an encode
/// failure to 500. The body is encoded up front so no partial document is
/// ever emitted.
fn respond_with_page<T: Serialize>(items: &[T]) -> Response {
    if items.is_empty() {
        return no_results();
    }

    match serde_json::to_vec(items) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!("failed to encode response body: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode repositories",
            )
                .into_response()
        }
    }
}

fn no_results() -> Response {
    warn!("search returned no repositories");
    (StatusCode::NOT_FOUND, "No repositories found").into_response()
}

fn upstream_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch repositories").into_response()
}
