//! HTTP surface: route table and shared application state.

pub mod handlers;

use axum::Router;
use axum::routing::get;

use crate::config::ServiceConfig;
use crate::github::GitHubClient;

/// Shared per-process state handed to every handler.
///
/// The client is immutable after construction; state cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub client: GitHubClient,
    pub config: ServiceConfig,
}

/// Build the service router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/repos", get(handlers::list_repos))
        .route("/stats", get(handlers::repo_stats))
        .with_state(state)
}
