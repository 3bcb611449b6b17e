// Repository statistics aggregation server.
//
// Serves /ping, /repos and /stats over HTTP. The GitHub client is built
// once at startup and shared read-only across requests.

use anyhow::Result;
use log::info;

use repostats::config::ServiceConfig;
use repostats::github::GitHubClient;
use repostats::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::from_env();

    let mut builder = GitHubClient::builder();
    if let Some(token) = &config.github_token {
        builder = builder.personal_token(token.clone());
    } else {
        info!("no GITHUB_TOKEN set, running unauthenticated with shared rate limits");
    }
    if let Some(uri) = &config.github_base_uri {
        builder = builder.base_uri(uri.clone());
    }
    let client = builder.build()?;

    let addr = config.listen_addr();
    let app = server::router(AppState { client, config });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
