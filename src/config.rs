//! Process configuration loaded from the environment.

use std::time::Duration;

use crate::stats::EnrichConfig;

/// Service configuration with environment overrides.
///
/// Absent or unparsable variables fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Personal access token; absent means unauthenticated.
    pub github_token: Option<String>,
    /// Override for the upstream API base URI (GitHub Enterprise).
    pub github_base_uri: Option<String>,
    /// Search result page size; only the first page is ever fetched.
    pub page_size: u8,
    /// Deadline for the upstream search call.
    pub search_timeout: Duration,
    /// Fan-out tuning for the aggregation engine.
    pub enrich: EnrichConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            github_token: None,
            github_base_uri: None,
            page_size: 100, // upstream search API maximum
            search_timeout: Duration::from_secs(10),
            enrich: EnrichConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("REPOSTATS_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                config.port = p;
            }
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                config.github_token = Some(token);
            }
        }
        if let Ok(uri) = std::env::var("GITHUB_BASE_URI") {
            config.github_base_uri = Some(uri);
        }
        if let Ok(val) = std::env::var("REPOSTATS_PAGE_SIZE") {
            if let Ok(v) = val.parse() {
                config.page_size = v;
            }
        }
        if let Ok(val) = std::env::var("REPOSTATS_SEARCH_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.search_timeout = Duration::from_secs(v);
            }
        }
        if let Ok(val) = std::env::var("REPOSTATS_CONCURRENCY_LIMIT") {
            if let Ok(v) = val.parse() {
                config.enrich.concurrency_limit = v;
            }
        }
        if let Ok(val) = std::env::var("REPOSTATS_ENRICH_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.enrich.enrich_timeout = Duration::from_secs(v);
            }
        }

        config
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
