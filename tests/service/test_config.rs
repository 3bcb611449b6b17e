//! Tests for configuration defaults.

use std::time::Duration;

use repostats::ServiceConfig;

#[test]
fn defaults_match_service_contract() {
    let config = ServiceConfig::default();

    assert_eq!(config.port, 8080);
    assert_eq!(config.page_size, 100);
    assert_eq!(config.search_timeout, Duration::from_secs(10));
    assert_eq!(config.enrich.concurrency_limit, 10);
    assert_eq!(config.enrich.enrich_timeout, Duration::from_secs(10));
    assert!(config.github_token.is_none());
    assert!(config.github_base_uri.is_none());
}

#[test]
fn listen_addr_joins_host_and_port() {
    let config = ServiceConfig {
        port: 9999,
        ..Default::default()
    };
    assert_eq!(config.listen_addr(), "0.0.0.0:9999");
}
