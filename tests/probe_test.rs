//! Integration tests for the probe client against a real local HTTP server.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paste_link_prober::config::Config;
use paste_link_prober::probe::{self, HttpProbe, Liveness, ProbeClient, ProbeError};
use paste_link_prober::report::NullSink;
use paste_link_prober::services::ServiceExtractor;

fn test_client() -> ProbeClient {
    ProbeClient::new(&Config::for_testing()).expect("Failed to create probe client")
}

#[tokio::test]
async fn test_status_200_is_alive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/AbCdEfGh"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client();
    let liveness = probe::check(&client, &format!("{}/a/AbCdEfGh", server.uri()))
        .await
        .expect("probe should succeed");
    assert_eq!(liveness, Liveness::Alive);
}

#[tokio::test]
async fn test_non_success_status_is_dead() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/boom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client();
    let gone = probe::check(&client, &format!("{}/gone", server.uri()))
        .await
        .expect("probe should succeed");
    assert_eq!(gone, Liveness::Dead);

    let boom = probe::check(&client, &format!("{}/boom", server.uri()))
        .await
        .expect("probe should succeed");
    assert_eq!(boom, Liveness::Dead);
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let client = test_client();

    // Nothing listens on port 1.
    let result = client.get_status("http://127.0.0.1:1/a/AbCdEfGh").await;
    assert!(matches!(result, Err(ProbeError::Transport { .. })));
}

#[tokio::test]
async fn test_malformed_url_is_rejected_before_any_request() {
    let client = test_client();

    let result = client.get_status("not a url").await;
    assert!(matches!(result, Err(ProbeError::InvalidUrl { .. })));
}

#[tokio::test]
async fn test_timeout_cancels_the_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = Config {
        probe_timeout: Duration::from_millis(250),
        ..Config::for_testing()
    };
    let client = ProbeClient::new(&config).expect("Failed to create probe client");

    let result = client.get_status(&format!("{}/slow", server.uri())).await;
    assert!(matches!(result, Err(ProbeError::Transport { .. })));
}

/// Service whose pattern points at the mock server, so the whole delegate
/// pipeline can run against real HTTP.
struct LocalService {
    pattern: Regex,
}

impl LocalService {
    fn new(base: &str) -> Self {
        let pattern = Regex::new(&format!(r"{}/a/[a-zA-Z0-9]{{8}}", regex::escape(base)))
            .expect("fixed pattern");
        Self { pattern }
    }
}

#[async_trait]
impl ServiceExtractor for LocalService {
    fn service_id(&self) -> &'static str {
        "local"
    }

    fn link_pattern(&self) -> &Regex {
        &self.pattern
    }
}

#[tokio::test]
async fn test_delegate_through_real_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/AliveOne"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a/DeadLink"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base = server.uri();
    let text = format!("first {base}/a/AliveOne then {base}/a/DeadLink done");

    let service = LocalService::new(&base);
    let client = test_client();

    let links = service
        .delegate(&client, &NullSink, &text)
        .await
        .expect("delegate should not error");

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].service, "local");
    assert_eq!(links[0].url, format!("{base}/a/AliveOne"));
}
