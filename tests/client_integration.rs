//! Integration tests for the caching fetch wrapper against a wiremock server

mod common;

use std::time::Duration;

use repo_insights::cache::RequestOptions;
use repo_insights::github::{Repository, User};
use repo_insights::{ClientConfig, GitHubClient, RateLimitInfo};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, client_with_ttl, insights, repo, repo_path, repository_json};

fn rate_limited(template: ResponseTemplate) -> ResponseTemplate {
    template
        .insert_header("x-ratelimit-limit", "60")
        .insert_header("x-ratelimit-remaining", "57")
        .insert_header("x-ratelimit-reset", "1717200000")
        .insert_header("x-ratelimit-used", "3")
}

#[tokio::test]
async fn test_success_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(rate_limited(
            ResponseTemplate::new(200).set_body_json(repository_json()),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let first = client.repository(&repo()).await;
    assert!(first.success);
    assert_eq!(first.data.as_ref().map(|r| r.stargazers_count), Some(321));
    assert_eq!(
        first.rate_limit,
        Some(RateLimitInfo {
            limit: 60,
            remaining: 57,
            reset: 1_717_200_000,
            used: 3,
        })
    );

    let second = client.repository(&repo()).await;
    assert!(second.success);
    assert!(second.rate_limit.is_none(), "cache hits carry no rate limit");
    assert_eq!(second.data.map(|r| r.full_name), Some("acme/widget".to_string()));

    assert_eq!(client.request_count(), 1);
    assert_eq!(client.cache().len(), 1);
    assert_eq!(client.rate_limit().map(|r| r.remaining), Some(57));
}

#[tokio::test]
async fn test_error_message_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(rate_limited(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for 127.0.0.1.",
            "documentation_url": "https://docs.github.com/rest"
        }))))
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.repository(&repo()).await;

    assert!(!result.success);
    assert!(result.data.is_none());
    assert_eq!(
        result.error.as_deref(),
        Some("API rate limit exceeded for 127.0.0.1.")
    );
    assert_eq!(result.rate_limit.map(|r| r.used), Some(3));
    assert!(client.cache().is_empty(), "failures are not cached");
}

#[tokio::test]
async fn test_error_message_synthesized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client(&server).repository(&repo()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("HTTP 502: Bad Gateway"));
    // No headers at all, so every field takes its default
    assert_eq!(result.rate_limit, Some(RateLimitInfo::default()));
}

#[tokio::test]
async fn test_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.repository(&repo()).await;

    assert!(!result.success);
    assert!(result.error.is_some());
    assert!(result.rate_limit.is_none());
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on port 1
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(2));
    let client = GitHubClient::new(config).unwrap();
    let result = client.user("octocat").await;

    assert!(!result.success);
    assert!(result.data.is_none());
    assert!(result.error.is_some());
}

#[tokio::test]
async fn test_timeout_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::user_json("slow"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = GitHubClient::new(config).unwrap();

    let result: repo_insights::ApiResult<User> = client.user("slow").await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_query_and_extra_headers_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("/issues")))
        .and(query_param("state", "all"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/custom"))
        .and(header("x-trace", "abc"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let issues = client.issues(&repo()).await;
    assert!(issues.success);
    assert_eq!(issues.data.map(|v| v.len()), Some(0));

    let options = RequestOptions::new()
        .header("X-Trace", "abc")
        .header("Accept", "text/plain");
    let custom: repo_insights::ApiResult<serde_json::Value> =
        client.fetch("/custom", options).await;
    assert!(custom.success);
}

#[tokio::test]
async fn test_equivalent_options_share_cache_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let a = RequestOptions::new().query("q", "rust").query("page", 2);
    let b = RequestOptions::new().query("page", "2").query("q", "rust");

    let first: repo_insights::ApiResult<Vec<u32>> = client.fetch("/search", a).await;
    let second: repo_insights::ApiResult<Vec<u32>> = client.fetch("/search", b).await;

    assert_eq!(first.data, Some(vec![1, 2]));
    assert_eq!(second.data, Some(vec![1, 2]));
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_repository_stats_cache_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_json()))
        .mount(&server)
        .await;

    let insights = repo_insights::Insights::new(
        client_with_ttl(&server, Duration::from_secs(60)),
        repo(),
    );

    let first = insights.repository_stats().await;
    let second = insights.repository_stats().await;
    assert_eq!(insights.client().request_count(), 1);
    assert_eq!(first.data, second.data);
    assert!(!first.degraded);

    // Step the clock past the window without sleeping; resume so reqwest timers run normally
    tokio::time::pause();
    tokio::time::advance(Duration::from_secs(61)).await;
    tokio::time::resume();

    let third = insights.repository_stats().await;
    assert!(third.success);
    assert_eq!(insights.client().request_count(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_typed_decode_of_cached_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_json()))
        .mount(&server)
        .await;

    let insights = insights(&server);
    let raw: repo_insights::ApiResult<Repository> = insights.client().repository(&repo()).await;
    assert!(raw.success);

    let stats = insights.repository_stats().await;
    let stats = stats.data.unwrap();
    assert_eq!(stats.watchers, 17);
    assert_eq!(stats.license.as_deref(), Some("Apache License 2.0"));
    assert_eq!(insights.client().request_count(), 1);
}
