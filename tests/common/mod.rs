// Shared fixtures for the wiremock integration tests.

#![allow(dead_code)]

use std::time::Duration;

use repo_insights::{ClientConfig, GitHubClient, Insights, RepoRef};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const OWNER: &str = "acme";
pub const NAME: &str = "widget";

pub fn repo() -> RepoRef {
    RepoRef::new(OWNER, NAME)
}

pub fn repo_path(suffix: &str) -> String {
    format!("/repos/{OWNER}/{NAME}{suffix}")
}

pub fn client(server: &MockServer) -> GitHubClient {
    client_with_ttl(server, Duration::from_secs(300))
}

pub fn client_with_ttl(server: &MockServer, ttl: Duration) -> GitHubClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_cache_ttl(ttl)
        .with_timeout(Duration::from_secs(5));
    GitHubClient::new(config).expect("client builds")
}

pub fn insights(server: &MockServer) -> Insights {
    Insights::new(client(server), repo())
}

pub fn repository_json() -> Value {
    json!({
        "id": 1,
        "name": NAME,
        "full_name": format!("{OWNER}/{NAME}"),
        "owner": {"id": 2, "login": OWNER, "type": "Organization", "avatar_url": null},
        "description": "Widgets for everyone",
        "html_url": format!("https://github.com/{OWNER}/{NAME}"),
        "stargazers_count": 321,
        "forks_count": 12,
        "watchers_count": 321,
        "subscribers_count": 17,
        "open_issues_count": 5,
        "size": 4096,
        "language": "Rust",
        "license": {"key": "apache-2.0", "name": "Apache License 2.0", "spdx_id": "Apache-2.0"},
        "topics": ["widgets"],
        "default_branch": "main",
        "created_at": "2022-01-01T00:00:00Z",
        "updated_at": "2024-05-01T00:00:00Z",
        "pushed_at": "2024-05-02T00:00:00Z"
    })
}

pub fn contributor_json(login: &str, contributions: u64) -> Value {
    json!({
        "login": login,
        "id": contributions,
        "avatar_url": format!("https://avatars.example/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "contributions": contributions
    })
}

pub fn contributors_json(count: u64) -> Value {
    Value::Array(
        (0..count)
            .map(|i| contributor_json(&format!("user{i}"), 100 - i))
            .collect(),
    )
}

pub fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 9,
        "avatar_url": format!("https://avatars.example/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "name": format!("Name of {login}"),
        "company": null,
        "blog": null,
        "location": "Earth",
        "bio": null,
        "public_repos": 3,
        "followers": 42,
        "following": 1
    })
}

pub fn commit_json(sha: &str, message: &str, date: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": message,
            "author": {"name": "Mona Lisa", "email": "mona@example.com", "date": date},
            "committer": null
        },
        "author": null,
        "html_url": format!("https://github.com/{OWNER}/{NAME}/commit/{sha}")
    })
}

pub fn activity_json(totals: &[u64]) -> Value {
    Value::Array(
        totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                json!({
                    "total": total,
                    "week": 1_700_000_000 + i as i64 * 604_800,
                    "days": [0, 0, 0, 0, 0, 0, 0]
                })
            })
            .collect(),
    )
}

pub fn issue_json(number: u64, state: &str, labels: &[&str]) -> Value {
    json!({
        "id": number,
        "number": number,
        "title": format!("Issue {number}"),
        "state": state,
        "labels": labels.iter().map(|l| json!({"name": l, "color": "ededed"})).collect::<Vec<_>>(),
        "user": null,
        "comments": 0,
        "html_url": format!("https://github.com/{OWNER}/{NAME}/issues/{number}"),
        "created_at": format!("2024-01-{:02}T00:00:00Z", number),
        "updated_at": "2024-02-01T00:00:00Z",
        "closed_at": null
    })
}
