// Client configuration.
// Base URL, identification, authentication, and timing knobs for the GitHub client.

use std::time::Duration;

use crate::cache::DEFAULT_TTL;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "repo-insights";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const TOKEN_VAR: &str = "GITHUB_TOKEN";
const BASE_URL_VAR: &str = "REPO_INSIGHTS_API_URL";

/// Settings used to build a [`GitHubClient`](crate::github::GitHubClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Requests are anonymous when unset.
    pub token: Option<String>,
    /// Upper bound on a single live request.
    pub timeout: Duration,
    /// Freshness window of the response cache.
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_TTL,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `GITHUB_TOKEN` and `REPO_INSIGHTS_API_URL` when present.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(token) = std::env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty()) {
            config.token = Some(token);
        }
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
