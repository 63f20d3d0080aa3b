// GitHub API HTTP client.
// Handles caching, rate limit tracking, and request/response processing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::cache::{RequestOptions, RequestSignature, ResponseCache};
use crate::config::ClientConfig;
use crate::error::{InsightsError, Result};

use super::response::ApiResult;
use super::types::RateLimitInfo;

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Error body returned by GitHub on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// GitHub API client with response caching and rate limit tracking.
#[derive(Debug)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    cache: ResponseCache,
    rate_limit: Mutex<Option<RateLimitInfo>>,
    requests: AtomicU64,
}

impl GitHubClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| InsightsError::InvalidHeader(e.to_string()))?,
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| InsightsError::InvalidHeader(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            timeout: config.timeout,
            cache: ResponseCache::new(config.cache_ttl),
            rate_limit: Mutex::new(None),
            requests: AtomicU64::new(0),
        })
    }

    /// Create an anonymous client against the public GitHub API.
    pub fn anonymous() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Rate limit reported by the most recent live response, if any.
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live network requests issued so far.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetch `path` and decode it as `T`.
    ///
    /// Serves fresh cached payloads without touching the network. Never fails: every
    /// error is reported through the envelope.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let signature = RequestSignature::new(path, options);

        if let Some(cached) = self.cache.read_if_valid(&signature) {
            match serde_json::from_value(cached) {
                Ok(data) => {
                    debug!(%signature, "cache hit");
                    return ApiResult::ok(data, None);
                }
                Err(e) => debug!(%signature, error = %e, "cached payload no longer decodes"),
            }
        }

        debug!(%signature, "cache miss, requesting");
        let response = match self.send(&signature).await {
            Ok(response) => response,
            Err(e) => return ApiResult::failure(e.to_string(), None),
        };

        let rate_limit = parse_rate_limit(response.headers());
        self.update_rate_limit(rate_limit);

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| {
                    format!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                });
            debug!(%signature, status = status.as_u16(), %message, "request failed");
            return ApiResult::failure(message, Some(rate_limit));
        }

        match decode::<T>(response).await {
            Ok((raw, data)) => {
                self.cache.set(signature, raw);
                ApiResult::ok(data, Some(rate_limit))
            }
            Err(e) => ApiResult::failure(e.to_string(), None),
        }
    }

    /// Issue a single GET for the signature.
    async fn send(&self, signature: &RequestSignature) -> Result<Response> {
        let url = format!("{}{}", self.base_url, signature.path());
        let options = signature.options();

        let mut request = self
            .client
            .get(&url)
            .query(&options.query_pairs().collect::<Vec<_>>());
        for (name, value) in options.header_pairs() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| InsightsError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| InsightsError::InvalidHeader(e.to_string()))?;
            request = request.header(name, value);
        }

        self.requests.fetch_add(1, Ordering::Relaxed);
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                InsightsError::Timeout(self.timeout)
            } else {
                InsightsError::Api(e)
            }
        })
    }

    fn update_rate_limit(&self, rate_limit: RateLimitInfo) {
        *self
            .rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(rate_limit);
    }
}

/// Read the body as JSON, returning both the raw value and its typed form.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<(Value, T)> {
    let bytes = response.bytes().await?;
    let raw: Value = serde_json::from_slice(&bytes)?;
    let data = T::deserialize(&raw)?;
    Ok((raw, data))
}

/// Parse `x-ratelimit-*` headers, defaulting missing or malformed values.
pub fn parse_rate_limit(headers: &HeaderMap) -> RateLimitInfo {
    let defaults = RateLimitInfo::default();
    let header = |name: &str, default: u64| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    };

    RateLimitInfo {
        limit: header("x-ratelimit-limit", defaults.limit),
        remaining: header("x-ratelimit-remaining", defaults.remaining),
        reset: header("x-ratelimit-reset", defaults.reset),
        used: header("x-ratelimit-used", defaults.used),
    }
}
