// Uniform result envelope returned by the fetch wrapper, accessors and aggregators.

use serde::Serialize;

use super::types::RateLimitInfo;

/// Outcome of an API call. Check `success` before trusting `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResult<T> {
    pub data: Option<T>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimitInfo>,
    /// Set when `data` is substituted sample data rather than a live result.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T, rate_limit: Option<RateLimitInfo>) -> Self {
        Self {
            data: Some(data),
            success: true,
            error: None,
            rate_limit,
            degraded: false,
        }
    }

    pub fn failure(error: impl Into<String>, rate_limit: Option<RateLimitInfo>) -> Self {
        Self {
            data: None,
            success: false,
            error: Some(error.into()),
            rate_limit,
            degraded: false,
        }
    }

    /// Successful envelope around fallback data.
    pub fn fallback(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            error: None,
            rate_limit: None,
            degraded: true,
        }
    }

    /// `data` when the call succeeded, `None` otherwise.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
