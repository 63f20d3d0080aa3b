// Error types for repo-insights.
// Covers client construction, argument parsing, and GitHub API failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Invalid repository '{0}', expected owner/name")]
    InvalidRepo(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),
}

pub type Result<T> = std::result::Result<T, InsightsError>;
