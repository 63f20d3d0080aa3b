// repo-insights library.
// Cached, rate-limit aware GitHub repository statistics with static fallbacks.

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod stats;

pub use config::ClientConfig;
pub use error::{InsightsError, Result};
pub use github::{ApiResult, GitHubClient, RateLimitInfo, RepoRef};
pub use stats::{Insights, InsightsReport};
