// GitHub API module.
// Provides the caching client, endpoint accessors, and types for the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod response;
pub mod types;

pub use client::{GitHubClient, parse_rate_limit};
pub use response::ApiResult;
pub use types::*;
