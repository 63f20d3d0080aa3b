// Repository stats aggregator.
// Straight projection of the repository metadata object.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::{ApiResult, Repository};

use super::{Insights, fallback, split};

/// Headline numbers for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStats {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    /// Size in kilobytes.
    pub size: u64,
    pub language: Option<String>,
    pub license: Option<String>,
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl From<Repository> for RepositoryStats {
    fn from(repo: Repository) -> Self {
        Self {
            watchers: repo.subscribers_count.unwrap_or(repo.watchers_count),
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            html_url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            size: repo.size,
            language: repo.language,
            license: repo.license.map(|l| l.name),
            topics: repo.topics,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            pushed_at: repo.pushed_at,
        }
    }
}

impl Insights {
    /// Repository metadata projected to [`RepositoryStats`].
    pub async fn repository_stats(&self) -> ApiResult<RepositoryStats> {
        match split(self.client.repository(&self.repo).await) {
            Ok(repo) => ApiResult::ok(RepositoryStats::from(repo), None),
            Err(error) => self.degrade(
                "repository",
                error.as_deref(),
                fallback::repository_stats(),
            ),
        }
    }
}
