// Repository statistics.
// Aggregators that combine endpoint results into derived records, falling back to
// static sample data whenever the live path is unavailable.

pub mod activity;
pub mod contributors;
pub mod fallback;
pub mod issues;
pub mod releases;
pub mod repository;

pub use activity::{ActivityStats, LanguageShare, LastCommit, TopContributor};
pub use contributors::{CONTRIBUTOR_LIMIT, ContributorStats};
pub use issues::{IssueStats, IssueSummary, LabelCount};
pub use releases::{LatestRelease, ReleaseStats};
pub use repository::RepositoryStats;

use serde::Serialize;
use tracing::warn;

use crate::github::{ApiResult, GitHubClient, RepoRef};

/// Aggregators for a single repository.
///
/// None of the aggregator methods fail: when the data they depend on cannot be
/// fetched they return the matching fallback dataset with `degraded` set.
#[derive(Debug)]
pub struct Insights {
    client: GitHubClient,
    repo: RepoRef,
}

/// Every aggregate for one repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub repository: ApiResult<RepositoryStats>,
    pub contributors: ApiResult<Vec<ContributorStats>>,
    pub issues: ApiResult<IssueStats>,
    pub activity: ApiResult<ActivityStats>,
    pub releases: ApiResult<ReleaseStats>,
}

impl InsightsReport {
    /// True if any aggregate is showing fallback data.
    pub fn is_degraded(&self) -> bool {
        self.repository.degraded
            || self.contributors.degraded
            || self.issues.degraded
            || self.activity.degraded
            || self.releases.degraded
    }
}

impl Insights {
    pub fn new(client: GitHubClient, repo: RepoRef) -> Self {
        Self { client, repo }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Run every aggregator concurrently.
    pub async fn report(&self) -> InsightsReport {
        let (repository, contributors, issues, activity, releases) = tokio::join!(
            self.repository_stats(),
            self.contributor_stats(),
            self.issue_stats(),
            self.activity_stats(),
            self.release_stats(),
        );

        InsightsReport {
            repository,
            contributors,
            issues,
            activity,
            releases,
        }
    }

    /// Substitute `fallback` for a failed aggregate and log why.
    fn degrade<T>(&self, aggregate: &str, error: Option<&str>, fallback: T) -> ApiResult<T> {
        warn!(
            repo = %self.repo,
            aggregate,
            error = error.unwrap_or("no data"),
            "falling back to sample data"
        );
        ApiResult::fallback(fallback)
    }
}

/// Data of a successful result, or the error that prevented it.
fn split<T>(result: ApiResult<T>) -> Result<T, Option<String>> {
    match result {
        ApiResult {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        other => Err(other.error),
    }
}
