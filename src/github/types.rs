// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InsightsError;

/// Repository coordinates, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// API path prefix for this repository.
    pub fn api_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(InsightsError::InvalidRepo(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Owner type discriminator (user or organization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnerType {
    #[default]
    User,
    Organization,
    Bot,
    #[serde(other)]
    Unknown,
}

/// GitHub user or organization, as embedded in other objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,
    #[serde(rename = "type", default)]
    pub owner_type: OwnerType,
    pub avatar_url: Option<String>,
}

/// Repository license summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
}

/// GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    /// Real watcher count; `watchers_count` mirrors stars on GitHub.
    #[serde(default)]
    pub subscribers_count: Option<u64>,
    pub open_issues_count: u64,
    /// Size in kilobytes.
    pub size: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub default_branch: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Entry of the contributors list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: Option<String>,
    pub contributions: u64,
}

/// Public user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// Issue state: open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Issue label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: Option<String>,
}

/// GitHub issue. Pull requests show up here too, flagged by `pull_request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub user: Option<Owner>,
    #[serde(default)]
    pub comments: u64,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub pull_request: Option<serde_json::Value>,
}

/// Git author or committer signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitActor {
    pub name: String,
    pub email: Option<String>,
    pub date: DateTime<Utc>,
}

/// Git-level commit data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<GitActor>,
    pub committer: Option<GitActor>,
}

/// Entry of the commits list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
    /// Linked GitHub account, absent for unknown emails.
    pub author: Option<Owner>,
    pub html_url: String,
}

/// One week of the commit-activity series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitActivity {
    pub total: u64,
    /// Unix timestamp of the start of the week.
    pub week: i64,
    #[serde(default)]
    pub days: Vec<u64>,
}

/// Language name to bytes of code.
pub type Languages = BTreeMap<String, u64>;

/// GitHub release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Weekly additions, deletions and commits of one author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCodeStats {
    pub w: i64,
    pub a: u64,
    pub d: u64,
    pub c: u64,
}

/// Per-author entry of `/stats/contributors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorCodeStats {
    pub author: Option<Owner>,
    pub total: u64,
    #[serde(default)]
    pub weeks: Vec<WeeklyCodeStats>,
}

impl ContributorCodeStats {
    pub fn additions(&self) -> u64 {
        self.weeks.iter().map(|w| w.a).sum()
    }

    pub fn deletions(&self) -> u64 {
        self.weeks.iter().map(|w| w.d).sum()
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp when the window resets.
    pub reset: u64,
    pub used: u64,
}

impl Default for RateLimitInfo {
    /// Unauthenticated GitHub quota.
    fn default() -> Self {
        Self {
            limit: 60,
            remaining: 60,
            reset: 0,
            used: 0,
        }
    }
}

impl RateLimitInfo {
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
