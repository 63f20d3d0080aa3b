// Release stats aggregator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::{ApiResult, Release};

use super::{Insights, fallback, split};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestRelease {
    pub tag: String,
    pub name: String,
    pub html_url: String,
    pub prerelease: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseStats {
    /// Published releases on the first page.
    pub total: u64,
    pub prereleases: u64,
    pub latest: Option<LatestRelease>,
}

pub fn summarize_releases(releases: &[Release]) -> ReleaseStats {
    let published: Vec<&Release> = releases.iter().filter(|r| !r.draft).collect();

    ReleaseStats {
        total: published.len() as u64,
        prereleases: published.iter().filter(|r| r.prerelease).count() as u64,
        latest: published.first().map(|r| LatestRelease {
            tag: r.tag_name.clone(),
            name: r.name.clone().unwrap_or_else(|| r.tag_name.clone()),
            html_url: r.html_url.clone(),
            prerelease: r.prerelease,
            published_at: r.published_at,
        }),
    }
}

impl Insights {
    /// Summary of the ten most recent releases.
    pub async fn release_stats(&self) -> ApiResult<ReleaseStats> {
        match split(self.client.releases(&self.repo).await) {
            Ok(releases) => ApiResult::ok(summarize_releases(&releases), None),
            Err(error) => self.degrade("releases", error.as_deref(), fallback::release_stats()),
        }
    }
}
