// Activity stats aggregator.
// Combines commit activity, commits, contributors and languages fetched concurrently.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::github::{ApiResult, Commit, CommitActivity, Contributor, Languages};

use super::{Insights, fallback};

/// Number of trailing weekly buckets summed for the monthly figure.
const WEEKS_PER_MONTH: usize = 4;
/// Contributors listed in [`ActivityStats::top_contributors`].
const TOP_CONTRIBUTORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopContributor {
    pub login: String,
    pub contributions: u64,
    pub avatar_url: String,
}

/// Newest commit; every field is empty when there are no commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LastCommit {
    pub sha: String,
    pub message: String,
    pub author: String,
    /// RFC 3339 author date.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub bytes: u64,
    /// Share of all bytes, rounded to one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityStats {
    pub total_commits: u64,
    pub weekly_commits: u64,
    pub monthly_commits: u64,
    pub top_contributors: Vec<TopContributor>,
    pub last_commit: LastCommit,
    pub languages: Vec<LanguageShare>,
}

/// Commits in the most recent week bucket.
pub fn weekly_commits(buckets: &[CommitActivity]) -> u64 {
    buckets.last().map_or(0, |week| week.total)
}

/// Commits across the last four week buckets.
pub fn monthly_commits(buckets: &[CommitActivity]) -> u64 {
    let start = buckets.len().saturating_sub(WEEKS_PER_MONTH);
    buckets[start..].iter().map(|week| week.total).sum()
}

pub fn top_contributors(contributors: &[Contributor]) -> Vec<TopContributor> {
    contributors
        .iter()
        .take(TOP_CONTRIBUTORS)
        .map(|c| TopContributor {
            login: c.login.clone(),
            contributions: c.contributions,
            avatar_url: c.avatar_url.clone(),
        })
        .collect()
}

pub fn last_commit(commits: &[Commit]) -> LastCommit {
    let Some(commit) = commits.first() else {
        return LastCommit::default();
    };
    let author = commit.commit.author.as_ref();

    LastCommit {
        sha: commit.sha.clone(),
        message: commit.commit.message.clone(),
        author: author.map(|a| a.name.clone()).unwrap_or_default(),
        date: author
            .map(|a| a.date.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
    }
}

/// Languages by share of bytes, largest first.
pub fn language_shares(languages: &Languages) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();
    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(name, &bytes)| LanguageShare {
            name: name.clone(),
            bytes,
            percentage: if total == 0 {
                0.0
            } else {
                (bytes as f64 * 1000.0 / total as f64).round() / 10.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    shares
}

pub fn summarize_activity(
    buckets: &[CommitActivity],
    commits: &[Commit],
    contributors: &[Contributor],
    languages: &Languages,
) -> ActivityStats {
    ActivityStats {
        total_commits: commits.len() as u64,
        weekly_commits: weekly_commits(buckets),
        monthly_commits: monthly_commits(buckets),
        top_contributors: top_contributors(contributors),
        last_commit: last_commit(commits),
        languages: language_shares(languages),
    }
}

impl Insights {
    /// Commit cadence, top contributors, last commit and language mix.
    ///
    /// Commit activity and the commit list must both succeed; otherwise the whole
    /// fallback is returned so weekly and monthly figures stay consistent.
    /// Contributors and languages are optional and come back empty on failure.
    pub async fn activity_stats(&self) -> ApiResult<ActivityStats> {
        let (buckets, commits, contributors, languages) = tokio::join!(
            self.client.commit_activity(&self.repo),
            self.client.commits(&self.repo),
            self.client.contributors(&self.repo),
            self.client.languages(&self.repo),
        );

        let error = buckets.error.clone().or_else(|| commits.error.clone());
        let (Some(buckets), Some(commits)) = (buckets.into_data(), commits.into_data()) else {
            return self.degrade("activity", error.as_deref(), fallback::activity_stats());
        };

        let contributors = contributors.into_data().unwrap_or_default();
        let languages = languages.into_data().unwrap_or_default();

        ApiResult::ok(
            summarize_activity(&buckets, &commits, &contributors, &languages),
            None,
        )
    }
}
