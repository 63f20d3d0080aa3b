// Contributor stats aggregator.
// Enriches the top of the contributors list with profile details, one user at a time.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::github::{ApiResult, Contributor, ContributorCodeStats, User};

use super::{Insights, fallback, split};

/// How many contributors get a profile lookup.
pub const CONTRIBUTOR_LIMIT: usize = 10;

/// A contributor with whatever profile and code data could be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorStats {
    pub login: String,
    pub avatar_url: String,
    pub html_url: Option<String>,
    pub contributions: u64,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<u64>,
    pub public_repos: Option<u64>,
}

/// Totals taken from `/stats/contributors` for one author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CodeTotals {
    commits: u64,
    additions: u64,
    deletions: u64,
}

impl ContributorStats {
    /// Record built from the list entry alone.
    pub fn partial(contributor: &Contributor) -> Self {
        Self {
            login: contributor.login.clone(),
            avatar_url: contributor.avatar_url.clone(),
            html_url: contributor.html_url.clone(),
            contributions: contributor.contributions,
            commits: contributor.contributions,
            additions: 0,
            deletions: 0,
            name: None,
            company: None,
            location: None,
            bio: None,
            followers: None,
            public_repos: None,
        }
    }

    fn enriched(contributor: &Contributor, user: User, code: Option<CodeTotals>) -> Self {
        let mut stats = Self::partial(contributor);
        if let Some(code) = code {
            stats.commits = code.commits;
            stats.additions = code.additions;
            stats.deletions = code.deletions;
        }
        stats.html_url = user.html_url.or(stats.html_url);
        stats.name = user.name;
        stats.company = user.company;
        stats.location = user.location;
        stats.bio = user.bio;
        stats.followers = Some(user.followers);
        stats.public_repos = Some(user.public_repos);
        stats
    }
}

fn code_totals(stats: Vec<ContributorCodeStats>) -> HashMap<String, CodeTotals> {
    stats
        .into_iter()
        .filter_map(|s| {
            let totals = CodeTotals {
                commits: s.total,
                additions: s.additions(),
                deletions: s.deletions(),
            };
            s.author.map(|a| (a.login, totals))
        })
        .collect()
}

impl Insights {
    /// Top contributors with profile enrichment.
    ///
    /// Profile lookups run sequentially over at most [`CONTRIBUTOR_LIMIT`] users. A
    /// failed lookup degrades only that contributor to [`ContributorStats::partial`].
    pub async fn contributor_stats(&self) -> ApiResult<Vec<ContributorStats>> {
        let contributors = match split(self.client.contributors(&self.repo).await) {
            Ok(list) => list,
            Err(error) => {
                return self.degrade(
                    "contributors",
                    error.as_deref(),
                    fallback::contributor_stats(),
                );
            }
        };

        let code = self
            .client
            .contributor_code_stats(&self.repo)
            .await
            .into_data()
            .map(code_totals)
            .unwrap_or_default();

        let mut stats = Vec::with_capacity(contributors.len().min(CONTRIBUTOR_LIMIT));
        for contributor in contributors.iter().take(CONTRIBUTOR_LIMIT) {
            match split(self.client.user(&contributor.login).await) {
                Ok(user) => {
                    let totals = code.get(&contributor.login).copied();
                    stats.push(ContributorStats::enriched(contributor, user, totals));
                }
                Err(error) => {
                    warn!(
                        login = %contributor.login,
                        error = error.as_deref().unwrap_or("no data"),
                        "profile lookup failed, using list data"
                    );
                    stats.push(ContributorStats::partial(contributor));
                }
            }
        }

        debug!(repo = %self.repo, count = stats.len(), "contributor stats ready");
        ApiResult::ok(stats, None)
    }
}
