// Issue stats aggregator.
// Open/closed partition and label histogram over the first page of issues.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::{ApiResult, Issue, IssueState};

use super::{Insights, fallback, split};

/// Number of issues kept in [`IssueStats::recent`].
const RECENT_ISSUES: usize = 5;

/// Occurrences of one label across all issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub name: String,
    pub count: u64,
}

/// Short form of an issue for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueStats {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
    /// Entries that are pull requests rather than plain issues.
    pub pull_requests: u64,
    /// Most used labels first.
    pub labels: Vec<LabelCount>,
    pub recent: Vec<IssueSummary>,
}

impl From<&Issue> for IssueSummary {
    fn from(issue: &Issue) -> Self {
        Self {
            number: issue.number,
            title: issue.title.clone(),
            state: issue.state,
            html_url: issue.html_url.clone(),
            created_at: issue.created_at,
        }
    }
}

/// Count every label occurrence, most frequent first.
///
/// Labels with equal counts stay in the order they were first seen.
pub fn label_histogram(issues: &[Issue]) -> Vec<LabelCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for label in issues.iter().flat_map(|issue| &issue.labels) {
        match index.get(label.name.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                let _ = index.insert(&label.name, counts.len());
                counts.push(LabelCount {
                    name: label.name.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order for ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn summarize_issues(issues: &[Issue]) -> IssueStats {
    let open = issues
        .iter()
        .filter(|issue| issue.state == IssueState::Open)
        .count() as u64;
    let total = issues.len() as u64;

    let mut by_age: Vec<&Issue> = issues.iter().collect();
    by_age.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    IssueStats {
        total,
        open,
        closed: total - open,
        pull_requests: issues.iter().filter(|i| i.pull_request.is_some()).count() as u64,
        labels: label_histogram(issues),
        recent: by_age
            .into_iter()
            .take(RECENT_ISSUES)
            .map(IssueSummary::from)
            .collect(),
    }
}

impl Insights {
    /// Issue counts and label histogram over up to 100 issues in any state.
    pub async fn issue_stats(&self) -> ApiResult<IssueStats> {
        match split(self.client.issues(&self.repo).await) {
            Ok(issues) => ApiResult::ok(summarize_issues(&issues), None),
            Err(error) => self.degrade("issues", error.as_deref(), fallback::issue_stats()),
        }
    }
}
