// Static sample datasets.
// Served by the aggregators when live data cannot be fetched.

use chrono::{DateTime, Utc};

use crate::github::IssueState;

use super::{
    ActivityStats, ContributorStats, IssueStats, IssueSummary, LabelCount, LanguageShare,
    LastCommit, LatestRelease, ReleaseStats, RepositoryStats, TopContributor,
};

const SAMPLE_REPO: &str = "sample/content-studio";
const SAMPLE_URL: &str = "https://github.com/sample/content-studio";

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn avatar(id: u32) -> String {
    format!("https://avatars.githubusercontent.com/u/{id}?v=4")
}

pub fn repository_stats() -> RepositoryStats {
    RepositoryStats {
        name: "content-studio".to_string(),
        full_name: SAMPLE_REPO.to_string(),
        description: Some("AI-assisted content generation toolkit".to_string()),
        html_url: SAMPLE_URL.to_string(),
        stars: 1_247,
        forks: 89,
        watchers: 34,
        open_issues: 23,
        size: 15_420,
        language: Some("TypeScript".to_string()),
        license: Some("MIT License".to_string()),
        topics: ["ai", "content-generation", "llm", "marketing", "nextjs"]
            .into_iter()
            .map(String::from)
            .collect(),
        // 2023-03-15, 2024-11-28, 2024-11-28
        created_at: at(1_678_838_400),
        updated_at: at(1_732_752_000),
        pushed_at: Some(at(1_732_752_000)),
    }
}

pub fn contributor_stats() -> Vec<ContributorStats> {
    [
        ("maya-chen", 1_001, 342, 45_230, 12_450),
        ("devon-ortiz", 1_002, 187, 23_100, 8_900),
        ("priya-nair", 1_003, 156, 18_750, 6_200),
        ("sam-okafor", 1_004, 98, 9_800, 3_400),
        ("lena-berg", 1_005, 67, 5_420, 1_980),
    ]
    .into_iter()
    .map(|(login, id, commits, additions, deletions)| ContributorStats {
        login: login.to_string(),
        avatar_url: avatar(id),
        html_url: Some(format!("https://github.com/{login}")),
        contributions: commits,
        commits,
        additions,
        deletions,
        name: None,
        company: None,
        location: None,
        bio: None,
        followers: None,
        public_repos: None,
    })
    .collect()
}

pub fn issue_stats() -> IssueStats {
    let labels = [
        ("enhancement", 12),
        ("bug", 8),
        ("documentation", 5),
        ("good first issue", 4),
        ("question", 2),
    ];
    let recent = [
        (156, "Support custom tone presets", IssueState::Open, 1_732_665_600),
        (155, "Markdown export drops tables", IssueState::Open, 1_732_579_200),
        (154, "Add streaming progress to the wizard", IssueState::Closed, 1_732_492_800),
    ];

    IssueStats {
        total: 156,
        open: 23,
        closed: 133,
        pull_requests: 0,
        labels: labels
            .into_iter()
            .map(|(name, count)| LabelCount {
                name: name.to_string(),
                count,
            })
            .collect(),
        recent: recent
            .into_iter()
            .map(|(number, title, state, created)| IssueSummary {
                number,
                title: title.to_string(),
                state,
                html_url: format!("{SAMPLE_URL}/issues/{number}"),
                created_at: at(created),
            })
            .collect(),
    }
}

pub fn activity_stats() -> ActivityStats {
    ActivityStats {
        total_commits: 850,
        weekly_commits: 23,
        monthly_commits: 89,
        top_contributors: contributor_stats()
            .into_iter()
            .map(|c| TopContributor {
                login: c.login,
                contributions: c.contributions,
                avatar_url: c.avatar_url,
            })
            .collect(),
        last_commit: LastCommit {
            sha: "a1b2c3d4e5f6".to_string(),
            message: "Improve prompt templates for long-form output".to_string(),
            author: "Maya Chen".to_string(),
            date: "2024-11-28T10:30:00Z".to_string(),
        },
        languages: [
            ("TypeScript", 412_000, 78.4),
            ("CSS", 71_500, 13.6),
            ("JavaScript", 42_000, 8.0),
        ]
        .into_iter()
        .map(|(name, bytes, percentage)| LanguageShare {
            name: name.to_string(),
            bytes,
            percentage,
        })
        .collect(),
    }
}

pub fn release_stats() -> ReleaseStats {
    ReleaseStats {
        total: 6,
        prereleases: 1,
        latest: Some(LatestRelease {
            tag: "v2.3.0".to_string(),
            name: "v2.3.0".to_string(),
            html_url: format!("{SAMPLE_URL}/releases/tag/v2.3.0"),
            prerelease: false,
            published_at: Some(at(1_731_974_400)),
        }),
    }
}
