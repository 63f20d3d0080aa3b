// repo-insights command line.
// Prints repository aggregates as JSON.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use repo_insights::{ClientConfig, GitHubClient, Insights, RepoRef, Result};

/// Which aggregate to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Report {
    #[default]
    All,
    Repository,
    Contributors,
    Issues,
    Activity,
    Releases,
}

#[derive(Debug, Parser)]
#[command(name = "repo-insights", version, about = "GitHub repository statistics")]
struct Cli {
    /// Repository as owner/name
    repo: RepoRef,

    /// Aggregate to print
    #[arg(short, long, value_enum, default_value_t = Report::All)]
    report: Report,

    /// API base URL (defaults to REPO_INSIGHTS_API_URL or api.github.com)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Print compact instead of pretty JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        ClientConfig::from_env().with_timeout(std::time::Duration::from_secs(cli.timeout));
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }

    let insights = Insights::new(GitHubClient::new(config)?, cli.repo);

    match cli.report {
        Report::All => {
            let report = insights.report().await;
            if report.is_degraded() {
                tracing::warn!("some figures are sample data");
            }
            print_json(&report, cli.compact)?;
        }
        Report::Repository => print_json(&insights.repository_stats().await, cli.compact)?,
        Report::Contributors => print_json(&insights.contributor_stats().await, cli.compact)?,
        Report::Issues => print_json(&insights.issue_stats().await, cli.compact)?,
        Report::Activity => print_json(&insights.activity_stats().await, cli.compact)?,
        Report::Releases => print_json(&insights.release_stats().await, cli.compact)?,
    }

    if let Some(rate_limit) = insights.client().rate_limit() {
        if rate_limit.is_exhausted() {
            let reset = rate_limit
                .reset_at()
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            tracing::warn!(limit = rate_limit.limit, %reset, "rate limit exhausted");
        } else {
            tracing::info!(
                remaining = rate_limit.remaining,
                limit = rate_limit.limit,
                used = rate_limit.used,
                "rate limit"
            );
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", json);
    Ok(())
}
