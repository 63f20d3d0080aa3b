// GitHub API endpoint functions.
// One accessor per remote resource; each only builds the path and delegates to fetch.

use crate::cache::RequestOptions;

use super::client::GitHubClient;
use super::response::ApiResult;
use super::types::{
    Commit, CommitActivity, Contributor, ContributorCodeStats, Issue, Languages, Release,
    RepoRef, Repository, User,
};

/// Largest page GitHub serves for list endpoints.
pub const MAX_PER_PAGE: u32 = 100;
/// Page size for the releases list.
pub const RELEASES_PER_PAGE: u32 = 10;

impl GitHubClient {
    /// Get repository metadata.
    pub async fn repository(&self, repo: &RepoRef) -> ApiResult<Repository> {
        self.fetch(&repo.api_path(), RequestOptions::new()).await
    }

    /// Get the contributors list, most active first.
    pub async fn contributors(&self, repo: &RepoRef) -> ApiResult<Vec<Contributor>> {
        self.fetch(
            &format!("{}/contributors", repo.api_path()),
            RequestOptions::new(),
        )
        .await
    }

    /// Get the first page of issues in every state.
    pub async fn issues(&self, repo: &RepoRef) -> ApiResult<Vec<Issue>> {
        let options = RequestOptions::new()
            .query("state", "all")
            .query("per_page", MAX_PER_PAGE);
        self.fetch(&format!("{}/issues", repo.api_path()), options)
            .await
    }

    /// Get the most recent commits on the default branch.
    pub async fn commits(&self, repo: &RepoRef) -> ApiResult<Vec<Commit>> {
        let options = RequestOptions::new().query("per_page", MAX_PER_PAGE);
        self.fetch(&format!("{}/commits", repo.api_path()), options)
            .await
    }

    /// Get weekly commit totals for the last year, oldest week first.
    pub async fn commit_activity(&self, repo: &RepoRef) -> ApiResult<Vec<CommitActivity>> {
        self.fetch(
            &format!("{}/stats/commit_activity", repo.api_path()),
            RequestOptions::new(),
        )
        .await
    }

    /// Get per-author additions, deletions and commits.
    pub async fn contributor_code_stats(
        &self,
        repo: &RepoRef,
    ) -> ApiResult<Vec<ContributorCodeStats>> {
        self.fetch(
            &format!("{}/stats/contributors", repo.api_path()),
            RequestOptions::new(),
        )
        .await
    }

    /// Get bytes of code per language.
    pub async fn languages(&self, repo: &RepoRef) -> ApiResult<Languages> {
        self.fetch(
            &format!("{}/languages", repo.api_path()),
            RequestOptions::new(),
        )
        .await
    }

    /// Get the latest releases.
    pub async fn releases(&self, repo: &RepoRef) -> ApiResult<Vec<Release>> {
        let options = RequestOptions::new().query("per_page", RELEASES_PER_PAGE);
        self.fetch(&format!("{}/releases", repo.api_path()), options)
            .await
    }

    /// Get a user's public profile.
    pub async fn user(&self, login: &str) -> ApiResult<User> {
        self.fetch(&format!("/users/{}", login), RequestOptions::new())
            .await
    }
}
