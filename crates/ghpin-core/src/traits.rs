//! Source trait for repository listings.

use async_trait::async_trait;

use crate::repo::{Repo, RepoOrderField};
use crate::Result;

/// A source of repository metadata for one authenticated user.
///
/// Implemented by the GraphQL-backed client; renderers and tests can
/// substitute their own implementation.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// The username the source is acting as.
    fn username(&self) -> &str;

    /// Fetch the user's pinned repositories, at most `count` of them
    /// (the source's fetch limit when `None`).
    async fn fetch_pinned(&self, count: Option<u32>) -> Result<Vec<Repo>>;

    /// Fetch all repositories the user owns, ordered by `order`
    /// descending, skipping any whose URL appears in `excluded_urls`.
    async fn fetch_owned(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>>;

    /// Fetch repositories the user has committed to, ordered by `order`
    /// descending, skipping any whose URL appears in `excluded_urls`.
    async fn fetch_contributed(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>>;

    /// Fetch a single repository by owner and name. Returns an empty
    /// record when the repository does not exist or is not visible.
    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<Repo>;
}
