//! Raw repository records as returned by the source API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository record as decoded off the wire.
///
/// Every field is optional: the source schema is not under our control and
/// partial responses are passed through rather than rejected. Defaults are
/// applied at the formatting boundary ([`crate::PinCard`]), never here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Repo {
    pub name: Option<String>,
    pub stargazer_count: Option<u64>,
    pub fork_count: Option<u64>,
    pub owner: Option<RepoOwner>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub primary_language: Option<RepoLanguage>,
    pub is_fork: Option<bool>,
    pub parent: Option<RepoParent>,
    pub is_template: Option<bool>,
    pub is_archived: Option<bool>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repo {
    /// The identity key used for cross-listing deduplication.
    pub fn identity_key(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// The owning account of a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoOwner {
    pub login: Option<String>,
}

/// The primary language of a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoLanguage {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// The upstream repository a fork was created from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoParent {
    pub name_with_owner: Option<String>,
}

/// Field a repository listing is ordered by (descending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoOrderField {
    /// Order by stargazer count.
    #[default]
    Stargazers,
    /// Order by creation time.
    CreatedAt,
    /// Order by last update time.
    UpdatedAt,
    /// Order by last push time.
    PushedAt,
    /// Order by repository name.
    Name,
}

impl RepoOrderField {
    /// The GraphQL `RepositoryOrderField` token for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoOrderField::Stargazers => "STARGAZERS",
            RepoOrderField::CreatedAt => "CREATED_AT",
            RepoOrderField::UpdatedAt => "UPDATED_AT",
            RepoOrderField::PushedAt => "PUSHED_AT",
            RepoOrderField::Name => "NAME",
        }
    }
}
