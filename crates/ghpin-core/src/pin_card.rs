//! Presentation-ready repository values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::repo::Repo;

/// Color theme tag carried on a pin card for downstream renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    GithubSoft,
    GithubDark,
    GithubLight,
}

/// A normalized, presentation-ready repository summary.
///
/// Derived 1:1 from a [`Repo`]; every field is non-null after formatting.
/// Absent source fields are replaced by documented defaults (empty string,
/// zero, or false). The one exception is `parent`, which is `None` when
/// the source carries no parent object (the non-fork case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinCard {
    /// Repository name, prefixed `owner/` when the owner differs
    /// (case-insensitively) from the acting username.
    pub repo_name: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub description: String,
    pub url: String,
    pub primary_language_name: String,
    pub primary_language_color: String,
    pub is_fork: bool,
    pub parent: Option<String>,
    pub is_template: bool,
    pub is_archived: bool,
    pub theme: Theme,
}

impl PinCard {
    /// Format a raw repository record into a pin card.
    ///
    /// The owner is parsed out of the repository URL (second-to-last path
    /// segment); a malformed URL degrades to an unprefixed name rather
    /// than an error.
    pub fn from_repo(repo: &Repo, acting_username: &str, theme: Option<Theme>) -> Self {
        let url = repo.url.as_deref().unwrap_or("");
        let owner = owner_segment(url);

        let name = repo.name.as_deref().unwrap_or("");
        let repo_name = if owner.is_empty() || owner.to_lowercase() == acting_username.to_lowercase()
        {
            name.to_string()
        } else {
            format!("{owner}/{name}")
        };

        let language = repo.primary_language.as_ref();

        PinCard {
            repo_name,
            stargazer_count: repo.stargazer_count.unwrap_or(0),
            fork_count: repo.fork_count.unwrap_or(0),
            description: repo.description.clone().unwrap_or_default(),
            url: url.to_string(),
            primary_language_name: language
                .and_then(|l| l.name.clone())
                .unwrap_or_default(),
            primary_language_color: language
                .and_then(|l| l.color.clone())
                .unwrap_or_default(),
            is_fork: repo.is_fork.unwrap_or(false),
            parent: repo
                .parent
                .as_ref()
                .map(|p| p.name_with_owner.clone().unwrap_or_default()),
            is_template: repo.is_template.unwrap_or(false),
            is_archived: repo.is_archived.unwrap_or(false),
            theme: theme.unwrap_or_default(),
        }
    }
}

/// The second-to-last path segment of a repository URL, or `""` when the
/// URL has fewer than two segments.
fn owner_segment(url: &str) -> &str {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() > 1 {
        segments[segments.len() - 2]
    } else {
        ""
    }
}

impl fmt::Display for PinCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}", self.repo_name)?;
        write!(f, "\ntype: Public")?;
        if self.is_archived {
            write!(f, " archive")?;
        } else if self.is_template {
            write!(f, " template")?;
        }
        if self.is_fork {
            if let Some(parent) = &self.parent {
                write!(f, "\nforked from {parent}")?;
            }
        }
        if !self.description.is_empty() {
            write!(f, "\ndescription: {}", self.description)?;
        }
        if !self.primary_language_name.is_empty() {
            write!(
                f,
                "\nprimary language: ({}) {}",
                self.primary_language_color, self.primary_language_name
            )?;
        }
        if self.stargazer_count > 0 {
            write!(f, "\nstargazers: {}", self.stargazer_count)?;
        }
        if self.fork_count > 0 {
            write!(f, "\nforks: {}", self.fork_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(value: serde_json::Value) -> Repo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn name_unprefixed_when_owner_matches_case_insensitively() {
        let repo = repo(json!({"name": "repoX", "url": "https://example.com/octo/repoX"}));
        let card = PinCard::from_repo(&repo, "Octo", None);
        assert_eq!(card.repo_name, "repoX");
    }

    #[test]
    fn name_prefixed_for_foreign_owner() {
        let repo = repo(json!({"name": "repoX", "url": "https://example.com/octo/repoX"}));
        let card = PinCard::from_repo(&repo, "other", None);
        assert_eq!(card.repo_name, "octo/repoX");
    }

    #[test]
    fn malformed_url_degrades_to_unprefixed_name() {
        let repo = repo(json!({"name": "solo", "url": "nonsense"}));
        let card = PinCard::from_repo(&repo, "anyone", None);
        assert_eq!(card.repo_name, "solo");
        assert_eq!(card.url, "nonsense");
    }

    #[test]
    fn absent_fields_take_documented_defaults() {
        let repo = repo(json!({"name": "bare", "url": "https://example.com/u/bare"}));
        let card = PinCard::from_repo(&repo, "u", None);
        assert_eq!(card.description, "");
        assert_eq!(card.stargazer_count, 0);
        assert_eq!(card.fork_count, 0);
        assert_eq!(card.primary_language_name, "");
        assert_eq!(card.primary_language_color, "");
        assert!(!card.is_fork);
        assert!(!card.is_template);
        assert!(!card.is_archived);
        assert_eq!(card.theme, Theme::GithubSoft);
    }

    #[test]
    fn parent_is_none_for_non_fork() {
        let repo = repo(json!({"name": "x", "isFork": false}));
        let card = PinCard::from_repo(&repo, "u", None);
        assert_eq!(card.parent, None);
    }

    #[test]
    fn parent_carries_name_with_owner_for_fork() {
        let repo = repo(json!({
            "name": "y",
            "isFork": true,
            "parent": {"nameWithOwner": "x/y"}
        }));
        let card = PinCard::from_repo(&repo, "u", None);
        assert!(card.is_fork);
        assert_eq!(card.parent.as_deref(), Some("x/y"));
    }

    #[test]
    fn parent_follows_source_parent_object() {
        // The parent field tracks the source object, not the fork flag;
        // a bare parent object degrades to an empty name.
        let repo = repo(json!({"name": "z", "parent": {}}));
        let card = PinCard::from_repo(&repo, "u", None);
        assert!(!card.is_fork);
        assert_eq!(card.parent.as_deref(), Some(""));
    }

    #[test]
    fn explicit_theme_is_kept() {
        let repo = repo(json!({"name": "t"}));
        let card = PinCard::from_repo(&repo, "u", Some(Theme::GithubDark));
        assert_eq!(card.theme, Theme::GithubDark);
    }

    #[test]
    fn display_omits_empty_lines() {
        let repo = repo(json!({
            "name": "widget",
            "url": "https://example.com/octo/widget",
            "stargazerCount": 3,
            "primaryLanguage": {"name": "Rust", "color": "#dea584"}
        }));
        let card = PinCard::from_repo(&repo, "octo", None);
        let rendered = card.to_string();
        assert_eq!(
            rendered,
            "name: widget\ntype: Public\nprimary language: (#dea584) Rust\nstargazers: 3"
        );
    }

    #[test]
    fn display_marks_archived_fork() {
        let repo = repo(json!({
            "name": "old",
            "isArchived": true,
            "isFork": true,
            "parent": {"nameWithOwner": "up/old"}
        }));
        let card = PinCard::from_repo(&repo, "u", None);
        let rendered = card.to_string();
        assert!(rendered.contains("type: Public archive"));
        assert!(rendered.contains("forked from up/old"));
    }
}
