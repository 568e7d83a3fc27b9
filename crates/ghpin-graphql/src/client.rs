//! GitHub GraphQL client: session bootstrap and fetch facade.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, instrument};

use ghpin_core::{ApiUrl, Error, Repo, RepoOrderField, RepoSource, Result};

use crate::decode::{decode_repo, string_or_empty};
use crate::paginate::paginate_repos;
use crate::queries;
use crate::transport::GraphqlTransport;

/// Default page size and pinned-fetch count.
const DEFAULT_FETCH_LIMIT: u32 = 100;

/// Configuration for [`GithubClient::connect`].
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    username: Option<String>,
    fetch_limit: Option<u32>,
    endpoint: ApiUrl,
}

impl ClientConfig {
    /// Configuration with the given API token against the public GitHub
    /// endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: None,
            fetch_limit: None,
            endpoint: ApiUrl::github(),
        }
    }

    /// Act as this username instead of the one the token resolves to.
    ///
    /// The override is not validated against the token's identity; an
    /// inaccessible username surfaces as the first fetch's failure rather
    /// than a bootstrap error.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Page size for paginated listings and default pinned-fetch count
    /// (default 100).
    pub fn fetch_limit(mut self, limit: u32) -> Self {
        self.fetch_limit = Some(limit);
        self
    }

    /// Target a different GraphQL endpoint (mock servers in tests).
    pub fn endpoint(mut self, endpoint: ApiUrl) -> Self {
        self.endpoint = endpoint;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .field("fetch_limit", &self.fetch_limit)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// The resolved identity a client acts as.
///
/// Produced once during [`GithubClient::connect`]; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// The acting username (resolved login or explicit override).
    pub username: String,
    /// The account's display name, `""` when unset.
    pub display_name: String,
    /// The account's numeric id, `0` when absent.
    pub user_id: i64,
    /// Account creation timestamp as reported by the source, `""` when
    /// absent.
    pub created_at: String,
}

/// An authenticated GitHub GraphQL client for one user.
///
/// All state is immutable after [`connect`](Self::connect); the client is
/// cheap to clone and independent fetches may run concurrently.
#[derive(Clone)]
pub struct GithubClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: GraphqlTransport,
    profile: Profile,
    fetch_limit: u32,
}

impl GithubClient {
    /// Connect and bootstrap a session.
    ///
    /// Verifies the token by resolving the acting login, then fetches the
    /// user's profile. Any failure during bootstrap is surfaced as an
    /// authorization error and no client is constructed.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let transport = GraphqlTransport::new(config.endpoint.clone(), &config.token)?;
        let fetch_limit = config.fetch_limit.unwrap_or(DEFAULT_FETCH_LIMIT);

        let profile = Self::bootstrap(&transport, config.username)
            .await
            .map_err(Error::into_auth)?;

        info!(username = %profile.username, "session established");

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                profile,
                fetch_limit,
            }),
        })
    }

    async fn bootstrap(
        transport: &GraphqlTransport,
        override_username: Option<String>,
    ) -> Result<Profile> {
        let body = transport.send(queries::VERIFY_IDENTITY, json!({})).await?;
        let resolved = body["data"]["viewer"]["login"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();

        let username = override_username.unwrap_or(resolved);
        debug!(%username, "verified identity");

        let body = transport
            .send(queries::USER_PROFILE, json!({ "login": username }))
            .await?;
        let user = &body["data"]["user"];

        Ok(Profile {
            username,
            display_name: string_or_empty(&user["name"]),
            user_id: user["databaseId"].as_i64().unwrap_or(0),
            created_at: string_or_empty(&user["createdAt"]),
        })
    }

    /// The resolved profile for this session.
    pub fn profile(&self) -> &Profile {
        &self.inner.profile
    }

    /// The acting username.
    pub fn username(&self) -> &str {
        &self.inner.profile.username
    }

    /// The account's display name, `""` when unset.
    pub fn display_name(&self) -> &str {
        &self.inner.profile.display_name
    }

    /// The account's numeric id, `0` when absent.
    pub fn user_id(&self) -> i64 {
        self.inner.profile.user_id
    }

    /// Account creation timestamp as reported by the source.
    pub fn created_at(&self) -> &str {
        &self.inner.profile.created_at
    }

    /// The configured page size.
    pub fn fetch_limit(&self) -> u32 {
        self.inner.fetch_limit
    }

    /// Fetch the user's pinned repositories.
    ///
    /// One request, bounded by `count` (the fetch limit when `None`).
    /// Pins are inherently unique, so no deduplication is applied.
    #[instrument(skip(self), fields(username = %self.username()))]
    pub async fn fetch_pinned(&self, count: Option<u32>) -> Result<Vec<Repo>> {
        debug!("fetching pinned repositories");

        let body = self
            .inner
            .transport
            .send(
                queries::PINNED_ITEMS,
                json!({
                    "login": self.username(),
                    "num": count.unwrap_or(self.inner.fetch_limit),
                }),
            )
            .await?;

        let edges = &body["data"]["user"]["pinnedItems"]["edges"];
        let mut repos = Vec::new();
        for edge in edges.as_array().into_iter().flatten() {
            let node = &edge["node"];
            if node.is_null() {
                continue;
            }
            repos.push(decode_repo(node)?);
        }
        Ok(repos)
    }

    /// Fetch all repositories the user owns.
    #[instrument(skip(self, excluded_urls), fields(username = %self.username()))]
    pub async fn fetch_owned(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>> {
        debug!("fetching owned repositories");
        self.fetch_listing(
            queries::OWNED_REPOSITORIES,
            queries::OWNED_LIST_FIELD,
            order,
            excluded_urls,
        )
        .await
    }

    /// Fetch repositories the user has committed to.
    #[instrument(skip(self, excluded_urls), fields(username = %self.username()))]
    pub async fn fetch_contributed(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>> {
        debug!("fetching contributed repositories");
        self.fetch_listing(
            queries::CONTRIBUTED_REPOSITORIES,
            queries::CONTRIBUTED_LIST_FIELD,
            order,
            excluded_urls,
        )
        .await
    }

    async fn fetch_listing(
        &self,
        query: &str,
        list_field: &str,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>> {
        paginate_repos(
            &self.inner.transport,
            query,
            list_field,
            self.username(),
            self.inner.fetch_limit,
            order.unwrap_or_default(),
            excluded_urls,
        )
        .await
    }

    /// Fetch a single repository by owner and name.
    ///
    /// Returns an empty record when the repository does not exist or is
    /// not visible to the token.
    #[instrument(skip(self), fields(username = %self.username()))]
    pub async fn fetch_repo(&self, owner: &str, name: &str) -> Result<Repo> {
        debug!(owner, name, "fetching single repository");

        let body = self
            .inner
            .transport
            .send(
                queries::SINGLE_REPOSITORY,
                json!({ "owner": owner, "name": name }),
            )
            .await?;

        let node = &body["data"]["repository"];
        if node.is_null() {
            return Ok(Repo::default());
        }
        decode_repo(node)
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    fn username(&self) -> &str {
        GithubClient::username(self)
    }

    async fn fetch_pinned(&self, count: Option<u32>) -> Result<Vec<Repo>> {
        GithubClient::fetch_pinned(self, count).await
    }

    async fn fetch_owned(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>> {
        GithubClient::fetch_owned(self, order, excluded_urls).await
    }

    async fn fetch_contributed(
        &self,
        order: Option<RepoOrderField>,
        excluded_urls: &[String],
    ) -> Result<Vec<Repo>> {
        GithubClient::fetch_contributed(self, order, excluded_urls).await
    }

    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<Repo> {
        GithubClient::fetch_repo(self, owner, name).await
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("profile", &self.inner.profile)
            .field("fetch_limit", &self.inner.fetch_limit)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
