//! GraphQL query documents.
//!
//! The repository field block is identical across the four repository
//! queries; the schema offers no shared fragment mechanism at this layer
//! that would survive a plain string POST, so it is repeated verbatim.

/// Resolves the login the supplied token acts as.
pub(crate) const VERIFY_IDENTITY: &str = "query { viewer { login } }";

/// Resolves display name, numeric id, and account creation time.
pub(crate) const USER_PROFILE: &str = r"
query ($login: String!) {
  user(login: $login) {
    login
    name
    databaseId
    createdAt
  }
}";

/// The user's manually pinned repositories, edge/node wrapped.
pub(crate) const PINNED_ITEMS: &str = r"
query ($login: String!, $num: Int!) {
  user(login: $login) {
    pinnedItems(first: $num, types: [REPOSITORY]) {
      edges {
        node {
          ... on Repository {
            name
            stargazerCount
            forkCount
            owner { login }
            description
            url
            primaryLanguage { name color }
            isFork
            parent { nameWithOwner }
            isTemplate
            isArchived
            pushedAt
            createdAt
            updatedAt
          }
        }
      }
    }
  }
}";

/// Repositories the user owns, cursor-paginated, ordered descending.
pub(crate) const OWNED_REPOSITORIES: &str = r"
query ($login: String!, $num: Int!, $after: String, $field: RepositoryOrderField!) {
  user(login: $login) {
    repositories(first: $num, after: $after, orderBy: { field: $field, direction: DESC }) {
      pageInfo { hasNextPage endCursor }
      nodes {
        name
        stargazerCount
        forkCount
        owner { login }
        description
        url
        primaryLanguage { name color }
        isFork
        parent { nameWithOwner }
        isTemplate
        isArchived
        pushedAt
        createdAt
        updatedAt
      }
    }
  }
}";

/// Repositories the user has committed to, cursor-paginated, ordered
/// descending.
pub(crate) const CONTRIBUTED_REPOSITORIES: &str = r"
query ($login: String!, $num: Int!, $after: String, $field: RepositoryOrderField!) {
  user(login: $login) {
    repositoriesContributedTo(first: $num, after: $after, contributionTypes: [COMMIT], orderBy: { field: $field, direction: DESC }) {
      pageInfo { hasNextPage endCursor }
      nodes {
        name
        stargazerCount
        forkCount
        owner { login }
        description
        url
        primaryLanguage { name color }
        isFork
        parent { nameWithOwner }
        isTemplate
        isArchived
        pushedAt
        createdAt
        updatedAt
      }
    }
  }
}";

/// One repository looked up by owner and name.
pub(crate) const SINGLE_REPOSITORY: &str = r"
query ($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    name
    stargazerCount
    forkCount
    owner { login }
    description
    url
    primaryLanguage { name color }
    isFork
    parent { nameWithOwner }
    isTemplate
    isArchived
    pushedAt
    createdAt
    updatedAt
  }
}";

/// Response field holding the owned-repositories listing.
pub(crate) const OWNED_LIST_FIELD: &str = "repositories";

/// Response field holding the contributed-repositories listing.
pub(crate) const CONTRIBUTED_LIST_FIELD: &str = "repositoriesContributedTo";
