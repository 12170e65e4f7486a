// src/github/response.rs
// =============================================================================
// Typed wire shapes for the GitHub GraphQL responses.
//
// One set of record types per query document (profile, repositories), plus
// the generic response envelope. Field names follow the GraphQL schema via
// `rename_all = "camelCase"`; required vs. optional is explicit on every
// field, so the mapper's exhaustiveness is checked by the compiler instead
// of at runtime.
//
// Nested counter objects ({ totalCount }) default to zero when missing, and
// the repository connection tolerates null lists and null elements - a
// well-formed success payload can always be mapped.
// =============================================================================

use serde::Deserialize;

// Generic GraphQL response envelope
//
// An HTTP-200 response can still carry an `errors` array (with `data`
// null or partial). The client inspects `errors` before touching `data`.
#[derive(Debug, Deserialize)]
pub struct GraphQlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

// A single entry of the GraphQL `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Profile query
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    // null when the handle does not resolve to a user
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub website_url: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub followers: CountField,
    #[serde(default)]
    pub following: CountField,
    #[serde(default)]
    pub repositories: CountField,
    #[serde(default)]
    pub starred_repositories: CountField,
    #[serde(default)]
    pub contributions_collection: ContributionsField,
    pub created_at: String,
}

// A connection queried only for its { totalCount }
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountField {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsField {
    #[serde(default)]
    pub contribution_calendar: CalendarField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarField {
    #[serde(default)]
    pub total_contributions: u64,
}

// ---------------------------------------------------------------------------
// Repositories query
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RepositoriesData {
    pub user: Option<RepositoriesUserNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoriesUserNode {
    #[serde(default)]
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Default, Deserialize)]
pub struct RepositoryConnection {
    // GraphQL allows both the list and its elements to be null
    #[serde(default)]
    pub nodes: Option<Vec<Option<RepositoryNode>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub primary_language: Option<LanguageNode>,
    #[serde(default)]
    pub stargazer_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    pub updated_at: String,
    pub owner: OwnerNode,
    pub is_private: Option<bool>,
    pub is_fork: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerNode {
    pub login: String,
    pub avatar_url: String,
    pub url: String,
}
