// src/models.rs
// =============================================================================
// Internal data model for search results.
//
// These are the entities the rest of the application works with. They are
// produced by the response mapper (src/github/mapper.rs) and are deliberately
// decoupled from the GraphQL wire shapes: every field here has an explicit
// mapping, and unmapped upstream fields are dropped. That keeps this model
// stable even if the upstream schema grows or changes.
//
// Both entities are rebuilt from scratch on every search - there is no
// merging or patching of previous results.
// =============================================================================

use serde::Serialize;

// A repository owned by the searched user
//
// Invariant: `owner.handle` matches the searched handle case-insensitively.
// The mapper enforces this even when the upstream response includes
// affiliated-but-not-owned repositories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    /// Opaque upstream identifier, only used as a key
    pub id: String,
    pub name: String,
    /// Absolute URL to the repository on github.com
    pub url: String,
    /// None when the owner left it blank (never Some(""))
    pub description: Option<String>,
    /// Primary language; also feeds the language filter options
    pub language: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    /// ISO-8601 timestamp, passed through from upstream verbatim
    pub updated_at: String,
    pub owner: RepoOwner,
    pub is_fork: bool,
    pub is_private: bool,
}

// Denormalized copy of the owning account on each repository
//
// Not a separate entity - the profile panel uses `Profile` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoOwner {
    pub handle: String,
    pub avatar_url: String,
    pub profile_url: String,
}

// A user's profile as shown in the profile panel
//
// The free-text fields (`website_text`, `bio`, `company`) are stored raw,
// exactly as the account holder entered them. Turning them into safe links
// is the job of src/links/resolve.rs, which runs at render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub handle: String,
    /// Display name; fall back to `handle` when absent
    pub display_name: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    /// Raw "website" field - may be a bare domain, a LinkedIn URL, or garbage
    pub website_text: Option<String>,
    pub twitter_handle: Option<String>,
    pub follower_count: u64,
    pub following_count: u64,
    pub public_repo_count: u64,
    pub starred_repo_count: u64,
    pub total_contributions: u64,
    pub created_at: String,
}

impl Profile {
    /// Name to show in headings: display name when set, handle otherwise
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.handle)
    }
}
