// src/github/mapper.rs
// =============================================================================
// This module maps GraphQL wire shapes onto the internal model.
//
// Key functionality:
// - map_profile: UserNode -> Profile, total (missing counters are already
//   zero, optional text coalesces to None)
// - map_repositories: repository nodes -> Vec<Repository>, keeping only
//   nodes actually owned by the searched handle
//
// The owner filter is defense in depth, not an optimization: the query
// already scopes to the owner, but some account configurations make the API
// return affiliated-but-not-owned repositories. Dropped nodes are logged.
// =============================================================================

use crate::github::response::{RepositoryNode, UserNode};
use crate::models::{Profile, RepoOwner, Repository};

/// Maps a profile query node onto the internal `Profile`.
///
/// Total: never fails for a well-formed node.
pub fn map_profile(user: UserNode) -> Profile {
    Profile {
        handle: user.login,
        display_name: non_empty(user.name),
        avatar_url: user.avatar_url,
        profile_url: user.url,
        bio: non_empty(user.bio),
        location: non_empty(user.location),
        company: non_empty(user.company),
        email: non_empty(user.email),
        website_text: non_empty(user.website_url),
        twitter_handle: non_empty(user.twitter_username),
        follower_count: user.followers.total_count,
        following_count: user.following.total_count,
        public_repo_count: user.repositories.total_count,
        starred_repo_count: user.starred_repositories.total_count,
        total_contributions: user
            .contributions_collection
            .contribution_calendar
            .total_contributions,
        created_at: user.created_at,
    }
}

/// Maps repository query nodes onto internal `Repository` values.
///
/// Keeps upstream order (already most recently updated first) and drops any
/// node whose owner does not match `requested_handle` case-insensitively.
pub fn map_repositories(nodes: Vec<RepositoryNode>, requested_handle: &str) -> Vec<Repository> {
    nodes
        .into_iter()
        .filter(|node| {
            let owned = node.owner.login.eq_ignore_ascii_case(requested_handle);
            if !owned {
                eprintln!(
                    "Warning: Dropping repository '{}' owned by '{}' (searched for '{}')",
                    node.name, node.owner.login, requested_handle
                );
            }
            owned
        })
        .map(map_repository)
        .collect()
}

// One node -> one Repository; every field rename is explicit
fn map_repository(node: RepositoryNode) -> Repository {
    Repository {
        id: node.id,
        name: node.name,
        url: node.url,
        description: non_empty(node.description),
        language: node.primary_language.map(|lang| lang.name),
        star_count: node.stargazer_count,
        fork_count: node.fork_count,
        updated_at: node.updated_at,
        owner: RepoOwner {
            handle: node.owner.login,
            avatar_url: node.owner.avatar_url,
            profile_url: node.owner.url,
        },
        is_fork: node.is_fork.unwrap_or(false),
        is_private: node.is_private.unwrap_or(false),
    }
}

// Optional text fields are None or non-empty, never Some("")
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
