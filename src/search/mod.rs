// src/search/mod.rs
// =============================================================================
// This module orchestrates a search.
//
// Submodules:
// - session: the state machine merging the two fetch outcomes
//
// run_search issues the profile and repository fetches concurrently - they
// are independent operations with no ordering between them - and feeds both
// completions into the session.
// =============================================================================

mod session;

// Re-export the public API of this module
pub use session::{SearchOutcome, SearchSession, SearchState};

use crate::github::GithubClient;

/// Runs one full search for `handle`: submit, fetch both entities
/// concurrently, merge the outcomes.
///
/// No cancellation is wired to the network layer; if the session has moved
/// on to a newer handle, the completions are discarded by the session's
/// own handle check.
pub async fn run_search(client: &GithubClient, session: &mut SearchSession, handle: &str) {
    session.submit(handle);

    let (profile_result, repositories_result) = futures::join!(
        client.fetch_profile(handle),
        client.fetch_repositories(handle),
    );

    session.apply_profile(handle, profile_result);
    session.apply_repositories(handle, repositories_result);
}
