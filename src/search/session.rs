// src/search/session.rs
// =============================================================================
// This module merges the two fetch outcomes into one UI-facing state.
//
// State machine per search: Idle -> Loading -> {Success, PartialSuccess,
// Failure}. A submission clears all prior results before anything loads, so
// stale data never flashes.
//
// Partial-failure policy:
// - A profile failure is absorbed: logged as a warning, the profile panel is
//   simply omitted. The search still succeeds if repositories arrived.
// - A repository failure is THE page error; its message is shown verbatim.
// - Zero repositories with no error is a success with an advisory, not an
//   error.
//
// The two completion handlers may run in either order and commute: the final
// state is identical whichever fetch finishes first. Completions for a
// handle other than the latest submission are discarded (last write wins).
// =============================================================================

use serde::Serialize;

use crate::github::FetchError;
use crate::models::{Profile, Repository};

// The merged state the rendering layer consumes
//
// This struct is the entire contract between the search core and the
// renderer: profile (or absent), repositories, loading flag, page error,
// and the zero-result advisory. Serialized output carries exactly those
// four data fields - `loading` is a live-render concern and `handle` is
// session bookkeeping, so neither appears in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    #[serde(skip_serializing)]
    pub handle: Option<String>,
    #[serde(skip_serializing)]
    pub loading: bool,
    pub profile: Option<Profile>,
    pub repositories: Vec<Repository>,
    pub error: Option<String>,
    pub advisory: Option<String>,
}

// Where a finished (or unfinished) search ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Idle,
    Loading,
    /// Both fetches succeeded
    Success,
    /// Repositories succeeded; the profile failure was absorbed
    PartialSuccess,
    /// The repository fetch failed - the page shows its error
    Failure,
}

impl SearchOutcome {
    /// True when repositories are available for display.
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success | SearchOutcome::PartialSuccess)
    }
}

// One search session keyed by the latest submitted handle
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    profile_pending: bool,
    repositories_pending: bool,
    profile_failed: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        SearchSession::default()
    }

    /// Starts a search for `handle`: transitions to Loading and clears all
    /// prior results. The handle must already be trimmed.
    pub fn submit(&mut self, handle: &str) {
        self.state = SearchState {
            handle: Some(handle.to_string()),
            loading: true,
            ..SearchState::default()
        };
        self.profile_pending = true;
        self.repositories_pending = true;
        self.profile_failed = false;
    }

    /// Completion handler for the profile fetch.
    ///
    /// Failures are absorbed here - logged, never surfaced as the page
    /// error. Results for a superseded handle are discarded.
    pub fn apply_profile(&mut self, handle: &str, result: Result<Profile, FetchError>) {
        if !self.is_current(handle) {
            return;
        }
        self.profile_pending = false;

        match result {
            Ok(profile) => self.state.profile = Some(profile),
            Err(error) => {
                self.profile_failed = true;
                eprintln!("Warning: Failed to fetch profile for '{}': {}", handle, error);
            }
        }
        self.finish_if_done();
    }

    /// Completion handler for the repository fetch.
    ///
    /// A failure here is the page-level error; the list is cleared and the
    /// upstream message is preserved for display.
    pub fn apply_repositories(
        &mut self,
        handle: &str,
        result: Result<Vec<Repository>, FetchError>,
    ) {
        if !self.is_current(handle) {
            return;
        }
        self.repositories_pending = false;

        match result {
            Ok(repositories) => self.state.repositories = repositories,
            Err(error) => {
                self.state.repositories.clear();
                self.state.error = Some(error.to_string());
            }
        }
        self.finish_if_done();
    }

    /// The merged state for the renderer.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn outcome(&self) -> SearchOutcome {
        if self.state.handle.is_none() {
            SearchOutcome::Idle
        } else if self.state.loading {
            SearchOutcome::Loading
        } else if self.state.error.is_some() {
            SearchOutcome::Failure
        } else if self.profile_failed {
            SearchOutcome::PartialSuccess
        } else {
            SearchOutcome::Success
        }
    }

    fn is_current(&self, handle: &str) -> bool {
        self.state.handle.as_deref() == Some(handle)
    }

    // Runs once both completions are in, whatever their order
    fn finish_if_done(&mut self) {
        if self.profile_pending || self.repositories_pending {
            return;
        }
        self.state.loading = false;

        if self.state.error.is_none() && self.state.repositories.is_empty() {
            if let Some(handle) = &self.state.handle {
                self.state.advisory =
                    Some(format!("No repositories found for user \"{}\"", handle));
            }
        }
    }
}
