// src/filter.rs
// =============================================================================
// Client-side filtering of fetched repositories.
//
// Filtering happens after the fetch, on the mapped model - the upstream
// query is never re-issued for a filter change. Two filters combine:
// - name: case-insensitive substring match
// - language: exact match against the repository's primary language
//
// language_options derives the set of selectable languages from the result
// set itself (sorted, deduplicated).
// =============================================================================

use std::collections::BTreeSet;

use crate::models::Repository;

/// Unique primary languages across the results, sorted - the option set
/// for the language filter.
pub fn language_options(repositories: &[Repository]) -> Vec<String> {
    let set: BTreeSet<&String> = repositories
        .iter()
        .filter_map(|repo| repo.language.as_ref())
        .collect();
    set.into_iter().cloned().collect()
}

/// Applies the name and language filters; either may be None (no filter).
pub fn filter_repositories<'a>(
    repositories: &'a [Repository],
    name: Option<&str>,
    language: Option<&str>,
) -> Vec<&'a Repository> {
    let name_lowered = name.map(|n| n.to_lowercase());

    repositories
        .iter()
        .filter(|repo| {
            let name_match = match &name_lowered {
                Some(needle) => repo.name.to_lowercase().contains(needle),
                None => true,
            };
            let language_match = match language {
                Some(wanted) => repo.language.as_deref() == Some(wanted),
                None => true,
            };
            name_match && language_match
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoOwner;

    fn repository(name: &str, language: Option<&str>) -> Repository {
        Repository {
            id: format!("R_{}", name),
            name: name.to_string(),
            url: format!("https://github.com/octocat/{}", name),
            description: None,
            language: language.map(str::to_string),
            star_count: 0,
            fork_count: 0,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            owner: RepoOwner {
                handle: "octocat".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
                profile_url: "https://github.com/octocat".to_string(),
            },
            is_fork: false,
            is_private: false,
        }
    }

    #[test]
    fn test_language_options_are_sorted_and_unique() {
        let repos = vec![
            repository("a", Some("Rust")),
            repository("b", Some("C")),
            repository("c", Some("Rust")),
            repository("d", None),
        ];
        assert_eq!(language_options(&repos), vec!["C", "Rust"]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let repos = vec![
            repository("repo-scout", Some("Rust")),
            repository("scout-badge", Some("Go")),
            repository("other", None),
        ];
        let filtered = filter_repositories(&repos, Some("SCOUT"), None);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo-scout", "scout-badge"]);
    }

    #[test]
    fn test_language_filter_is_exact() {
        let repos = vec![
            repository("a", Some("Rust")),
            repository("b", Some("Go")),
            repository("c", None),
        ];
        let filtered = filter_repositories(&repos, None, Some("Rust"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "a");
    }

    #[test]
    fn test_filters_combine() {
        let repos = vec![
            repository("cli-tool", Some("Rust")),
            repository("cli-site", Some("TypeScript")),
        ];
        let filtered = filter_repositories(&repos, Some("cli"), Some("Rust"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "cli-tool");
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let repos = vec![repository("a", None), repository("b", None)];
        assert_eq!(filter_repositories(&repos, None, None).len(), 2);
    }
}
