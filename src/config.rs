// src/config.rs
// =============================================================================
// Process-wide configuration.
//
// One credential: a GitHub token read from the GITHUB_TOKEN environment
// variable. The GraphQL API rejects unauthenticated requests, but a missing
// token is deliberately NOT an error here - the request is still sent and
// the user gets an advisory banner explaining how to set the token. The
// upstream rejection then surfaces through the normal error path.
// =============================================================================

use std::env;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bearer credential; None means "send requests unauthenticated"
    pub token: Option<String>,
}

impl Config {
    /// Reads configuration from the environment.
    pub fn from_env() -> Self {
        Config {
            token: normalize_token(env::var(TOKEN_ENV_VAR).ok()),
        }
    }

    /// True when a credential is configured; drives the advisory banner.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

// An empty or whitespace-only variable counts as unset
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_none() {
        assert_eq!(normalize_token(None), None);
    }

    #[test]
    fn test_blank_token_counts_as_unset() {
        assert_eq!(normalize_token(Some("".to_string())), None);
        assert_eq!(normalize_token(Some("   ".to_string())), None);
    }

    #[test]
    fn test_token_is_trimmed() {
        assert_eq!(
            normalize_token(Some("  ghp_abc123  ".to_string())),
            Some("ghp_abc123".to_string())
        );
    }
}
