// src/github/client.rs
// =============================================================================
// This module talks to the GitHub GraphQL API.
//
// Key functionality:
// - One query document per operation (profile, repositories)
// - Attaches a bearer token when one is configured; without a token the
//   request still goes out unauthenticated (the caller shows the advisory)
// - Classifies every failure into NotFound / Upstream / Network
// - Exactly one request per operation per call - no retries
//
// The repository query asks for a single page of up to 100 public,
// owner-affiliated repositories, most recently updated first.
// =============================================================================

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::github::mapper::{map_profile, map_repositories};
use crate::github::response::{
    GraphQlEnvelope, GraphQlError, ProfileData, RepositoriesData,
};
use crate::models::{Profile, Repository};

// The one fixed endpoint. Both operations POST here.
const GITHUB_API_URL: &str = "https://api.github.com/graphql";

// Single fixed page; no pagination beyond this.
const REPOSITORY_PAGE_SIZE: u32 = 100;

// GraphQL query for a user's profile panel
const USER_PROFILE_QUERY: &str = r#"
  query UserProfile($login: String!) {
    user(login: $login) {
      login
      name
      avatarUrl
      url
      bio
      company
      location
      twitterUsername
      websiteUrl
      email
      followers {
        totalCount
      }
      following {
        totalCount
      }
      repositories {
        totalCount
      }
      starredRepositories {
        totalCount
      }
      contributionsCollection {
        contributionCalendar {
          totalContributions
        }
      }
      createdAt
    }
  }
"#;

// GraphQL query for a user's repositories: public only, owned only,
// most recently updated first
const USER_REPOSITORIES_QUERY: &str = r#"
  query UserRepositories($login: String!, $first: Int!) {
    user(login: $login) {
      repositories(
        first: $first,
        orderBy: {field: UPDATED_AT, direction: DESC},
        ownerAffiliations: [OWNER],
        affiliations: [OWNER],
        privacy: PUBLIC
      ) {
        nodes {
          id
          name
          url
          description
          primaryLanguage {
            name
          }
          stargazerCount
          forkCount
          updatedAt
          owner {
            login
            avatarUrl
            url
          }
          isPrivate
          isFork
        }
      }
    }
  }
"#;

// Classified fetch failure
//
// Each variant carries the message shown to the user. Upstream messages are
// preserved verbatim so the UI displays exactly what the API said.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FetchError {
    /// The handle does not exist upstream
    NotFound(String),
    /// Well-formed error response from the API
    Upstream(String),
    /// No response reached the client (timeout, DNS, connection refused)
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(message)
            | FetchError::Upstream(message)
            | FetchError::Network(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FetchError {}

// HTTP client for the GitHub GraphQL API
//
// Cheap to clone (reqwest::Client is reference-counted internally).
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    token: Option<String>,
}

impl GithubClient {
    /// Builds a client from process-wide configuration.
    ///
    /// A missing token is not an error here - the request is simply sent
    /// unauthenticated and the caller surfaces the configuration advisory.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent("repo-scout")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GithubClient {
            http,
            token: config.token.clone(),
        })
    }

    /// Fetches the profile for `handle`.
    ///
    /// The handle must already be trimmed; this boundary does not re-trim.
    pub async fn fetch_profile(&self, handle: &str) -> Result<Profile, FetchError> {
        let variables = json!({ "login": handle });
        let envelope: GraphQlEnvelope<ProfileData> =
            self.execute(USER_PROFILE_QUERY, variables).await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(classify_graphql_errors(&errors));
            }
        }

        let user = envelope
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| unknown_user(handle))?;

        Ok(map_profile(user))
    }

    /// Fetches up to one page of `handle`'s public repositories,
    /// most recently updated first.
    pub async fn fetch_repositories(&self, handle: &str) -> Result<Vec<Repository>, FetchError> {
        let variables = json!({ "login": handle, "first": REPOSITORY_PAGE_SIZE });
        let envelope: GraphQlEnvelope<RepositoriesData> =
            self.execute(USER_REPOSITORIES_QUERY, variables).await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(classify_graphql_errors(&errors));
            }
        }

        let user = envelope
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| unknown_user(handle))?;

        // Drop null list elements; GraphQL permits them
        let nodes = user
            .repositories
            .nodes
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();

        Ok(map_repositories(nodes, handle))
    }

    // Sends one query document and decodes the response envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<GraphQlEnvelope<T>, FetchError> {
        let body = json!({ "query": query, "variables": variables });

        let mut request = self
            .http
            .post(GITHUB_API_URL)
            .header("Content-Type", "application/json")
            .json(&body);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream(http_error_message(
                status.as_u16(),
                &text,
            )));
        }

        response
            .json::<GraphQlEnvelope<T>>()
            .await
            .map_err(classify_transport_error)
    }
}

// The NotFound produced when a success envelope has no target user
fn unknown_user(handle: &str) -> FetchError {
    FetchError::NotFound(format!("User \"{}\" not found", handle))
}

// Classifies the GraphQL `errors` array of an HTTP-200 response
//
// GitHub reports an unknown login as "Could not resolve to a User with the
// login of '...'". Anything else is a plain upstream error with the message
// kept verbatim.
fn classify_graphql_errors(errors: &[GraphQlError]) -> FetchError {
    let message = errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Unknown GraphQL error".to_string());

    let lowered = message.to_lowercase();
    if lowered.contains("could not resolve to a user") || lowered.contains("not found") {
        FetchError::NotFound(message)
    } else {
        FetchError::Upstream(message)
    }
}

// Categorizes reqwest errors into the fetch taxonomy
//
// Transport failures (nothing came back) are Network; everything else -
// including a body we could not decode - is Upstream.
fn classify_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Network("Request timed out".to_string())
    } else if error.is_connect() {
        FetchError::Network("Could not connect to api.github.com".to_string())
    } else if error.is_request() {
        FetchError::Network(error.to_string())
    } else {
        FetchError::Upstream(error.to_string())
    }
}

// Pulls the `message` field out of GitHub's JSON error body when present
//
// Non-2xx responses (e.g. 401 Bad credentials) use the REST-style shape
// {"message": "...", "documentation_url": "..."}.
fn http_error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }

    if body.trim().is_empty() {
        format!("GitHub API error (HTTP {})", status)
    } else {
        format!("GitHub API error (HTTP {}): {}", status, body.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_message_shape() {
        let error = unknown_user("nonexistent");
        assert_eq!(
            error,
            FetchError::NotFound("User \"nonexistent\" not found".to_string())
        );
        // Display must be the message verbatim - the UI shows it as-is
        assert_eq!(error.to_string(), "User \"nonexistent\" not found");
    }

    #[test]
    fn test_classify_unknown_user_error() {
        let errors = vec![GraphQlError {
            message: "Could not resolve to a User with the login of 'nonexistent'.".to_string(),
        }];
        let classified = classify_graphql_errors(&errors);
        assert!(matches!(classified, FetchError::NotFound(_)));
        assert_eq!(
            classified.to_string(),
            "Could not resolve to a User with the login of 'nonexistent'."
        );
    }

    #[test]
    fn test_classify_other_graphql_error() {
        let errors = vec![GraphQlError {
            message: "Something went wrong while executing your query.".to_string(),
        }];
        let classified = classify_graphql_errors(&errors);
        assert_eq!(
            classified,
            FetchError::Upstream("Something went wrong while executing your query.".to_string())
        );
    }

    #[test]
    fn test_http_error_message_prefers_json_body() {
        let message = http_error_message(401, r#"{"message": "Bad credentials"}"#);
        assert_eq!(message, "Bad credentials");
    }

    #[test]
    fn test_http_error_message_falls_back_to_status() {
        assert_eq!(
            http_error_message(502, ""),
            "GitHub API error (HTTP 502)"
        );
        assert_eq!(
            http_error_message(500, "upstream exploded"),
            "GitHub API error (HTTP 500): upstream exploded"
        );
    }
}
