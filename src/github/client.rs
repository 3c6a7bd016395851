//! GitHub API collaborator.
//!
//! The core never interprets GitHub payloads; it only prepares the
//! argument bundle and hands it to a [`GithubClient`]. Responses stay
//! opaque JSON.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Argument bundle for the GitHub client's query-by-repo operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubApiArgs {
    /// Full `owner/repo` path, e.g. `CodeMontageHQ/codemontage`.
    pub org_repo: String,
    /// Bare repository name.
    pub repo: String,
    /// Start of the queried range (project creation).
    pub day_begin: DateTime<Utc>,
    /// End of the queried range.
    pub day_end: DateTime<Utc>,
}

/// Query-by-repo operations against the GitHub API.
///
/// Implementations return opaque JSON payloads; the domain core does not
/// look inside them.
pub trait GithubClient {
    /// Lists pull requests for the repo within the bundle's day range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn pull_requests_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>>;

    /// Lists commits for the repo within the bundle's day range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn commits_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>>;

    /// Lists issues for the repo within the bundle's day range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn issues_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>>;

    /// Lists forks of the repo.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn forks_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>>;
}

/// HTTP client for the GitHub REST API.
pub struct HttpGithubClient {
    /// API token, if configured.
    token: Option<String>,
    /// API endpoint.
    endpoint: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl HttpGithubClient {
    /// Default API endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.github.com";

    /// Request timeout.
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new client, picking up `GITHUB_TOKEN` from the
    /// environment when present.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: std::env::var("GITHUB_TOKEN").ok(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            client: build_http_client(),
        }
    }

    /// Sets the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the API endpoint (for enterprise hosts and tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Performs a GET against an API path, decoding a JSON array.
    fn get_list(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<serde_json::Value>> {
        let url = format!("{}/{path}", self.endpoint.trim_end_matches('/'));
        tracing::debug!(url = %url, "github api request");

        let mut request = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| Error::OperationFailed {
            operation: "github_request".to_string(),
            cause: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::OperationFailed {
                operation: "github_request".to_string(),
                cause: format!("{url} returned {status}"),
            });
        }

        response.json().map_err(|e| Error::OperationFailed {
            operation: "github_decode".to_string(),
            cause: e.to_string(),
        })
    }
}

impl Default for HttpGithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubClient for HttpGithubClient {
    fn pull_requests_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>> {
        self.get_list(
            &format!("repos/{}/pulls", args.org_repo),
            &[("state", "all".to_string()), ("per_page", "100".to_string())],
        )
    }

    fn commits_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>> {
        self.get_list(
            &format!("repos/{}/commits", args.org_repo),
            &[
                ("since", args.day_begin.to_rfc3339()),
                ("until", args.day_end.to_rfc3339()),
                ("per_page", "100".to_string()),
            ],
        )
    }

    fn issues_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>> {
        self.get_list(
            &format!("repos/{}/issues", args.org_repo),
            &[
                ("state", "all".to_string()),
                ("since", args.day_begin.to_rfc3339()),
                ("per_page", "100".to_string()),
            ],
        )
    }

    fn forks_by_repo(&self, args: &GithubApiArgs) -> Result<Vec<serde_json::Value>> {
        self.get_list(
            &format!("repos/{}/forks", args.org_repo),
            &[("per_page", "100".to_string())],
        )
    }
}

/// Builds the HTTP client with a GitHub-required user agent and timeout.
fn build_http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("causeway/", env!("CARGO_PKG_VERSION")))
        .timeout(HttpGithubClient::TIMEOUT)
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters() {
        let client = HttpGithubClient::new()
            .with_token("token123")
            .with_endpoint("https://github.example/api/v3");
        assert_eq!(client.endpoint, "https://github.example/api/v3");
        assert_eq!(client.token.as_deref(), Some("token123"));
    }

    #[test]
    fn test_api_args_serde_round_trip() {
        let args = GithubApiArgs {
            org_repo: "acme/widget".to_string(),
            repo: "widget".to_string(),
            day_begin: Utc::now(),
            day_end: Utc::now(),
        };
        let json = serde_json::to_string(&args).unwrap();
        let back: GithubApiArgs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, args);
    }
}
