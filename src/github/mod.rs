//! GitHub repository identity and API access.
//!
//! URL normalization derives a project's canonical `owner/repo` identity
//! from whatever reference a contributor submits; the client module talks
//! to the GitHub REST API with argument bundles the models prepare.

mod client;
mod url;

pub use client::{GithubApiArgs, GithubClient, HttpGithubClient};
pub use url::{derive_github_repo, is_valid_repo_url, normalize_github_url};
