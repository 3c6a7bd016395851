//! Project model and lifecycle.
//!
//! A project is created from a user-submitted GitHub URL through an
//! explicit factory: [`Project::create`] validates the input, derives the
//! canonical `github_repo` exactly once, and returns a fully-formed value
//! object ready for first persistence. The submitted URL itself is
//! transient and never stored.

use super::{FieldError, Organization, OrganizationId, TagList, ValidationErrors};
use crate::github::{GithubApiArgs, GithubClient, derive_github_repo, is_valid_repo_url};
use crate::slug::slugify;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing message for a malformed submitted GitHub URL.
pub const INVALID_GITHUB_URL_MESSAGE: &str = "Please enter a valid GitHub URL.";

/// Unique identifier for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new project ID from the given string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new random project ID using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string()[..12].to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Creation payload for a project.
///
/// `submitted_github_url` is the transient input a contributor supplies;
/// it exists only long enough for [`Project::create`] to derive the
/// canonical repository name from it.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Display name (required).
    pub name: String,
    /// User-submitted GitHub repository URL (required, transient).
    pub submitted_github_url: String,
    /// Owning organization, if any.
    pub organization_id: Option<OrganizationId>,
    /// Short description.
    pub description: Option<String>,
    /// URL describing how to help.
    pub help_url: Option<String>,
    /// URL describing how to install.
    pub install_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Project homepage.
    pub url: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
    /// Ordered technology tags.
    pub technologies: TagList,
    /// Ordered cause tags.
    pub causes: TagList,
    /// Whether the project is active.
    pub is_active: bool,
    /// Whether the project has been approved.
    pub is_approved: bool,
}

/// A registered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// URL-friendly identifier derived from the name.
    pub slug: String,
    /// Canonical GitHub repository name, derived at creation.
    pub github_repo: String,
    /// Owning organization, if any.
    pub organization_id: Option<OrganizationId>,
    /// Short description.
    pub description: Option<String>,
    /// URL describing how to help.
    pub help_url: Option<String>,
    /// URL describing how to install.
    pub install_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Project homepage.
    pub url: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
    /// Ordered technology tags.
    pub technologies: TagList,
    /// Ordered cause tags.
    pub causes: TagList,
    /// Whether the project is active.
    pub is_active: bool,
    /// Whether the project has been approved.
    pub is_approved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project from its creation payload.
    ///
    /// Runs creation-time validation, then derives `github_repo` from the
    /// submitted URL and the slug from the name. The returned value is
    /// fully formed before it ever reaches a store; no hook mutates it
    /// later.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] with one entry per failing
    /// field when the name is blank or the submitted URL is blank or
    /// malformed.
    pub fn create(new: NewProject) -> Result<Self> {
        Self::validate_create(&new).into_result()?;

        let now = Utc::now();
        Ok(Self {
            id: ProjectId::generate(),
            slug: slugify(&new.name),
            github_repo: derive_github_repo(&new.submitted_github_url),
            name: new.name,
            organization_id: new.organization_id,
            description: new.description,
            help_url: new.help_url,
            install_url: new.install_url,
            notes: new.notes,
            url: new.url,
            twitter: new.twitter,
            technologies: new.technologies,
            causes: new.causes,
            is_active: new.is_active,
            is_approved: new.is_approved,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creation-time validation: name presence, submitted URL presence and
    /// shape. Errors are collected per field, not short-circuited.
    #[must_use]
    pub fn validate_create(new: &NewProject) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if new.name.trim().is_empty() {
            errors.push(FieldError::blank("name"));
        }

        if new.submitted_github_url.trim().is_empty() {
            errors.push(FieldError::blank("submitted_github_url"));
        } else if !is_valid_repo_url(&new.submitted_github_url) {
            errors.push(FieldError::new(
                "submitted_github_url",
                INVALID_GITHUB_URL_MESSAGE,
            ));
        }

        errors
    }

    /// Update-time validation: `github_repo` must remain non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] when `github_repo` is blank.
    pub fn validate_update(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        if self.github_repo.trim().is_empty() {
            errors.push(FieldError::blank("github_repo"));
        }
        errors.into_result()
    }

    /// The `owner/repo` display string, borrowing the organization's slug.
    #[must_use]
    pub fn github_display(&self, org: &Organization) -> String {
        format!("{}/{}", org.github_org, self.github_repo)
    }

    /// The repository URL under the organization's GitHub base URL.
    #[must_use]
    pub fn github_url(&self, org: &Organization) -> String {
        format!("{}/{}", org.github_url, self.github_repo)
    }

    /// The repository's issue tracker URL.
    #[must_use]
    pub fn tasks_url(&self, org: &Organization) -> String {
        format!("{}/issues", self.github_url(org))
    }

    /// Builds the argument bundle for the GitHub API collaborator's
    /// query-by-repo operations: project lifetime from creation up to
    /// `now`.
    #[must_use]
    pub fn github_api_args(&self, org: &Organization, now: DateTime<Utc>) -> GithubApiArgs {
        GithubApiArgs {
            org_repo: self.github_display(org),
            repo: self.github_repo.clone(),
            day_begin: self.created_at,
            day_end: now,
        }
    }

    /// Fetches the project's pull requests through the GitHub collaborator.
    ///
    /// Pure delegation: passes `args`, or the default
    /// [`github_api_args`](Self::github_api_args) bundle when `None`.
    ///
    /// # Errors
    ///
    /// Propagates any client failure.
    pub fn github_pull_requests(
        &self,
        client: &dyn GithubClient,
        org: &Organization,
        args: Option<&GithubApiArgs>,
    ) -> Result<Vec<serde_json::Value>> {
        let default;
        let args = match args {
            Some(args) => args,
            None => {
                default = self.github_api_args(org, Utc::now());
                &default
            }
        };
        client.pull_requests_by_repo(args)
    }

    /// Fetches the project's commits through the GitHub collaborator.
    ///
    /// # Errors
    ///
    /// Propagates any client failure.
    pub fn github_commits(
        &self,
        client: &dyn GithubClient,
        org: &Organization,
        args: Option<&GithubApiArgs>,
    ) -> Result<Vec<serde_json::Value>> {
        let default;
        let args = match args {
            Some(args) => args,
            None => {
                default = self.github_api_args(org, Utc::now());
                &default
            }
        };
        client.commits_by_repo(args)
    }

    /// Fetches the project's issues through the GitHub collaborator.
    ///
    /// # Errors
    ///
    /// Propagates any client failure.
    pub fn github_issues(
        &self,
        client: &dyn GithubClient,
        org: &Organization,
        args: Option<&GithubApiArgs>,
    ) -> Result<Vec<serde_json::Value>> {
        let default;
        let args = match args {
            Some(args) => args,
            None => {
                default = self.github_api_args(org, Utc::now());
                &default
            }
        };
        client.issues_by_repo(args)
    }

    /// Fetches the project's forks through the GitHub collaborator.
    ///
    /// # Errors
    ///
    /// Propagates any client failure.
    pub fn github_forks(
        &self,
        client: &dyn GithubClient,
        org: &Organization,
        args: Option<&GithubApiArgs>,
    ) -> Result<Vec<serde_json::Value>> {
        let default;
        let args = match args {
            Some(args) => args,
            None => {
                default = self.github_api_args(org, Utc::now());
                &default
            }
        };
        client.forks_by_repo(args)
    }
}
