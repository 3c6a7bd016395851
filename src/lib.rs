//! # Causeway
//!
//! Domain core for an open-source volunteer project registry.
//!
//! Causeway models projects that belong to organizations, each carrying a
//! canonical GitHub repository identity derived from a user-submitted URL,
//! ordered technology/cause tag lists, and an approval lifecycle. The crate
//! deliberately stops at the domain boundary: persistence backends implement
//! the [`storage::ProjectStore`] trait, and the GitHub API is reached through
//! the [`github::GithubClient`] trait.
//!
//! ## Example
//!
//! ```rust
//! use causeway::models::{NewProject, Project};
//!
//! let project = Project::create(NewProject {
//!     name: "CodeMontage".to_string(),
//!     submitted_github_url: "https://github.com/CodeMontageHQ/codemontage".to_string(),
//!     ..Default::default()
//! })?;
//! assert_eq!(project.github_repo, "codemontage");
//! # Ok::<(), causeway::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod github;
pub mod models;
pub mod observability;
pub mod slug;
pub mod storage;

// Re-exports for convenience
pub use config::CausewayConfig;
pub use github::{GithubApiArgs, GithubClient, derive_github_repo, normalize_github_url};
pub use models::{
    FieldError, NewProject, Organization, OrganizationId, Project, ProjectId, TagList,
    ValidationErrors,
};
pub use storage::{MemoryStore, ProjectFilter, ProjectStore};

/// Error type for causeway operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `Validation` | A record fails creation- or update-time field validation |
/// | `InvalidInput` | Malformed parameters outside the record lifecycle |
/// | `NotFound` | Lookup by id or slug matches nothing |
/// | `OperationFailed` | I/O errors, storage failures, GitHub API request failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A record failed field validation.
    ///
    /// Carries the collected per-field errors so a caller can report every
    /// failing field at once rather than only the first one hit.
    #[error("validation failed: {0}")]
    Validation(models::ValidationErrors),

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur in the JSON store
    /// - GitHub API requests fail or return an error status
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Returns the per-field validation errors, if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&models::ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for causeway operations.
pub type Result<T> = std::result::Result<T, Error>;
