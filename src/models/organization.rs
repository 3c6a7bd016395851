//! Organization model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates a new organization ID from the given string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new random organization ID.
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

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrganizationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrganizationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An organization that owns projects.
///
/// Read-only from the project core's perspective: projects reference an
/// organization and borrow its GitHub org slug and base URL for their
/// derived accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier.
    pub id: OrganizationId,
    /// Display name.
    pub name: String,
    /// GitHub organization slug, e.g. `CodeMontageHQ`.
    pub github_org: String,
    /// Base GitHub URL for the organization.
    pub github_url: String,
}

impl Organization {
    /// Creates an organization with the conventional GitHub base URL.
    #[must_use]
    pub fn new(name: impl Into<String>, github_org: impl Into<String>) -> Self {
        let github_org = github_org.into();
        Self {
            id: OrganizationId::generate(),
            name: name.into(),
            github_url: format!("https://github.com/{github_org}"),
            github_org,
        }
    }

    /// Overrides the base GitHub URL (for enterprise hosts).
    #[must_use]
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_conventional_url() {
        let org = Organization::new("CodeMontage", "CodeMontageHQ");
        assert_eq!(org.github_org, "CodeMontageHQ");
        assert_eq!(org.github_url, "https://github.com/CodeMontageHQ");
        assert_eq!(org.id.as_str().len(), 12);
    }

    #[test]
    fn test_with_github_url() {
        let org = Organization::new("Acme", "acme").with_github_url("https://git.acme.example/acme");
        assert_eq!(org.github_url, "https://git.acme.example/acme");
    }
}
