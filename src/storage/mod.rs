//! Project persistence.
//!
//! Stores are the authoritative home of project records. The trait owns
//! the lifecycle contract: creation-time validation and derivation happen
//! exactly once before first persistence, update-time validation gates
//! every later write, and scope predicates compose by logical AND in the
//! query layer.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::models::{NewProject, Organization, Project, ProjectId};
use crate::{Error, Result};
use chrono::Utc;

/// Returns `true` if the project has been approved.
#[must_use]
pub const fn is_approved(project: &Project) -> bool {
    project.is_approved
}

/// Returns `true` if the project is approved and active.
#[must_use]
pub const fn is_active(project: &Project) -> bool {
    is_approved(project) && project.is_active
}

/// Returns `true` if the project is active and owned by an organization.
#[must_use]
pub const fn is_featured(project: &Project) -> bool {
    is_active(project) && project.organization_id.is_some()
}

/// Scope filter for project listings.
///
/// Each enabled flag adds one predicate; a project must satisfy all of
/// them (logical AND). The flags nest the way the predicates do:
/// `featured` implies `active` implies `approved`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Require `is_approved`.
    pub approved: bool,
    /// Require `is_active` (which itself requires approval).
    pub active: bool,
    /// Require an owning organization on top of `active`.
    pub featured: bool,
}

impl ProjectFilter {
    /// No restrictions.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            approved: false,
            active: false,
            featured: false,
        }
    }

    /// Only approved projects.
    #[must_use]
    pub const fn approved() -> Self {
        Self {
            approved: true,
            active: false,
            featured: false,
        }
    }

    /// Only approved, active projects.
    #[must_use]
    pub const fn active() -> Self {
        Self {
            approved: true,
            active: true,
            featured: false,
        }
    }

    /// Only active projects with an owning organization.
    #[must_use]
    pub const fn featured() -> Self {
        Self {
            approved: true,
            active: true,
            featured: true,
        }
    }

    /// Evaluates the enabled predicates against a project.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        (!self.approved || is_approved(project))
            && (!self.active || is_active(project))
            && (!self.featured || is_featured(project))
    }
}

/// Trait for project persistence backends.
///
/// Backends implement the four low-level record operations; the lifecycle
/// and query methods are provided on top of them and are the only path
/// through which records are created or updated.
pub trait ProjectStore: Send + Sync {
    /// Writes a record, replacing any record with the same id.
    fn persist(&mut self, project: &Project) -> Result<()>;

    /// Retrieves a record by id.
    fn get(&self, id: &ProjectId) -> Result<Option<Project>>;

    /// Deletes a record by id, returning whether it existed.
    fn delete(&mut self, id: &ProjectId) -> Result<bool>;

    /// Returns all records.
    fn all(&self) -> Result<Vec<Project>>;

    /// Checks if a record exists.
    fn exists(&self, id: &ProjectId) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Returns the total record count.
    fn count(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    /// Creates and persists a project from its creation payload.
    ///
    /// Runs the creation factory ([`Project::create`]) so validation and
    /// `github_repo` derivation happen before anything is written; a
    /// payload that fails validation is never persisted.
    ///
    /// # Errors
    ///
    /// Returns a validation error from the factory or a storage error
    /// from the write.
    fn insert(&mut self, new: NewProject) -> Result<Project> {
        let project = Project::create(new)?;
        self.persist(&project)?;
        Ok(project)
    }

    /// Persists changes to an existing project.
    ///
    /// Update-time validation (`github_repo` non-empty) runs first; a
    /// failing update leaves the stored record untouched. On success the
    /// stored record's `updated_at` is refreshed and returned.
    ///
    /// # Errors
    ///
    /// Returns a validation error, [`Error::NotFound`] for an unknown id,
    /// or a storage error from the write.
    fn update(&mut self, project: &Project) -> Result<Project> {
        project.validate_update()?;
        if !self.exists(&project.id)? {
            return Err(Error::NotFound(format!("project {}", project.id)));
        }

        let mut stored = project.clone();
        stored.updated_at = Utc::now();
        self.persist(&stored)?;
        Ok(stored)
    }

    /// Finds a project by its slug.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self.all()?.into_iter().find(|p| p.slug == slug))
    }

    /// Lists projects matching a scope filter.
    fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    /// Lists the other projects of the same organization.
    fn related(&self, project: &Project, org: &Organization) -> Result<Vec<Project>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|p| p.id != project.id && p.organization_id.as_ref() == Some(&org.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrganizationId;

    fn project(approved: bool, active: bool, org: bool) -> Project {
        let mut p = Project::create(NewProject {
            name: "Widget".to_string(),
            submitted_github_url: "https://github.com/acme/widget".to_string(),
            ..Default::default()
        })
        .unwrap();
        p.is_approved = approved;
        p.is_active = active;
        p.organization_id = org.then(|| OrganizationId::new("org-1"));
        p
    }

    #[test]
    fn test_predicates_nest() {
        let unapproved = project(false, true, true);
        assert!(!is_approved(&unapproved));
        assert!(!is_active(&unapproved));
        assert!(!is_featured(&unapproved));

        let orphan = project(true, true, false);
        assert!(is_active(&orphan));
        assert!(!is_featured(&orphan));

        let featured = project(true, true, true);
        assert!(is_featured(&featured));
    }

    #[test]
    fn test_filter_composes_by_and() {
        let inactive = project(true, false, true);
        assert!(ProjectFilter::approved().matches(&inactive));
        assert!(!ProjectFilter::active().matches(&inactive));
        assert!(!ProjectFilter::featured().matches(&inactive));
        assert!(ProjectFilter::all().matches(&inactive));
    }
}
