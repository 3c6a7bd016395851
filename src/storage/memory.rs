//! In-memory project store.
//!
//! Backs tests and throwaway CLI sessions; nothing survives the process.

use super::ProjectStore;
use crate::models::{Project, ProjectId};
use crate::Result;
use std::collections::HashMap;

/// HashMap-backed project store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<ProjectId, Project>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn persist(&mut self, project: &Project) -> Result<()> {
        self.records.insert(project.id.clone(), project.clone());
        Ok(())
    }

    fn get(&self, id: &ProjectId) -> Result<Option<Project>> {
        Ok(self.records.get(id).cloned())
    }

    fn delete(&mut self, id: &ProjectId) -> Result<bool> {
        Ok(self.records.remove(id).is_some())
    }

    fn all(&self) -> Result<Vec<Project>> {
        Ok(self.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProject;

    fn new_project(name: &str, url: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            submitted_github_url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = MemoryStore::new();
        let project = store
            .insert(new_project(
                "CodeMontage",
                "https://github.com/CodeMontageHQ/codemontage",
            ))
            .unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert!(store.exists(&project.id).unwrap());
        assert_eq!(
            store.find_by_slug("codemontage").unwrap().unwrap().id,
            project.id
        );
    }

    #[test]
    fn test_failed_insert_persists_nothing() {
        let mut store = MemoryStore::new();
        let result = store.insert(new_project("Widget", "not-a-url"));
        assert!(result.is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_update_validates_github_repo() {
        let mut store = MemoryStore::new();
        let mut project = store
            .insert(new_project("Widget", "https://github.com/acme/widget"))
            .unwrap();

        project.github_repo = String::new();
        assert!(store.update(&project).is_err());
        // the stored record is untouched
        assert_eq!(
            store.get(&project.id).unwrap().unwrap().github_repo,
            "widget"
        );

        project.github_repo = "new-name".to_string();
        let updated = store.update(&project).unwrap();
        assert_eq!(updated.github_repo, "new-name");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = MemoryStore::new();
        let project = crate::models::Project::create(new_project(
            "Widget",
            "https://github.com/acme/widget",
        ))
        .unwrap();
        assert!(matches!(
            store.update(&project),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let project = store
            .insert(new_project("Widget", "https://github.com/acme/widget"))
            .unwrap();
        assert!(store.delete(&project.id).unwrap());
        assert!(!store.delete(&project.id).unwrap());
    }
}
