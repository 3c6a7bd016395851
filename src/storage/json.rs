//! Filesystem-based project store.
//!
//! Stores each project as an individual JSON document under a data
//! directory. Useful for single-user installs and environments without a
//! database.
//!
//! # Security
//!
//! - **Path traversal**: record ids are validated before they become file
//!   names.
//! - **File size limits**: a maximum file size is enforced on read to
//!   prevent memory exhaustion from corrupted or malicious files.

use super::ProjectStore;
use crate::models::{Project, ProjectId};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for project files (1MB).
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// JSON-file-per-record project store.
#[derive(Debug)]
pub struct JsonStore {
    /// Directory holding the record files.
    data_dir: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| Error::OperationFailed {
            operation: "create_data_dir".to_string(),
            cause: e.to_string(),
        })?;
        Ok(Self { data_dir })
    }

    /// Validates that an id is safe to use as a file name.
    fn validate_id(id: &ProjectId) -> Result<()> {
        let s = id.as_str();
        if s.is_empty()
            || !s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidInput(format!("unsafe record id: {s:?}")));
        }
        Ok(())
    }

    fn record_path(&self, id: &ProjectId) -> Result<PathBuf> {
        Self::validate_id(id)?;
        Ok(self.data_dir.join(format!("{id}.json")))
    }

    fn read_record(path: &Path) -> Result<Project> {
        let meta = fs::metadata(path).map_err(|e| Error::OperationFailed {
            operation: "stat_record".to_string(),
            cause: e.to_string(),
        })?;
        if meta.len() > MAX_FILE_SIZE {
            return Err(Error::OperationFailed {
                operation: "read_record".to_string(),
                cause: format!("{} exceeds {MAX_FILE_SIZE} bytes", path.display()),
            });
        }

        let data = fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_record".to_string(),
            cause: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| Error::OperationFailed {
            operation: "decode_record".to_string(),
            cause: e.to_string(),
        })
    }
}

impl ProjectStore for JsonStore {
    fn persist(&mut self, project: &Project) -> Result<()> {
        let path = self.record_path(&project.id)?;
        let data = serde_json::to_string_pretty(project).map_err(|e| Error::OperationFailed {
            operation: "encode_record".to_string(),
            cause: e.to_string(),
        })?;

        // Write to a sibling temp file first so a crash mid-write never
        // leaves a truncated record behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|e| Error::OperationFailed {
            operation: "write_record".to_string(),
            cause: e.to_string(),
        })?;
        fs::rename(&tmp, &path).map_err(|e| Error::OperationFailed {
            operation: "write_record".to_string(),
            cause: e.to_string(),
        })
    }

    fn get(&self, id: &ProjectId) -> Result<Option<Project>> {
        let path = self.record_path(id)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).map(Some)
    }

    fn delete(&mut self, id: &ProjectId) -> Result<bool> {
        let path = self.record_path(id)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| Error::OperationFailed {
            operation: "delete_record".to_string(),
            cause: e.to_string(),
        })?;
        Ok(true)
    }

    fn all(&self) -> Result<Vec<Project>> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| Error::OperationFailed {
            operation: "list_records".to_string(),
            cause: e.to_string(),
        })?;

        let mut projects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::OperationFailed {
                operation: "list_records".to_string(),
                cause: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            projects.push(Self::read_record(&path)?);
        }
        Ok(projects)
    }
}
