//! Data models for causeway.
//!
//! This module contains the core domain structures: projects, the
//! organizations that own them, ordered tag lists, and per-field
//! validation errors.

mod organization;
mod project;
mod tags;
mod validate;

pub use organization::{Organization, OrganizationId};
pub use project::{INVALID_GITHUB_URL_MESSAGE, NewProject, Project, ProjectId};
pub use tags::TagList;
pub use validate::{FieldError, ValidationErrors};
