//! Per-field validation errors.
//!
//! Validation collects every failing field before reporting, so a caller
//! can surface all problems in one pass instead of fixing them one at a
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation failure on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field that failed.
    pub field: String,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the standard presence error.
    #[must_use]
    pub fn blank(field: impl Into<String>) -> Self {
        Self::new(field, "can't be blank")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a field error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the collected errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `true` if the named field has an error.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Converts the collection into a result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] carrying the collection when it
    /// is non-empty.
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(crate::Error::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_collects_multiple_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::blank("name"));
        errors.push(FieldError::new(
            "submitted_github_url",
            "Please enter a valid GitHub URL.",
        ));

        assert!(errors.has_field("name"));
        assert!(errors.has_field("submitted_github_url"));
        assert!(!errors.has_field("github_repo"));
        assert_eq!(
            errors.to_string(),
            "name: can't be blank; submitted_github_url: Please enter a valid GitHub URL."
        );
    }
}
