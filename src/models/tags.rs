//! Ordered tag lists.
//!
//! Projects carry two independent tag lists (technologies and causes).
//! A [`TagList`] is an explicit ordered, duplicate-free collection with
//! parse/serialize functions at the string boundary, rather than a string
//! accessor overloaded onto an association.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, duplicate-free list of tags.
///
/// Insertion order is preserved; on duplicate insertion the first
/// occurrence wins. Comparison and deduplication are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Creates an empty tag list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a comma-delimited tag string.
    ///
    /// Entries are trimmed, empties dropped, order preserved, duplicates
    /// collapsed to their first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use causeway::models::TagList;
    ///
    /// let tags = TagList::parse("Ruby, Rails, , Ruby");
    /// assert_eq!(tags.to_string(), "Ruby, Rails");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut list = Self::new();
        for raw in s.split(',') {
            list.add(raw.trim());
        }
        list
    }

    /// Adds a tag, keeping order and skipping blanks and duplicates.
    pub fn add(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return;
        }
        self.0.push(tag.to_string());
    }

    /// Returns `true` if the tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Removes a tag if present, returning whether it was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// Returns the tags in order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tags in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for TagList {
    /// Serializes to the comma-delimited boundary form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for TagList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = Self::new();
        for tag in iter {
            list.add(&tag);
        }
        list
    }
}
