//! Typed key/value labels attached to photos

use crate::store::LibraryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag types offered by default when none are configured
pub const DEFAULT_TAG_TYPES: [&str; 2] = ["Location", "Person"];

/// The form tag types are compared in: trimmed and lowercased
#[must_use]
pub fn fold_tag_type(tag_type: &str) -> String {
    tag_type.trim().to_lowercase()
}

/// Whether two tag type spellings name the same type
#[must_use]
pub fn same_tag_type(a: &str, b: &str) -> bool {
    fold_tag_type(a) == fold_tag_type(b)
}

/// A label on a photo, e.g. `Location: Maze`
///
/// Tags carry no identity beyond their fields: two tags with the same type
/// and value are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    tag_type: String,
    value: String,
}

impl Tag {
    /// Create a tag, trimming both fields
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidTag` if either field is empty after
    /// trimming.
    pub fn new(tag_type: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self, LibraryError> {
        let tag_type = tag_type.as_ref().trim();
        let value = value.as_ref().trim();

        if tag_type.is_empty() {
            return Err(LibraryError::InvalidTag("tag type cannot be empty".into()));
        }
        if value.is_empty() {
            return Err(LibraryError::InvalidTag("tag value cannot be empty".into()));
        }

        Ok(Self {
            tag_type: tag_type.to_string(),
            value: value.to_string(),
        })
    }

    #[must_use]
    pub fn tag_type(&self) -> &str {
        &self.tag_type
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive comparison of the tag type
    #[must_use]
    pub fn is_type(&self, tag_type: &str) -> bool {
        same_tag_type(&self.tag_type, tag_type)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag_type, self.value)
    }
}
