//! Named albums holding photo handles

use super::PhotoId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named set of photos
///
/// Albums only hold [`PhotoId`] handles; the photos themselves live in the
/// [`Library`](crate::store::Library) arena. Equality and hashing use the
/// name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    name: String,
    photos: Vec<PhotoId>,
}

impl Album {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the album
    ///
    /// Does not check other albums for a clash; use
    /// [`Library::rename_album`](crate::store::Library::rename_album).
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Insert a photo. Returns `false` if it was already present.
    pub fn add_photo(&mut self, photo: PhotoId) -> bool {
        if self.photos.contains(&photo) {
            return false;
        }
        self.photos.push(photo);
        true
    }

    /// Remove a photo. Returns `false` if it was not present.
    pub fn remove_photo(&mut self, photo: PhotoId) -> bool {
        match self.position_of(photo) {
            Some(index) => {
                self.photos.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, photo: PhotoId) -> bool {
        self.photos.contains(&photo)
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photo handles in insertion order
    #[must_use]
    pub fn photo_ids(&self) -> &[PhotoId] {
        &self.photos
    }

    #[must_use]
    pub fn position_of(&self, photo: PhotoId) -> Option<usize> {
        self.photos.iter().position(|p| *p == photo)
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
