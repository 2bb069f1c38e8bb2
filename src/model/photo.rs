//! Photos and their transient image cache

use super::tag::Tag;
use crate::resolve::{self, ImageResolver};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Decoded pixels derived from the locator. Never persisted.
#[derive(Debug, Clone, Default)]
struct ImageCache {
    full: Option<Arc<DynamicImage>>,
    thumbnail: Option<Arc<DynamicImage>>,
}

/// A photo referenced by its locator
///
/// The locator is the identity: two photos with the same locator are the
/// same photo, whatever their captions or tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    caption: String,
    locator: String,
    tags: Vec<Tag>,
    #[serde(skip)]
    cache: ImageCache,
}

impl Photo {
    #[must_use]
    pub fn new(caption: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            locator: locator.into(),
            tags: Vec::new(),
            cache: ImageCache::default(),
        }
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Point the photo at new image bytes and drop cached pixels
    ///
    /// Crate-visible only: the library owns locator uniqueness.
    pub(crate) fn set_locator(&mut self, locator: impl Into<String>) {
        self.locator = locator.into();
        self.cache = ImageCache::default();
    }

    /// Add a tag. Returns `false` if an equal tag was already present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns `false` if it was not present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn tags_as_strings(&self) -> Vec<String> {
        self.tags.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn has_tag_type(&self, tag_type: &str) -> bool {
        self.tags.iter().any(|t| t.is_type(tag_type))
    }

    /// Decoded full image, resolved on first use
    ///
    /// Returns `None` when no resolution strategy can produce pixels; callers
    /// substitute [`resolve::placeholder`].
    pub fn full_image(&mut self, resolver: &dyn ImageResolver) -> Option<Arc<DynamicImage>> {
        if let Some(full) = &self.cache.full {
            return Some(Arc::clone(full));
        }

        tracing::debug!(locator = %self.locator, "loading image");
        let image = Arc::new(resolver.resolve(&self.locator)?);
        self.cache.full = Some(Arc::clone(&image));
        Some(image)
    }

    /// Square thumbnail derived from the full image
    pub fn thumbnail(&mut self, resolver: &dyn ImageResolver) -> Option<Arc<DynamicImage>> {
        if let Some(thumbnail) = &self.cache.thumbnail {
            tracing::debug!(caption = %self.caption, "using cached thumbnail");
            return Some(Arc::clone(thumbnail));
        }

        let Some(full) = self.full_image(resolver) else {
            tracing::warn!(locator = %self.locator, "cannot create thumbnail: image unavailable");
            return None;
        };
        let thumbnail = Arc::new(resolve::make_thumbnail(&full));
        self.cache.thumbnail = Some(Arc::clone(&thumbnail));
        Some(thumbnail)
    }

    /// Whether decoded pixels are currently held
    #[must_use]
    pub const fn has_cached_image(&self) -> bool {
        self.cache.full.is_some() || self.cache.thumbnail.is_some()
    }

    /// Drop cached pixels
    pub fn release_images(&mut self) {
        self.cache = ImageCache::default();
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | [{}]", self.caption, self.locator, self.tags_as_strings().join(", "))
    }
}

#[cfg(test)]
#[path = "photo_tests.rs"]
mod photo_tests;
