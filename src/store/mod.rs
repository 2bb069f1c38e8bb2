//! The collection store
//!
//! [`Library`] owns every album and photo in two id-keyed arenas and is the
//! only place photo values live. Albums hold [`PhotoId`] handles, so there
//! are no private copies to drift out of sync: a caption edited or a tag
//! added through one handle is visible through all of them.
//!
//! The library enforces two invariants the model types cannot see on their
//! own:
//! - album names are unique (checked on create and rename)
//! - photo locators are unique within the arena, so photo identity and
//!   `PhotoId` equality coincide
//!
//! Photos that no album references any more are dropped from the arena.
//!
//! Persistence lives in [`persist`]; the owning handle that saves after each
//! mutation is [`Session`].

pub mod error;
pub mod persist;
pub mod session;

pub use error::{LibraryError, PersistError};
pub use session::Session;

use crate::model::samples::SAMPLES;
use crate::model::{Album, AlbumId, Photo, PhotoId, Tag};
use crate::search::{self, SearchQuery};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

type Result<T> = std::result::Result<T, LibraryError>;

/// Which album and photo the user is looking at
///
/// A lookup hint passed between screens, not ownership. Overwriting or
/// clearing it loses no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub album: Option<AlbumId>,
    pub photo: Option<PhotoId>,
}

/// All albums and photos, plus the current selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    albums: BTreeMap<AlbumId, Album>,
    photos: BTreeMap<PhotoId, Photo>,
    next_album: u64,
    next_photo: u64,
    #[serde(skip)]
    selection: Selection,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- selection -------------------------------------------------------

    /// The current album, if it still exists
    #[must_use]
    pub fn current_album(&self) -> Option<AlbumId> {
        self.selection.album.filter(|id| self.albums.contains_key(id))
    }

    pub fn set_current_album(&mut self, album: Option<AlbumId>) {
        self.selection.album = album;
    }

    /// The current photo, if it still exists
    #[must_use]
    pub fn current_photo(&self) -> Option<PhotoId> {
        self.selection.photo.filter(|id| self.photos.contains_key(id))
    }

    pub fn set_current_photo(&mut self, photo: Option<PhotoId>) {
        self.selection.photo = photo;
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    // --- albums ----------------------------------------------------------

    /// Albums in creation order
    pub fn albums(&self) -> impl Iterator<Item = (AlbumId, &Album)> {
        self.albums.iter().map(|(id, album)| (*id, album))
    }

    #[must_use]
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    #[must_use]
    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(&id)
    }

    /// First album whose name matches exactly (case-sensitive)
    #[must_use]
    pub fn find_album(&self, name: &str) -> Option<AlbumId> {
        self.albums
            .iter()
            .find(|(_, album)| album.name() == name)
            .map(|(id, _)| *id)
    }

    fn validate_album_name(&self, name: &str, except: Option<AlbumId>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        match self.find_album(name) {
            Some(existing) if Some(existing) != except => {
                Err(LibraryError::DuplicateAlbum(name.to_string()))
            }
            _ => Ok(name.to_string()),
        }
    }

    /// Create an empty album
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::EmptyName` or `LibraryError::DuplicateAlbum`.
    pub fn create_album(&mut self, name: &str) -> Result<AlbumId> {
        let name = self.validate_album_name(name, None)?;
        let id = AlbumId::new(self.next_album);
        self.next_album += 1;
        tracing::debug!(%id, name = %name, "created album");
        self.albums.insert(id, Album::new(name));
        Ok(id)
    }

    /// Rename an album, keeping names unique
    ///
    /// Renaming an album to its current name is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::AlbumNotFound`, `LibraryError::EmptyName` or
    /// `LibraryError::DuplicateAlbum`.
    pub fn rename_album(&mut self, id: AlbumId, name: &str) -> Result<()> {
        if !self.albums.contains_key(&id) {
            return Err(LibraryError::AlbumNotFound(id));
        }
        let name = self.validate_album_name(name, Some(id))?;
        if let Some(album) = self.albums.get_mut(&id) {
            album.rename(name);
        }
        Ok(())
    }

    /// Delete an album and every photo no other album holds
    pub fn remove_album(&mut self, id: AlbumId) -> Option<Album> {
        let album = self.albums.remove(&id)?;
        for photo in album.photo_ids() {
            self.drop_if_orphan(*photo);
        }
        if self.selection.album == Some(id) {
            self.selection.album = None;
        }
        tracing::debug!(%id, name = %album.name(), "removed album");
        Some(album)
    }

    // --- photos ----------------------------------------------------------

    /// Number of distinct photos across all albums
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(&id)
    }

    #[must_use]
    pub fn photo_mut(&mut self, id: PhotoId) -> Option<&mut Photo> {
        self.photos.get_mut(&id)
    }

    #[must_use]
    pub fn find_photo(&self, locator: &str) -> Option<PhotoId> {
        let locator = locator.trim();
        self.photos
            .iter()
            .find(|(_, photo)| photo.locator() == locator)
            .map(|(id, _)| *id)
    }

    /// Photos of an album in album order; empty if the album does not exist
    pub fn photos_in(&self, album: AlbumId) -> impl Iterator<Item = (PhotoId, &Photo)> {
        self.albums
            .get(&album)
            .into_iter()
            .flat_map(|album| album.photo_ids().iter())
            .filter_map(move |id| self.photos.get(id).map(|photo| (*id, photo)))
    }

    #[must_use]
    pub fn albums_containing(&self, photo: PhotoId) -> Vec<AlbumId> {
        self.albums
            .iter()
            .filter(|(_, album)| album.contains(photo))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Add a photo to an album by locator
    ///
    /// A locator already known to the library re-uses that photo (with its
    /// caption and tags); adding it to an album that already holds it is a
    /// no-op. An empty caption becomes `Photo N`.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::EmptyLocator` or `LibraryError::AlbumNotFound`.
    pub fn add_photo(&mut self, album: AlbumId, caption: &str, locator: &str) -> Result<PhotoId> {
        let locator = locator.trim();
        if locator.is_empty() {
            return Err(LibraryError::EmptyLocator);
        }
        let count = self
            .albums
            .get(&album)
            .map(Album::photo_count)
            .ok_or(LibraryError::AlbumNotFound(album))?;

        let id = match self.find_photo(locator) {
            Some(id) => id,
            None => {
                let caption = match caption.trim() {
                    "" => format!("Photo {}", count + 1),
                    caption => caption.to_string(),
                };
                let id = PhotoId::new(self.next_photo);
                self.next_photo += 1;
                self.photos.insert(id, Photo::new(caption, locator));
                id
            }
        };

        if let Some(target) = self.albums.get_mut(&album) {
            if target.add_photo(id) {
                tracing::debug!(photo = %id, album = %target.name(), "added photo");
            }
        }
        Ok(id)
    }

    /// Take a photo out of an album. Returns `false` if it was not there.
    pub fn remove_photo(&mut self, album: AlbumId, photo: PhotoId) -> bool {
        let removed = self
            .albums
            .get_mut(&album)
            .is_some_and(|album| album.remove_photo(photo));
        if removed {
            self.drop_if_orphan(photo);
        }
        removed
    }

    /// Move a photo between albums
    ///
    /// Every rejection leaves the library unchanged.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::SameAlbum`, a not-found error, or
    /// `LibraryError::PhotoAlreadyInAlbum` when the destination already holds
    /// the photo.
    pub fn move_photo(&mut self, photo: PhotoId, from: AlbumId, to: AlbumId) -> Result<()> {
        if from == to {
            return Err(LibraryError::SameAlbum);
        }
        if !self.photos.contains_key(&photo) {
            return Err(LibraryError::PhotoNotFound(photo));
        }
        let source = self.albums.get(&from).ok_or(LibraryError::AlbumNotFound(from))?;
        let destination = self.albums.get(&to).ok_or(LibraryError::AlbumNotFound(to))?;
        if !source.contains(photo) {
            return Err(LibraryError::PhotoNotInAlbum {
                album: source.name().to_string(),
            });
        }
        if destination.contains(photo) {
            return Err(LibraryError::PhotoAlreadyInAlbum {
                album: destination.name().to_string(),
            });
        }

        if let Some(source) = self.albums.get_mut(&from) {
            source.remove_photo(photo);
        }
        if let Some(destination) = self.albums.get_mut(&to) {
            destination.add_photo(photo);
        }
        tracing::debug!(%photo, %from, %to, "moved photo");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `LibraryError::PhotoNotFound` or `LibraryError::EmptyCaption`.
    pub fn set_caption(&mut self, photo: PhotoId, caption: &str) -> Result<()> {
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(LibraryError::EmptyCaption);
        }
        self.photos
            .get_mut(&photo)
            .ok_or(LibraryError::PhotoNotFound(photo))?
            .set_caption(caption);
        Ok(())
    }

    /// Point a photo at a new locator
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::PhotoNotFound`, `LibraryError::EmptyLocator`,
    /// or `LibraryError::DuplicateLocator` if another photo already uses it.
    pub fn set_locator(&mut self, photo: PhotoId, locator: &str) -> Result<()> {
        let locator = locator.trim();
        if locator.is_empty() {
            return Err(LibraryError::EmptyLocator);
        }
        if !self.photos.contains_key(&photo) {
            return Err(LibraryError::PhotoNotFound(photo));
        }
        if self.find_photo(locator).is_some_and(|other| other != photo) {
            return Err(LibraryError::DuplicateLocator(locator.to_string()));
        }
        if let Some(target) = self.photos.get_mut(&photo) {
            target.set_locator(locator);
        }
        Ok(())
    }

    /// Tag a photo. Returns `false` if it already carried the tag.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::PhotoNotFound`.
    pub fn add_tag(&mut self, photo: PhotoId, tag: Tag) -> Result<bool> {
        Ok(self
            .photos
            .get_mut(&photo)
            .ok_or(LibraryError::PhotoNotFound(photo))?
            .add_tag(tag))
    }

    /// Untag a photo. Returns `false` if it did not carry the tag.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::PhotoNotFound`.
    pub fn remove_tag(&mut self, photo: PhotoId, tag: &Tag) -> Result<bool> {
        Ok(self
            .photos
            .get_mut(&photo)
            .ok_or(LibraryError::PhotoNotFound(photo))?
            .remove_tag(tag))
    }

    /// Distinct tag types in use, sorted
    #[must_use]
    pub fn tag_types(&self) -> Vec<String> {
        let types: BTreeSet<&str> = self
            .photos
            .values()
            .flat_map(|photo| photo.tags().iter().map(Tag::tag_type))
            .collect();
        types.into_iter().map(str::to_string).collect()
    }

    /// Seed an album with the bundled sample photos
    ///
    /// Returns how many samples were newly added to the album.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::AlbumNotFound`.
    pub fn add_samples(&mut self, album: AlbumId) -> Result<usize> {
        let before = self
            .albums
            .get(&album)
            .map(Album::photo_count)
            .ok_or(LibraryError::AlbumNotFound(album))?;

        for sample in &SAMPLES {
            let template = sample.to_photo();
            let id = self.add_photo(album, template.caption(), template.locator())?;
            for tag in template.tags() {
                self.add_tag(id, tag.clone())?;
            }
        }

        let after = self.albums.get(&album).map_or(before, Album::photo_count);
        tracing::info!(album = %album, added = after - before, "added sample photos");
        Ok(after - before)
    }

    /// Photos matching a tag query, see [`search::search`]
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<PhotoId> {
        search::search(self, query)
    }

    // --- invariants ------------------------------------------------------

    fn drop_if_orphan(&mut self, photo: PhotoId) {
        if self.albums.values().any(|album| album.contains(photo)) {
            return;
        }
        self.photos.remove(&photo);
        if self.selection.photo == Some(photo) {
            self.selection.photo = None;
        }
    }

    /// Drop arena photos no album references. Returns how many were dropped.
    pub(crate) fn prune_orphans(&mut self) -> usize {
        let referenced: HashSet<PhotoId> = self
            .albums
            .values()
            .flat_map(|album| album.photo_ids().iter().copied())
            .collect();
        let before = self.photos.len();
        self.photos.retain(|id, _| referenced.contains(id));
        before - self.photos.len()
    }

    /// Check the invariants a decoded library must satisfy
    pub(crate) fn check_integrity(&self) -> std::result::Result<(), String> {
        let mut names = HashSet::new();
        for (id, album) in &self.albums {
            if id.get() >= self.next_album {
                return Err(format!("{id} is beyond the id counter"));
            }
            if album.name().trim().is_empty() {
                return Err(format!("{id} has an empty name"));
            }
            if !names.insert(album.name()) {
                return Err(format!("duplicate album name \"{}\"", album.name()));
            }
            if let Some(missing) = album.photo_ids().iter().find(|p| !self.photos.contains_key(*p)) {
                return Err(format!("album \"{}\" references missing {missing}", album.name()));
            }
            let mut members = HashSet::new();
            if let Some(repeated) = album.photo_ids().iter().find(|p| !members.insert(**p)) {
                return Err(format!("album \"{}\" lists {repeated} twice", album.name()));
            }
        }

        let mut locators = HashSet::new();
        for (id, photo) in &self.photos {
            if id.get() >= self.next_photo {
                return Err(format!("{id} is beyond the id counter"));
            }
            if !locators.insert(photo.locator()) {
                return Err(format!("duplicate locator {}", photo.locator()));
            }
            let mut tags = HashSet::new();
            if let Some(repeated) = photo.tags().iter().find(|t| !tags.insert(*t)) {
                return Err(format!("{id} carries the tag \"{repeated}\" twice"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod library_tests;
