//! Row view-state for album and photo lists

use crate::model::{AlbumId, PhotoId};
use crate::store::Library;
use serde::Serialize;

/// Display data for one album row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRow {
    pub id: AlbumId,
    pub name: String,
    pub photo_count: usize,
}

/// Display data for one photo row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoRow {
    pub id: PhotoId,
    pub caption: String,
    pub locator: String,
    pub tags: Vec<String>,
}

#[must_use]
pub fn album_rows(library: &Library) -> Vec<AlbumRow> {
    library
        .albums()
        .map(|(id, album)| AlbumRow {
            id,
            name: album.name().to_string(),
            photo_count: album.photo_count(),
        })
        .collect()
}

#[must_use]
pub fn photo_rows(library: &Library, album: AlbumId) -> Vec<PhotoRow> {
    rows_for(library, library.photos_in(album).map(|(id, _)| id))
}

/// Rows for an arbitrary list of photos, e.g. search results
#[must_use]
pub fn rows_for(library: &Library, photos: impl IntoIterator<Item = PhotoId>) -> Vec<PhotoRow> {
    photos
        .into_iter()
        .filter_map(|id| {
            library.photo(id).map(|photo| PhotoRow {
                id,
                caption: photo.caption().to_string(),
                locator: photo.locator().to_string(),
                tags: photo.tags_as_strings(),
            })
        })
        .collect()
}

/// Per-row flags handed to the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub expanded: bool,
    pub selected: bool,
}

/// UI-only list state: at most one expanded row and one selected row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    expanded: Option<usize>,
    selected: Option<usize>,
}

impl ListState {
    #[must_use]
    pub const fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Expand a row, collapsing any other; collapses it if already expanded
    pub fn toggle_expanded(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Keep indices pointing at the same rows after row `index` is removed
    pub fn on_removed(&mut self, index: usize) {
        self.expanded = shift_after_removal(self.expanded, index);
        self.selected = shift_after_removal(self.selected, index);
    }

    /// Flags for a list of `len` rows
    #[must_use]
    pub fn rows(&self, len: usize) -> Vec<RowState> {
        (0..len)
            .map(|i| RowState {
                expanded: self.expanded == Some(i),
                selected: self.selected == Some(i),
            })
            .collect()
    }
}

fn shift_after_removal(current: Option<usize>, removed: usize) -> Option<usize> {
    match current {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}
