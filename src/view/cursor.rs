//! Stepping through a list of photos handed over by another screen

use crate::model::PhotoId;
use crate::store::Library;

/// What a screen passes when it opens the photo detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// An explicit list (an album's photos, or search results) and a position
    List { photos: Vec<PhotoId>, position: usize },
    /// Use the library's current album and photo
    Current,
}

/// Position within a list of photos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCursor {
    photos: Vec<PhotoId>,
    position: usize,
}

impl PhotoCursor {
    /// Build a cursor from either kind of hand-off
    ///
    /// Ids that no longer exist are dropped and the position clamped. With
    /// [`Handoff::Current`], the current album supplies the list when it
    /// holds the current photo; a current photo alone becomes a one-photo
    /// list; a current album alone starts at its first photo.
    ///
    /// Returns `None` when there is nothing to show.
    #[must_use]
    pub fn open(handoff: Handoff, library: &Library) -> Option<Self> {
        match handoff {
            Handoff::List { photos, position } => {
                let wanted = photos.get(position).copied();
                let photos: Vec<PhotoId> = photos
                    .into_iter()
                    .filter(|id| library.photo(*id).is_some())
                    .collect();
                let position = wanted
                    .and_then(|id| photos.iter().position(|p| *p == id))
                    .unwrap_or_else(|| position.min(photos.len().saturating_sub(1)));
                Self::new(photos, position)
            }
            Handoff::Current => {
                let album = library.current_album().and_then(|id| library.album(id));
                match (album, library.current_photo()) {
                    (Some(album), Some(photo)) if album.contains(photo) => {
                        let position = album.position_of(photo).unwrap_or(0);
                        Self::new(album.photo_ids().to_vec(), position)
                    }
                    (_, Some(photo)) => Self::new(vec![photo], 0),
                    (Some(album), None) => Self::new(album.photo_ids().to_vec(), 0),
                    (None, None) => None,
                }
            }
        }
    }

    fn new(photos: Vec<PhotoId>, position: usize) -> Option<Self> {
        if photos.is_empty() {
            return None;
        }
        let position = position.min(photos.len() - 1);
        Some(Self { photos, position })
    }

    #[must_use]
    pub fn current(&self) -> PhotoId {
        self.photos[self.position]
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.position > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.photos.len()
    }

    /// Step forward. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Returns `false` at the start.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// `Photo 2 of 5`
    #[must_use]
    pub fn title(&self) -> String {
        format!("Photo {} of {}", self.position + 1, self.photos.len())
    }
}
