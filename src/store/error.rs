//! Store-specific error types
//!
//! - **`LibraryError`**: a mutation was refused. Either the referenced album
//!   or photo does not exist, or the change would break a library invariant
//!   (empty or duplicate names, duplicate locators, double insertion).
//! - **`PersistError`**: the store file could not be written or read back.
//!
//! Lookups never produce these; they return `Option`.

use crate::model::{AlbumId, PhotoId};
use thiserror::Error;

/// A refused library mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    #[error("Photo not found: {0}")]
    PhotoNotFound(PhotoId),

    #[error("Photo is not in album \"{album}\"")]
    PhotoNotInAlbum { album: String },

    #[error("Album name cannot be empty")]
    EmptyName,

    #[error("An album named \"{0}\" already exists")]
    DuplicateAlbum(String),

    #[error("Caption cannot be empty")]
    EmptyCaption,

    #[error("Photo locator cannot be empty")]
    EmptyLocator,

    #[error("Another photo already uses locator {0}")]
    DuplicateLocator(String),

    #[error("Photo already exists in \"{album}\"")]
    PhotoAlreadyInAlbum { album: String },

    #[error("Source and destination album are the same")]
    SameAlbum,

    #[error("Invalid tag: {0}")]
    InvalidTag(String),
}

impl LibraryError {
    /// Whether the error is a failed lookup rather than a rejected value
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AlbumNotFound(_) | Self::PhotoNotFound(_) | Self::PhotoNotInAlbum { .. }
        )
    }
}

/// Failure to write or read the store file
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error while encoding store: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Error while decoding store: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Unsupported store format version {0}")]
    UnsupportedVersion(u32),

    #[error("Store is corrupt: {0}")]
    Corrupt(String),

    #[error("Could not replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
