//! Testing utilities for albumr
//!
//! Provides a `TestStore` wrapper owning a temporary directory and a store
//! path inside it, plus fixture builders shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::{AlbumId, PhotoId, Tag};
use crate::store::{Library, persist};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary store location that is removed on drop
///
/// # Examples
/// ```ignore
/// let store = TestStore::new();
/// let session = Session::open(store.path());
/// // directory and store file removed when `store` is dropped
/// ```
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(persist::STORE_FILE);
        Self { _dir: dir, path }
    }

    /// Create a store already holding `library`
    ///
    /// # Panics
    /// Panics if the library cannot be saved.
    #[must_use]
    pub fn with_library(library: &Library) -> Self {
        let store = Self::new();
        persist::save(library, &store.path).expect("Failed to save test library");
        store
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The arcade fixture: Pac-Man (Location=Maze, Person=PacMan) and
/// Blinky (Location=Maze) in one album
pub struct Arcade {
    pub library: Library,
    pub album: AlbumId,
    pub pacman: PhotoId,
    pub blinky: PhotoId,
}

/// # Panics
/// Panics if the fixture cannot be built.
#[must_use]
pub fn arcade() -> Arcade {
    let mut library = Library::new();
    let album = library.create_album("Arcade").expect("create album");
    let pacman = library
        .add_photo(album, "Pac-Man", "/drawable/pacmanstock")
        .expect("add pacman");
    let blinky = library
        .add_photo(album, "Blinky", "/drawable/blinkystock")
        .expect("add blinky");
    for (photo, tag_type, value) in [
        (pacman, "Location", "Maze"),
        (pacman, "Person", "PacMan"),
        (blinky, "Location", "Maze"),
    ] {
        let tag = Tag::new(tag_type, value).expect("valid tag");
        library.add_tag(photo, tag).expect("tag photo");
    }
    Arcade {
        library,
        album,
        pacman,
        blinky,
    }
}
