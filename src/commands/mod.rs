//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the session's library. Mutations go through
//! [`Session::update`] so every accepted change is saved before the command
//! returns.

pub mod album;
pub mod config;
pub mod photo;
pub mod search;
pub mod tag;

// Re-export execute functions for convenience
pub use album::execute as album;
pub use config::execute as config;
pub use photo::execute as photo;
pub use search::execute as search;
pub use tag::execute as tag;

use crate::AlbumrError;
use crate::model::{AlbumId, PhotoId};
use crate::store::{Library, Session};

type Result<T> = std::result::Result<T, AlbumrError>;

/// Look up an album by name
///
/// # Errors
/// Returns `AlbumrError::InvalidInput` if no album has that name.
pub fn find_album(library: &Library, name: &str) -> Result<AlbumId> {
    library
        .find_album(name.trim())
        .ok_or_else(|| AlbumrError::InvalidInput(format!("Album '{}' not found", name.trim())))
}

/// Look up a photo by locator
///
/// # Errors
/// Returns `AlbumrError::InvalidInput` if no photo has that locator.
pub fn find_photo(library: &Library, locator: &str) -> Result<PhotoId> {
    library
        .find_photo(locator.trim())
        .ok_or_else(|| AlbumrError::InvalidInput(format!("Photo '{}' not found", locator.trim())))
}

/// Run a library mutation through the session and propagate its rejection
fn apply<T, E>(session: &mut Session, mutate: impl FnOnce(&mut Library) -> std::result::Result<T, E>) -> Result<T>
where
    AlbumrError: From<E>,
{
    Ok(session.try_update(mutate)?)
}
