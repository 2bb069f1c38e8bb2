//! The owning handle for a library and its store file
//!
//! A [`Session`] is created once by the top-level controller and passed to
//! whatever needs the library. It loads on open, saves after every mutation
//! made through [`Session::update`], and flushes unsaved changes on
//! [`Session::close`] or drop. Save failures are logged and leave the
//! previous store file in place; the session stays dirty so a later save can
//! retry.

use super::{Library, PersistError, persist};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Session {
    library: Library,
    path: PathBuf,
    dirty: bool,
}

impl Session {
    /// Load the library at `path`, or start empty if there is none or it is
    /// unreadable
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let library = persist::load_or_default(&path);
        Self {
            library,
            path,
            dirty: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Mutable access without an automatic save; call [`Session::commit`]
    /// afterwards or rely on the flush at close
    pub fn library_mut(&mut self) -> &mut Library {
        self.dirty = true;
        &mut self.library
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run a mutation and save the result
    pub fn update<T>(&mut self, mutate: impl FnOnce(&mut Library) -> T) -> T {
        let out = mutate(&mut self.library);
        self.dirty = true;
        self.commit();
        out
    }

    /// Run a fallible mutation, saving only when it succeeds
    ///
    /// # Errors
    ///
    /// Returns the mutation's error unchanged. Library operations leave the
    /// library as it was when they fail, so nothing is marked dirty.
    pub fn try_update<T, E>(
        &mut self,
        mutate: impl FnOnce(&mut Library) -> Result<T, E>,
    ) -> Result<T, E> {
        let out = mutate(&mut self.library)?;
        self.dirty = true;
        self.commit();
        Ok(out)
    }

    /// Save if there are unsaved changes; failures are logged
    ///
    /// Returns whether the store on disk now matches memory.
    pub fn commit(&mut self) -> bool {
        if !self.dirty {
            return true;
        }
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "error saving data");
                false
            }
        }
    }

    /// Save unconditionally
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the store cannot be written; the previous
    /// store file is left as it was.
    pub fn save(&mut self) -> Result<(), PersistError> {
        persist::save(&self.library, &self.path)?;
        self.dirty = false;
        Ok(())
    }

    /// Flush and release the library
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the final save fails.
    pub fn close(mut self) -> Result<Library, PersistError> {
        if self.dirty {
            self.save()?;
        }
        Ok(std::mem::take(&mut self.library))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.dirty {
            self.commit();
        }
    }
}
