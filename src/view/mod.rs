//! Presentation state derived from the library
//!
//! Nothing here mutates the library. [`PhotoCursor`] is how a photo detail
//! view receives its photos from whichever screen opened it, and
//! [`ListState`] tracks the expand/select state of list rows so that row
//! rendering stays free of business logic.

mod cursor;
mod rows;

pub use cursor::{Handoff, PhotoCursor};
pub use rows::{AlbumRow, ListState, PhotoRow, RowState, album_rows, photo_rows, rows_for};
