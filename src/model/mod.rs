//! Album, photo and tag data model
//!
//! Albums and photos are owned by the [`Library`](crate::store::Library)
//! arena and referred to everywhere else by stable ids. An album holds
//! [`PhotoId`]s rather than photos, so a tag added through one handle is seen
//! through every other handle to the same photo.

pub mod album;
pub mod photo;
pub mod samples;
pub mod tag;

pub use album::Album;
pub use photo::Photo;
pub use tag::{DEFAULT_TAG_TYPES, Tag, fold_tag_type, same_tag_type};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Stable handle to an album in the library
    AlbumId,
    "album#"
);

arena_id!(
    /// Stable handle to a photo in the library
    PhotoId,
    "photo#"
);
