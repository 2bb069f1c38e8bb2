//! Bundled sample photos used to seed a new album

use super::{Photo, Tag};
use crate::resolve::RESOURCE_PREFIX;

/// A bundled sample: caption, resource name, and `(type, value)` tags
pub struct Sample {
    pub caption: &'static str,
    pub resource: &'static str,
    pub tags: &'static [(&'static str, &'static str)],
}

pub const SAMPLES: [Sample; 5] = [
    Sample {
        caption: "Pac-Man",
        resource: "pacmanstock",
        tags: &[("Person", "Pac-Man"), ("Location", "Maze")],
    },
    Sample {
        caption: "Blinky",
        resource: "blinkystock",
        tags: &[("Person", "Ghost"), ("Location", "Maze")],
    },
    Sample {
        caption: "Pinky",
        resource: "pinkystock",
        tags: &[],
    },
    Sample {
        caption: "Inky",
        resource: "inkystock",
        tags: &[],
    },
    Sample {
        caption: "Clyde",
        resource: "clydestock",
        tags: &[],
    },
];

impl Sample {
    /// Locator following the bundled-resource path convention
    #[must_use]
    pub fn locator(&self) -> String {
        format!("{RESOURCE_PREFIX}{}", self.resource)
    }

    #[must_use]
    pub fn to_photo(&self) -> Photo {
        let mut photo = Photo::new(self.caption, self.locator());
        for (tag_type, value) in self.tags {
            if let Ok(tag) = Tag::new(tag_type, value) {
                photo.add_tag(tag);
            }
        }
        photo
    }
}
