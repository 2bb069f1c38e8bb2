//! Locator resolution: turning a photo's locator into pixels
//!
//! A locator is an opaque string. [`LocatorResolver`] tries, in order:
//!
//! 1. a numeric bundled-resource id registered with the resolver
//! 2. the bundled-resource path convention `/drawable/<name>`
//! 3. a filesystem path
//! 4. a URI (only `file://` URIs carry readable bytes here)
//!
//! Resolution never fails loudly. When every strategy misses, the resolver
//! returns `None` and callers substitute [`placeholder`].

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Prefix of the bundled-resource path convention
pub const RESOURCE_PREFIX: &str = "/drawable/";

/// Edge length of square thumbnails
pub const THUMBNAIL_SIZE: u32 = 200;

/// Extensions tried for bundled resources named without one
const RESOURCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Something that can produce pixels for a locator
pub trait ImageResolver {
    /// Decode the image behind `locator`, or `None` if it is unavailable
    fn resolve(&self, locator: &str) -> Option<DynamicImage>;
}

/// Resolver trying bundled resources, file paths and URIs in turn
#[derive(Debug, Clone, Default)]
pub struct LocatorResolver {
    resource_dir: Option<PathBuf>,
    resource_ids: BTreeMap<u32, String>,
}

impl LocatorResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding bundled resources
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Register a numeric resource id for a bundled resource name
    #[must_use]
    pub fn with_resource_id(mut self, id: u32, name: impl Into<String>) -> Self {
        self.resource_ids.insert(id, name.into());
        self
    }

    fn by_resource_id(&self, locator: &str) -> Option<DynamicImage> {
        let id: u32 = locator.trim().parse().ok()?;
        let Some(name) = self.resource_ids.get(&id) else {
            tracing::debug!(id, "unknown resource id");
            return None;
        };
        let image = self.by_resource_name(name);
        if image.is_none() {
            tracing::warn!(id, name = %name, "failed to decode resource");
        }
        image
    }

    fn by_resource_path(&self, locator: &str) -> Option<DynamicImage> {
        let name = locator.strip_prefix(RESOURCE_PREFIX)?;
        let image = self.by_resource_name(name);
        if image.is_none() {
            tracing::warn!(name, "resource not found");
        }
        image
    }

    fn by_resource_name(&self, name: &str) -> Option<DynamicImage> {
        let dir = self.resource_dir.as_ref()?;
        let direct = dir.join(name);
        if direct.extension().is_some() && direct.is_file() {
            return decode_file(&direct);
        }
        RESOURCE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
            .and_then(|path| decode_file(&path))
    }

    fn by_file_path(locator: &str) -> Option<DynamicImage> {
        let path = Path::new(locator);
        if !path.is_file() {
            tracing::debug!(locator, "file does not exist or cannot be read");
            return None;
        }
        decode_file(path)
    }

    fn by_uri(locator: &str) -> Option<DynamicImage> {
        let url = Url::parse(locator).ok()?;
        if url.scheme() != "file" {
            tracing::debug!(scheme = url.scheme(), "no content source for scheme");
            return None;
        }
        let path = url.to_file_path().ok()?;
        decode_file(&path)
    }
}

impl ImageResolver for LocatorResolver {
    fn resolve(&self, locator: &str) -> Option<DynamicImage> {
        let image = self
            .by_resource_id(locator)
            .or_else(|| self.by_resource_path(locator))
            .or_else(|| Self::by_file_path(locator))
            .or_else(|| Self::by_uri(locator));

        if image.is_none() {
            tracing::warn!(locator, "could not load image by any method");
        }
        image
    }
}

fn decode_file(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to decode image");
            None
        }
    }
}

/// Scale an image to a [`THUMBNAIL_SIZE`] square, ignoring aspect ratio
#[must_use]
pub fn make_thumbnail(image: &DynamicImage) -> DynamicImage {
    image.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle)
}

/// Neutral grey square shown in place of an unavailable image
#[must_use]
pub fn placeholder(size: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([128, 128, 128, 255])))
}
