//! Whole-library save and load
//!
//! The store file holds one bincode-encoded envelope carrying a format
//! version and the entire [`Library`]. Saving writes a temporary file next to
//! the target and renames it into place, so a failed save leaves the previous
//! store intact. Loading treats a missing file as "no data yet" and any
//! unreadable, truncated, or inconsistent file as corrupt.

use super::{Library, PersistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever the encoded layout changes
pub const FORMAT_VERSION: u32 = 1;

/// Default file name of the store inside the data directory
pub const STORE_FILE: &str = "albums.bin";

/// Upper bound on the bytes a store may claim while decoding
pub const MAX_STORE_BYTES: usize = 64 * 1024 * 1024;

type Config = bincode::config::Configuration<
    bincode::config::LittleEndian,
    bincode::config::Varint,
    bincode::config::Limit<MAX_STORE_BYTES>,
>;

/// The limit does not change the encoding, only how much a decode may claim
const fn config() -> Config {
    bincode::config::standard().with_limit::<MAX_STORE_BYTES>()
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    library: &'a Library,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    library: Library,
}

/// Encode a library to bytes
///
/// # Errors
///
/// Returns `PersistError::Encode` if serialization fails.
pub fn encode(library: &Library) -> Result<Vec<u8>, PersistError> {
    let envelope = EnvelopeRef {
        version: FORMAT_VERSION,
        library,
    };
    Ok(bincode::serde::encode_to_vec(&envelope, config())?)
}

/// Decode and validate a library from bytes
///
/// # Errors
///
/// Returns `PersistError::Decode` for malformed bytes or lengths that claim
/// more than [`MAX_STORE_BYTES`],
/// `PersistError::UnsupportedVersion` for a foreign format, and
/// `PersistError::Corrupt` when trailing bytes remain or the decoded
/// library breaks an invariant.
pub fn decode(bytes: &[u8]) -> Result<Library, PersistError> {
    let (envelope, read): (Envelope, usize) = bincode::serde::decode_from_slice(bytes, config())?;

    if envelope.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(envelope.version));
    }
    if read != bytes.len() {
        return Err(PersistError::Corrupt(format!(
            "{} trailing bytes after library",
            bytes.len() - read
        )));
    }

    let mut library = envelope.library;
    library.check_integrity().map_err(PersistError::Corrupt)?;
    let pruned = library.prune_orphans();
    if pruned > 0 {
        tracing::warn!(pruned, "dropped photos not referenced by any album");
    }
    Ok(library)
}

/// Write the whole library to `path`, replacing the previous store atomically
///
/// # Errors
///
/// Returns `PersistError` if encoding, writing, or the final rename fails.
/// The file at `path` is untouched in every error case.
pub fn save(library: &Library, path: &Path) -> Result<(), PersistError> {
    let bytes = encode(library)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    tracing::debug!(
        path = %path.display(),
        albums = library.album_count(),
        bytes = bytes.len(),
        "saved library"
    );
    Ok(())
}

/// Read the library stored at `path`
///
/// Returns `Ok(None)` when no store exists yet.
///
/// # Errors
///
/// Returns `PersistError` if the file exists but cannot be read or decoded.
pub fn try_load(path: &Path) -> Result<Option<Library>, PersistError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    decode(&bytes).map(Some)
}

/// Read the library stored at `path`, falling back to an empty one
///
/// A missing store is the first-run case. An unreadable store is logged and
/// discarded: the session starts empty and the next save overwrites it.
#[must_use]
pub fn load_or_default(path: &Path) -> Library {
    match try_load(path) {
        Ok(Some(library)) => {
            tracing::info!(
                path = %path.display(),
                albums = library.album_count(),
                "loaded library"
            );
            library
        }
        Ok(None) => {
            tracing::info!(path = %path.display(), "no saved data found, starting empty");
            Library::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "error loading data, starting empty");
            Library::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlbumId, PhotoId, Tag};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    /// Field-for-field stand-in for the stored layout, free of the checks
    /// the library API enforces
    #[derive(Serialize)]
    struct RawStore {
        version: u32,
        albums: BTreeMap<AlbumId, (String, Vec<PhotoId>)>,
        photos: BTreeMap<PhotoId, (String, String, Vec<Tag>)>,
        next_album: u64,
        next_photo: u64,
    }

    impl RawStore {
        fn one_photo(album_photos: Vec<PhotoId>, tags: Vec<Tag>) -> Self {
            let photo = PhotoId::new(0);
            Self {
                version: FORMAT_VERSION,
                albums: BTreeMap::from([(AlbumId::new(0), ("Arcade".to_string(), album_photos))]),
                photos: BTreeMap::from([(photo, ("Pac-Man".to_string(), "/p.jpg".to_string(), tags))]),
                next_album: 1,
                next_photo: 1,
            }
        }

        fn encode(&self) -> Vec<u8> {
            bincode::serde::encode_to_vec(self, bincode::config::standard()).unwrap()
        }
    }

    fn sample_library() -> Library {
        let mut library = Library::new();
        let arcade = library.create_album("Arcade").unwrap();
        library.add_samples(arcade).unwrap();
        let trips = library.create_album("Trips").unwrap();
        let beach = library.add_photo(trips, "Beach", "/sdcard/beach.jpg").unwrap();
        library
            .add_tag(beach, Tag::new("Location", "Coast").unwrap())
            .unwrap();
        library
    }

    fn summary(library: &Library) -> Vec<(String, Vec<(String, Vec<String>)>)> {
        library
            .albums()
            .map(|(id, album)| {
                let photos = library
                    .photos_in(id)
                    .map(|(_, p)| (p.locator().to_string(), p.tags_as_strings()))
                    .collect();
                (album.name().to_string(), photos)
            })
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        let library = sample_library();

        save(&library, &path).unwrap();
        let loaded = try_load(&path).unwrap().unwrap();
        assert_eq!(summary(&loaded), summary(&library));
    }

    #[test]
    fn test_ids_keep_advancing_after_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        let library = sample_library();
        save(&library, &path).unwrap();

        let mut loaded = try_load(&path).unwrap().unwrap();
        let new_album = loaded.create_album("New").unwrap();
        assert!(library.album(new_album).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(try_load(&dir.path().join("absent.bin")).unwrap().is_none());
        assert!(load_or_default(&dir.path().join("absent.bin")).is_empty());
    }

    #[test]
    fn test_garbage_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, b"\xff\xfe definitely not a library").unwrap();

        assert!(try_load(&path).is_err());
        assert!(load_or_default(&path).is_empty());
    }

    #[test]
    fn test_truncated_store_is_rejected() {
        let bytes = encode(&sample_library()).unwrap();
        assert!(decode(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_trailing_bytes_are_corrupt() {
        let mut bytes = encode(&sample_library()).unwrap();
        bytes.extend_from_slice(b"junk");
        assert!(matches!(decode(&bytes), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_raw_store_matches_layout() {
        let photo = PhotoId::new(0);
        let bytes = RawStore::one_photo(vec![photo], vec![Tag::new("Person", "Pac-Man").unwrap()]).encode();
        let library = decode(&bytes).unwrap();
        assert_eq!(library.album_count(), 1);
        assert_eq!(library.photo(photo).unwrap().tags().len(), 1);
    }

    #[test]
    fn test_album_listing_a_photo_twice_is_corrupt() {
        let photo = PhotoId::new(0);
        let bytes = RawStore::one_photo(vec![photo, photo], Vec::new()).encode();
        assert!(matches!(decode(&bytes), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_photo_with_repeated_tag_is_corrupt() {
        let tag = Tag::new("Person", "Pac-Man").unwrap();
        let bytes = RawStore::one_photo(vec![PhotoId::new(0)], vec![tag.clone(), tag]).encode();
        assert!(matches!(decode(&bytes), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_oversized_length_prefix_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);

        for len in [u64::MAX, 1 << 62] {
            // version 1, one album with id 0, then a name claiming `len` bytes
            let mut bytes = vec![0x01, 0x01, 0x00, 253];
            bytes.extend_from_slice(&len.to_le_bytes());
            bytes.extend_from_slice(b"abc");

            assert!(decode(&bytes).is_err());
            fs::write(&path, &bytes).unwrap();
            assert!(load_or_default(&path).is_empty());
        }
    }

    #[test]
    fn test_foreign_version_is_rejected() {
        #[derive(Serialize)]
        struct Future<'a> {
            version: u32,
            library: &'a Library,
        }
        let library = Library::new();
        let bytes = bincode::serde::encode_to_vec(
            &Future { version: 99, library: &library },
            bincode::config::standard(),
        )
        .unwrap();
        assert!(matches!(decode(&bytes), Err(PersistError::UnsupportedVersion(99))));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(STORE_FILE);
        save(&Library::new(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        save(&sample_library(), &path).unwrap();
        let before = fs::read(&path).unwrap();

        // A directory where the parent should be makes the save fail.
        let blocked = path.join("child.bin");
        assert!(save(&Library::new(), &blocked).is_err());
        assert_eq!(fs::read(&path).unwrap(), before);
    }
}
