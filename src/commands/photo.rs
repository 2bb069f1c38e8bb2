//! Photo commands

use super::{Result, apply, find_album, find_photo};
use crate::cli::PhotoCommands;
use crate::config::AlbumrConfig;
use crate::model::PhotoId;
use crate::resolve::{self, LocatorResolver, THUMBNAIL_SIZE};
use crate::store::{Library, Session};
use crate::view::{Handoff, PhotoCursor};
use crate::{AlbumrError, output};
use std::path::Path;

/// Execute a photo subcommand
///
/// # Errors
/// Returns an error if a photo or album is not found, the library rejects the
/// change, or an image cannot be written
pub fn execute(
    session: &mut Session,
    command: &PhotoCommands,
    config: &AlbumrConfig,
    quiet: bool,
) -> Result<()> {
    match command {
        PhotoCommands::Add {
            album,
            locator,
            caption,
        } => {
            let album_id = find_album(session.library(), album)?;
            let caption = caption.as_deref().unwrap_or_default();
            let id = apply(session, |library| library.add_photo(album_id, caption, locator))?;
            if !quiet {
                let caption = session.library().photo(id).map_or("", |p| p.caption());
                println!("Added '{caption}' to '{}'", album.trim());
            }
            Ok(())
        }
        PhotoCommands::Remove { album, photo } => {
            let album_id = find_album(session.library(), album)?;
            let id = find_photo(session.library(), photo)?;
            if !session.update(|library| library.remove_photo(album_id, id)) {
                return Err(AlbumrError::InvalidInput(format!(
                    "Photo '{}' is not in album '{}'",
                    photo.trim(),
                    album.trim()
                )));
            }
            if !quiet {
                println!("Removed '{}' from '{}'", photo.trim(), album.trim());
            }
            Ok(())
        }
        PhotoCommands::Move { photo, from, to } => {
            let id = find_photo(session.library(), photo)?;
            let from_id = find_album(session.library(), from)?;
            let to_id = find_album(session.library(), to)?;
            apply(session, |library| library.move_photo(id, from_id, to_id))?;
            if !quiet {
                println!(
                    "Moved '{}' from '{}' to '{}'",
                    photo.trim(),
                    from.trim(),
                    to.trim()
                );
            }
            Ok(())
        }
        PhotoCommands::Caption { photo, caption } => {
            let id = find_photo(session.library(), photo)?;
            apply(session, |library| library.set_caption(id, caption))?;
            if !quiet {
                println!("Caption set to '{}'", caption.trim());
            }
            Ok(())
        }
        PhotoCommands::Relocate { photo, locator } => {
            let id = find_photo(session.library(), photo)?;
            apply(session, |library| library.set_locator(id, locator))?;
            if !quiet {
                println!("Relocated '{}' to '{}'", photo.trim(), locator.trim());
            }
            Ok(())
        }
        PhotoCommands::Show { photo, album } => {
            show(session.library(), photo.as_deref(), album.as_deref(), quiet)
        }
        PhotoCommands::Thumbnail {
            photo,
            output,
            full,
        } => {
            let id = find_photo(session.library(), photo)?;
            write_image(session.library(), id, config, output, *full, quiet)
        }
    }
}

fn show(library: &Library, photo: Option<&str>, album: Option<&str>, quiet: bool) -> Result<()> {
    let photo = photo.map(|locator| find_photo(library, locator)).transpose()?;
    let handoff = match album {
        Some(name) => {
            let album_id = find_album(library, name)?;
            let photos = library
                .album(album_id)
                .map(|a| a.photo_ids().to_vec())
                .unwrap_or_default();
            let position = photo
                .and_then(|id| photos.iter().position(|p| *p == id))
                .unwrap_or(0);
            Handoff::List { photos, position }
        }
        None => match photo {
            Some(id) => Handoff::List {
                photos: vec![id],
                position: 0,
            },
            None => {
                return Err(AlbumrError::InvalidInput(
                    "Give a photo locator, an album (--album), or both".into(),
                ));
            }
        },
    };

    let cursor = PhotoCursor::open(handoff, library)
        .ok_or_else(|| AlbumrError::InvalidInput("Nothing to show".into()))?;
    let Some(current) = library.photo(cursor.current()) else {
        return Ok(());
    };

    if quiet {
        println!("{}", current.locator());
        return Ok(());
    }

    println!("{}", output::heading(&cursor.title()));
    println!("  Caption:  {}", current.caption());
    println!("  Locator:  {}", current.locator());
    let albums: Vec<&str> = library
        .albums_containing(cursor.current())
        .into_iter()
        .filter_map(|id| library.album(id).map(|a| a.name()))
        .collect();
    println!("  Albums:   {}", albums.join(", "));
    if current.tags().is_empty() {
        println!("  Tags:     (none)");
    } else {
        let tags: Vec<String> = current.tags().iter().map(output::tag).collect();
        println!("  Tags:     {}", tags.join(", "));
    }

    let mut neighbours = cursor.clone();
    if neighbours.prev() {
        println!("  Previous: {}", caption_of(library, neighbours.current()));
    }
    let mut neighbours = cursor;
    if neighbours.next() {
        println!("  Next:     {}", caption_of(library, neighbours.current()));
    }
    Ok(())
}

fn caption_of(library: &Library, id: PhotoId) -> &str {
    library.photo(id).map_or("", |p| p.caption())
}

fn write_image(
    library: &Library,
    id: PhotoId,
    config: &AlbumrConfig,
    output: &Path,
    full: bool,
    quiet: bool,
) -> Result<()> {
    let mut resolver = LocatorResolver::new();
    if let Some(dir) = &config.resource_dir {
        resolver = resolver.with_resource_dir(dir);
    }

    // work on a copy so the image cache never marks the library dirty
    let Some(mut photo) = library.photo(id).cloned() else {
        return Err(AlbumrError::InvalidInput(format!("Photo {id} not found")));
    };
    let image = if full {
        photo.full_image(&resolver)
    } else {
        photo.thumbnail(&resolver)
    };

    match image {
        Some(image) => image.save(output)?,
        None => {
            tracing::warn!(locator = %photo.locator(), "image unavailable, writing placeholder");
            if !quiet {
                eprintln!("Warning: image for '{}' is unavailable, using a placeholder", photo.locator());
            }
            resolve::placeholder(THUMBNAIL_SIZE).save(output)?;
        }
    }

    if !quiet {
        println!("Wrote {}", output.display());
    }
    Ok(())
}
