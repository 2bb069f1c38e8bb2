//! Album commands

use super::{Result, apply, find_album};
use crate::cli::AlbumCommands;
use crate::store::Session;
use crate::view::{ListState, album_rows, photo_rows};
use crate::{AlbumrError, output};
use dialoguer::Confirm;
use std::io;

/// Execute an album subcommand
///
/// # Errors
/// Returns an error if an album is not found, a name is rejected, or output fails
pub fn execute(session: &mut Session, command: &AlbumCommands, quiet: bool) -> Result<()> {
    match command {
        AlbumCommands::List { expand, json } => list(session, expand.as_deref(), *json, quiet),
        AlbumCommands::Create { name, samples } => {
            let id = apply(session, |library| library.create_album(name))?;
            let added = if *samples {
                apply(session, |library| library.add_samples(id))?
            } else {
                0
            };
            if !quiet {
                let name = session.library().album(id).map_or("", |a| a.name());
                let mut message = format!("Created album '{name}'");
                if *samples {
                    message.push_str(&format!(" with {added} sample photo(s)"));
                }
                println!("{}", output::success(&message));
            }
            Ok(())
        }
        AlbumCommands::Rename { album, new_name } => {
            let id = find_album(session.library(), album)?;
            apply(session, |library| library.rename_album(id, new_name))?;
            if !quiet {
                println!("Renamed '{}' to '{}'", album.trim(), new_name.trim());
            }
            Ok(())
        }
        AlbumCommands::Delete { album, yes } => {
            let id = find_album(session.library(), album)?;
            let count = session.library().album(id).map_or(0, |a| a.photo_count());

            if !yes && !quiet {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete album '{}' and its {count} photo(s)?",
                        album.trim()
                    ))
                    .default(false)
                    .interact()
                    .map_err(io::Error::other)?;
                if !confirmed {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            session.update(|library| library.remove_album(id));
            if !quiet {
                println!("Deleted album '{}'", album.trim());
            }
            Ok(())
        }
        AlbumCommands::Show { album, json } => {
            let id = find_album(session.library(), album)?;
            let rows = photo_rows(session.library(), id);
            if *json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }
            if rows.is_empty() {
                if !quiet {
                    println!("Album '{}' is empty", album.trim());
                }
                return Ok(());
            }
            if !quiet {
                println!("{}", output::heading(album.trim()));
            }
            for row in &rows {
                println!("{}", output::photo_row(row, quiet));
            }
            Ok(())
        }
    }
}

fn list(session: &Session, expand: Option<&str>, json: bool, quiet: bool) -> Result<()> {
    let library = session.library();
    let rows = album_rows(library);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut state = ListState::default();
    if let Some(name) = expand {
        let index = rows
            .iter()
            .position(|row| row.name == name.trim())
            .ok_or_else(|| AlbumrError::InvalidInput(format!("Album '{}' not found", name.trim())))?;
        state.toggle_expanded(index);
        state.select(Some(index));
    }

    if rows.is_empty() {
        if !quiet {
            println!("No albums yet. Create one with 'albumr album create <name>'");
        }
        return Ok(());
    }

    for (row, flags) in rows.iter().zip(state.rows(rows.len())) {
        let line = output::album_row(row, quiet);
        if flags.selected && !quiet {
            println!("{}", output::heading(&line));
        } else {
            println!("{line}");
        }
        if flags.expanded {
            for photo in photo_rows(library, row.id) {
                println!("  {}", output::photo_row(&photo, quiet));
            }
        }
    }
    Ok(())
}
