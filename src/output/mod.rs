//! Output formatting for CLI display
//!
//! Formats album rows, photo rows and tags for the terminal. Quiet mode
//! prints the bare value only, for scripting.

use crate::model::Tag;
use crate::view::{AlbumRow, PhotoRow};
use colored::Colorize;

/// Format an album with its photo count
#[must_use]
pub fn album_row(row: &AlbumRow, quiet: bool) -> String {
    if quiet {
        row.name.clone()
    } else {
        format!(
            "  {} {}",
            row.name.bold(),
            format!("({} photo{})", row.photo_count, plural(row.photo_count)).dimmed()
        )
    }
}

/// Format a photo with its tags
#[must_use]
pub fn photo_row(row: &PhotoRow, quiet: bool) -> String {
    if quiet {
        row.locator.clone()
    } else if row.tags.is_empty() {
        format!("  {} {} (no tags)", row.caption.cyan(), row.locator.dimmed())
    } else {
        format!(
            "  {} {} [{}]",
            row.caption.cyan(),
            row.locator.dimmed(),
            row.tags.join(", ")
        )
    }
}

/// `Location: Maze` with the type highlighted
#[must_use]
pub fn tag(tag: &Tag) -> String {
    format!("{}: {}", tag.tag_type().yellow(), tag.value())
}

/// Format a tag type with how many photos use it
#[must_use]
pub fn tag_type_with_count(tag_type: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag_type.to_string()
    } else {
        format!("  {} (used by {count} photo{})", tag_type.yellow(), plural(count))
    }
}

/// Section heading, e.g. a cursor title
#[must_use]
pub fn heading(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Green confirmation line
#[must_use]
pub fn success(text: &str) -> String {
    text.green().to_string()
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
