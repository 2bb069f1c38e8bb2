//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for albumr using the `clap` crate.
//! Albums are addressed by name and photos by locator, both of which are
//! unique within a library.
//!
//! # Commands
//!
//! - **album**: list, create, rename, delete and show albums (default: list)
//! - **photo**: add, remove, move, caption, relocate, show and render photos
//! - **tag**: add and remove `Type: Value` tags, list tags and tag types
//! - **search**: find photos by one or two tag clauses
//! - **config**: get and set configuration values
//!
//! # Examples
//!
//! ```no_run
//! use albumr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Search { clauses, .. } => println!("{} clause(s)", clauses.len()),
//!     _ => {}
//! }
//! ```

use crate::search::SearchMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How two search clauses combine
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Both clauses must match (AND)
    #[default]
    All,
    /// Either clause may match (OR)
    Any,
}

impl From<MatchMode> for SearchMode {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::All => Self::All,
            MatchMode::Any => Self::Any,
        }
    }
}

/// Album subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AlbumCommands {
    /// List all albums
    #[command(visible_alias = "ls")]
    List {
        /// Expand one album to show its photos
        #[arg(short = 'e', long = "expand", value_name = "ALBUM")]
        expand: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new, empty album
    Create {
        /// Album name
        #[arg(value_name = "NAME")]
        name: String,

        /// Fill the album with the bundled sample photos
        #[arg(long)]
        samples: bool,
    },

    /// Rename an album
    Rename {
        /// Current album name
        #[arg(value_name = "ALBUM")]
        album: String,

        /// New album name
        #[arg(value_name = "NEW_NAME")]
        new_name: String,
    },

    /// Delete an album; photos held by no other album are deleted with it
    #[command(visible_alias = "rm")]
    Delete {
        /// Album name
        #[arg(value_name = "ALBUM")]
        album: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Show the photos in an album
    Show {
        /// Album name
        #[arg(value_name = "ALBUM")]
        album: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Photo subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PhotoCommands {
    /// Add a photo to an album
    Add {
        /// Album name
        #[arg(value_name = "ALBUM")]
        album: String,

        /// Image locator: a path, a `file://` URI, `/drawable/<name>` or a resource id
        #[arg(value_name = "LOCATOR")]
        locator: String,

        /// Caption (defaults to `Photo N`)
        #[arg(short = 'c', long = "caption", value_name = "CAPTION")]
        caption: Option<String>,
    },

    /// Remove a photo from an album
    #[command(visible_alias = "rm")]
    Remove {
        /// Album name
        #[arg(value_name = "ALBUM")]
        album: String,

        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,
    },

    /// Move a photo from one album to another
    #[command(visible_alias = "mv")]
    Move {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// Album the photo is in now
        #[arg(value_name = "FROM")]
        from: String,

        /// Album to move it to
        #[arg(value_name = "TO")]
        to: String,
    },

    /// Change a photo's caption
    Caption {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// New caption
        #[arg(value_name = "CAPTION")]
        caption: String,
    },

    /// Point a photo at a different image
    Relocate {
        /// Current photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// New locator
        #[arg(value_name = "NEW_LOCATOR")]
        locator: String,
    },

    /// Show a photo's details, positioned within an album
    Show {
        /// Photo locator (defaults to the album's first photo)
        #[arg(value_name = "LOCATOR")]
        photo: Option<String>,

        /// Album to step through
        #[arg(short = 'a', long = "album", value_name = "ALBUM")]
        album: Option<String>,
    },

    /// Write a photo's thumbnail (or full image) to a file
    Thumbnail {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// Output image file; the format follows the extension
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: PathBuf,

        /// Write the full-size image instead of the thumbnail
        #[arg(long)]
        full: bool,
    },
}

/// Tag subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagCommands {
    /// Add a tag to a photo
    Add {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// Tag type, e.g. Location
        #[arg(value_name = "TYPE")]
        tag_type: String,

        /// Tag value, e.g. Maze
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Remove a tag from a photo
    #[command(visible_alias = "rm")]
    Remove {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,

        /// Tag type
        #[arg(value_name = "TYPE")]
        tag_type: String,

        /// Tag value
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// List a photo's tags
    #[command(visible_alias = "ls")]
    List {
        /// Photo locator
        #[arg(value_name = "LOCATOR")]
        photo: String,
    },

    /// List tag types, configured and in use
    Types,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `tag_types`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage albums
    #[command(visible_alias = "a")]
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },

    /// Manage photos
    #[command(visible_alias = "p")]
    Photo {
        #[command(subcommand)]
        command: PhotoCommands,
    },

    /// Manage photo tags
    #[command(visible_alias = "t")]
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Find photos by tag: TYPE=QUERY, optionally twice
    #[command(visible_alias = "s")]
    Search {
        /// One or two clauses; the query is a case-insensitive substring and may be empty
        #[arg(value_name = "TYPE[=QUERY]", num_args = 1..=2, required = true)]
        clauses: Vec<String>,

        /// How two clauses combine
        #[arg(short = 'm', long = "mode", value_enum, default_value_t = MatchMode::All)]
        mode: MatchMode,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Albumr: organize photos into albums and find them by tag
#[derive(Parser, Debug)]
#[command(name = "albumr", version)]
pub struct Cli {
    /// Store file to use instead of the configured one
    #[arg(long = "store", value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    /// Only print results
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// More diagnostic output on stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to listing albums if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Album {
            command: AlbumCommands::List {
                expand: None,
                json: false,
            },
        })
    }
}
