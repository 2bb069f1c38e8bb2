//! Albumr CLI application entry point
//!
//! This is the main executable for the albumr photo organizer. It provides a
//! command-line interface for managing albums, photos and tags, and for
//! searching photos by tag.
//!
//! # Usage
//!
//! ```bash
//! # List albums (default command)
//! albumr
//! albumr album list --expand Arcade
//!
//! # Create an album seeded with the sample photos
//! albumr album create Arcade --samples
//!
//! # Add, tag and move photos
//! albumr photo add Holiday ~/Pictures/beach.jpg -c "Beach"
//! albumr tag add ~/Pictures/beach.jpg Location Coast
//! albumr photo move ~/Pictures/beach.jpg Holiday Favourites
//!
//! # Search by one or two tag clauses
//! albumr search Location=maze
//! albumr search Person=pac Location=maze --mode any
//!
//! # Quiet mode (only output results)
//! albumr -q search Location=maze
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/albumr/config.toml` on Linux) and created with defaults on
//! first run.

use albumr::{
    AlbumrError,
    cli::{Cli, Commands},
    commands, config, logging,
    store::Session,
};

type Result<T> = std::result::Result<T, AlbumrError>;

/// Main entry point for the albumr application
///
/// Loads configuration, parses command-line arguments, opens the store, and
/// dispatches to the appropriate command handler. The store is flushed before
/// exit.
///
/// # Errors
///
/// Returns `AlbumrError` if configuration loading fails, any command handler
/// returns an error, or the final save fails.
fn main() -> Result<()> {
    let config = config::AlbumrConfig::load()?;

    let cli = Cli::parse_args();
    logging::init(cli.verbose, config.log_filter.as_deref());

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    tracing::info!(path = %store_path.display(), "opening store");
    let mut session = Session::open(store_path);

    let outcome = match &command {
        Commands::Album { command } => commands::album(&mut session, command, quiet),
        Commands::Photo { command } => commands::photo(&mut session, command, &config, quiet),
        Commands::Tag { command } => commands::tag(&mut session, command, &config, quiet),
        Commands::Search {
            clauses,
            mode,
            json,
        } => commands::search(&session, clauses, (*mode).into(), *json, quiet),
        Commands::Config { .. } => unreachable!(),
    };

    // flush even when the command failed part-way
    session.close()?;
    outcome
}
