//! Albumr - A photo album organizer with typed tags
//!
//! This library provides a collection of named albums holding photos, typed
//! `Type: Value` tags on photos, moving photos between albums, a one- or
//! two-clause AND/OR tag search across the whole collection, and
//! whole-collection persistence to a single store file.
//!
//! The entry point for most callers is [`store::Session`], which owns the
//! [`store::Library`] and saves it after each change.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod output;
pub mod resolve;
pub mod search;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AlbumrError {
    /// Rejected library operation
    #[error("{0}")]
    Library(#[from] store::LibraryError),
    /// Store file could not be read or written
    #[error("Store error: {0}")]
    Persist(#[from] store::PersistError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Image could not be encoded or written
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
