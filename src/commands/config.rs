//! Config command

use super::Result;
use crate::AlbumrError;
use crate::cli::ConfigCommands;
use crate::config::AlbumrConfig;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `AlbumrError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
pub fn execute(mut config: AlbumrConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(AlbumrError::InvalidInput(
                    "Invalid format. Use: albumr config set key=value".into(),
                ));
            };
            let key = key.trim();

            config.set(key, value).map_err(AlbumrError::InvalidInput)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key).unwrap_or_default());
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key.trim()).ok_or_else(|| {
                AlbumrError::InvalidInput(format!(
                    "Unknown configuration key: '{}'. Available keys: {}",
                    key.trim(),
                    crate::config::KEYS.join(", ")
                ))
            })?;
            println!("{value}");
        }
    }
    Ok(())
}
