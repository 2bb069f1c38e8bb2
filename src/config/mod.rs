//! Configuration module for albumr
//!
//! Manages application configuration: where the store file lives, which tag
//! types are offered, where bundled resources are found, and log filtering.
//! Configuration is stored in the user's config directory and can be
//! overridden with `ALBUMR_*` environment variables.

use crate::model::{DEFAULT_TAG_TYPES, same_tag_type};
use crate::store::persist::STORE_FILE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Keys accepted by `config get` / `config set`
pub const KEYS: [&str; 5] = ["store_path", "quiet", "tag_types", "resource_dir", "log_filter"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AlbumrConfig {
    /// Store file location; defaults to the user data directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Tag types offered when tagging; empty allows any type
    #[serde(default = "default_tag_types")]
    pub tag_types: Vec<String>,

    /// Directory holding bundled resources for `/drawable/<name>` locators
    #[serde(default)]
    pub resource_dir: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `albumr=debug`
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_tag_types() -> Vec<String> {
    DEFAULT_TAG_TYPES.iter().map(|t| (*t).to_string()).collect()
}

impl Default for AlbumrConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            quiet: false,
            tag_types: default_tag_types(),
            resource_dir: None,
            log_filter: None,
        }
    }
}

impl AlbumrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("albumr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
        }

        Self::load_from(config_path)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.into()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("ALBUMR")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("tag_types"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolved store file location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("albumr").join(STORE_FILE))
    }

    /// Whether a tag type may be used, ignoring case
    #[must_use]
    pub fn allows_tag_type(&self, tag_type: &str) -> bool {
        self.tag_types.is_empty()
            || self
                .tag_types
                .iter()
                .any(|t| same_tag_type(t, tag_type))
    }

    /// The configured spelling of a tag type, e.g. `location` -> `Location`
    #[must_use]
    pub fn canonical_tag_type(&self, tag_type: &str) -> String {
        let tag_type = tag_type.trim();
        self.tag_types
            .iter()
            .find(|t| same_tag_type(t, tag_type))
            .cloned()
            .unwrap_or_else(|| tag_type.to_string())
    }

    /// Render a key for `config get`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let display = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        match key {
            "store_path" => Some(display(&self.store_path)),
            "quiet" => Some(self.quiet.to_string()),
            "tag_types" => Some(self.tag_types.join(",")),
            "resource_dir" => Some(display(&self.resource_dir)),
            "log_filter" => Some(self.log_filter.clone().unwrap_or_default()),
            _ => None,
        }
    }

    /// Apply a `key=value` setting in memory
    ///
    /// An empty value clears optional settings.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown keys or unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        let optional_path = |v: &str| (!v.is_empty()).then(|| PathBuf::from(v));
        match key {
            "store_path" => self.store_path = optional_path(value),
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    format!("Invalid value for quiet: '{value}'. Use 'true' or 'false'")
                })?;
            }
            "tag_types" => {
                self.tag_types = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "resource_dir" => self.resource_dir = optional_path(value),
            "log_filter" => self.log_filter = (!value.is_empty()).then(|| value.to_string()),
            _ => {
                return Err(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AlbumrConfig::default();
        assert!(config.store_path.is_none());
        assert!(!config.quiet);
        assert_eq!(config.tag_types, vec!["Location", "Person"]);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "store_path = \"/tmp/albums.bin\"\nquiet = true\ntag_types = [\"Event\"]\n",
        )
        .unwrap();

        let config = AlbumrConfig::load_from(&path).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/albums.bin")));
        assert!(config.quiet);
        assert_eq!(config.tag_types, vec!["Event"]);
        assert!(config.resource_dir.is_none());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = false\n").unwrap();

        let config = AlbumrConfig::load_from(&path).unwrap();
        assert_eq!(config.tag_types, default_tag_types());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AlbumrConfig::default();
        config.resource_dir = Some(PathBuf::from("/opt/albumr/drawable"));
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AlbumrConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_store_path_override() {
        let mut config = AlbumrConfig::default();
        config.store_path = Some(PathBuf::from("/tmp/x.bin"));
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/x.bin"));
    }

    #[test]
    fn test_allows_tag_type() {
        let mut config = AlbumrConfig::default();
        assert!(config.allows_tag_type("location"));
        assert!(!config.allows_tag_type("Event"));
        assert_eq!(config.canonical_tag_type("person"), "Person");

        config.tag_types.clear();
        assert!(config.allows_tag_type("Event"));
        assert_eq!(config.canonical_tag_type(" Event "), "Event");
    }

    #[test]
    fn test_tag_type_lookup_folds_non_ascii() {
        let mut config = AlbumrConfig::default();
        config.tag_types = vec!["Événement".to_string()];
        assert!(config.allows_tag_type("ÉVÉNEMENT"));
        assert!(config.allows_tag_type("événement"));
        assert_eq!(config.canonical_tag_type("ÉVÉNEMENT"), "Événement");
    }

    #[test]
    fn test_set_and_get() {
        let mut config = AlbumrConfig::default();
        config.set("quiet", "true").unwrap();
        config.set("tag_types", "Location, Person ,Event").unwrap();
        config.set("resource_dir", "/res").unwrap();

        assert_eq!(config.get("quiet").as_deref(), Some("true"));
        assert_eq!(config.get("tag_types").as_deref(), Some("Location,Person,Event"));
        assert_eq!(config.get("resource_dir").as_deref(), Some("/res"));

        config.set("resource_dir", "").unwrap();
        assert!(config.resource_dir.is_none());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = AlbumrConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_none());
    }
}
