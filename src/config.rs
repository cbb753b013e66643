//! Configuration management and validation.
//!
//! Layered loading in three steps: built-in defaults, then an optional TOML
//! file, then CLI argument overrides applied by the command layer. Every
//! section has serde defaults so a partial config file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_KEEP_GENERATIONS, DEFAULT_PARISH_CODE_PREFIX,
    DEFAULT_STORE_DIR, DEFAULT_ZONE_CODE_PREFIX,
};
use crate::{Error, Result};

/// Top-level configuration for the importer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store location and retention settings
    pub store: StoreConfig,

    /// Code prefixes for generated identifiers
    pub codes: CodeConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Store location and retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory of the JSON store
    pub root: PathBuf,

    /// Generations retained after a commit (the live one always survives)
    pub keep_generations: usize,

    /// Pretty-print committed JSON snapshots
    pub pretty_json: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORE_DIR),
            keep_generations: DEFAULT_KEEP_GENERATIONS,
            pretty_json: true,
        }
    }
}

/// Code prefixes for generated identifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    /// Prefix for zone codes
    pub zone_prefix: String,

    /// Prefix for parish codes
    pub parish_prefix: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            zone_prefix: DEFAULT_ZONE_CODE_PREFIX.to_string(),
            parish_prefix: DEFAULT_PARISH_CODE_PREFIX.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with a specific store root
    pub fn with_store_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.store.root = root.into();
        config
    }

    /// Default config file location under the user configuration directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                Error::configuration("Could not determine user configuration directory")
            })
    }

    /// Load configuration: defaults, then the TOML file when one is given.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let Some(path) = config_file else {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&raw).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.store.keep_generations == 0 {
            return Err(Error::configuration(
                "store.keep_generations must be at least 1",
            ));
        }

        validate_prefix(&self.codes.zone_prefix, "codes.zone_prefix")?;
        validate_prefix(&self.codes.parish_prefix, "codes.parish_prefix")?;

        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown logging.level '{}': expected one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Create the store root directory if needed
    pub fn ensure_store_directory(&self) -> Result<()> {
        std::fs::create_dir_all(&self.store.root).map_err(|e| {
            Error::configuration(format!(
                "Failed to create store directory '{}': {}",
                self.store.root.display(),
                e
            ))
        })
    }
}

fn validate_prefix(prefix: &str, what: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(Error::configuration(format!("{} cannot be empty", what)));
    }

    if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::configuration(format!(
            "Invalid {} '{}': expected ASCII letters and digits only",
            what, prefix
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.codes.zone_prefix, "ZP");
        assert_eq!(config.codes.parish_prefix, "PA");
        assert_eq!(config.store.keep_generations, DEFAULT_KEEP_GENERATIONS);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[store]\nroot = \"/tmp/catalog\"\nkeep_generations = 3\n"
        )
        .unwrap();

        let config = Config::load_layered(Some(file.path())).unwrap();

        assert_eq!(config.store.root, PathBuf::from("/tmp/catalog"));
        assert_eq!(config.store.keep_generations, 3);
        // Untouched sections keep their defaults
        assert_eq!(config.codes.zone_prefix, "ZP");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "store = \"not a table\"").unwrap();

        assert!(Config::load_layered(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_retention() {
        let mut config = Config::default();
        config.store.keep_generations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_prefix() {
        let mut config = Config::default();
        config.codes.zone_prefix = "Z P".to_string();
        assert!(config.validate().is_err());

        config.codes.zone_prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_store_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::with_store_root(temp.path().join("nested").join("store"));

        assert!(config.ensure_store_directory().is_ok());
        assert!(config.store.root.exists());
    }
}
