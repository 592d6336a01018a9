//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Tagtree has a single user-scope configuration holding the tree store
//! URL and the default document file.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. `$TAGTREE_SERVER` environment variable (server URL only)
//! 4. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$TAGTREE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/tagtree/config.toml`
//! 3. `~/.tagtree/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use tagtree::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Server: {}", config.server_url());
//! println!("Document: {}", config.default_document());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default tree store URL, matching the backend's local development bind.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/trees";

/// Default working document file.
pub const DEFAULT_DOCUMENT: &str = "tree.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key '{0}'")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
///
/// Accessor methods apply precedence (env override, then file, then
/// default) automatically.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing config file is not an error (defaults
    /// are used).
    pub fn load() -> Result<Self, ConfigError> {
        let (global, loaded_from) = Self::load_global()?;
        global.validate()?;
        Ok(Config {
            global,
            loaded_from,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $TAGTREE_CONFIG
        if let Ok(path) = std::env::var("TAGTREE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/tagtree/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("tagtree/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.tagtree/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".tagtree/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // No config found, use defaults
        Ok((GlobalConfig::default(), None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.tagtree/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".tagtree/config.toml"))
    }

    /// Write the global config atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write (write to
    /// temp file, then rename) to prevent corruption.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(path)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the tree store URL.
    ///
    /// `$TAGTREE_SERVER` overrides the file value; defaults to
    /// `http://localhost:8000/trees`.
    pub fn server_url(&self) -> String {
        if let Ok(url) = std::env::var("TAGTREE_SERVER") {
            if !url.is_empty() {
                return url;
            }
        }
        self.global
            .server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Get the default document file.
    ///
    /// Defaults to `tree.json` if not configured.
    pub fn default_document(&self) -> String {
        self.global
            .default_document
            .clone()
            .unwrap_or_else(|| DEFAULT_DOCUMENT.to_string())
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// Get a config value by key (for `tt config get`).
    pub fn get_key(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "server_url" => Ok(self.server_url()),
            "default_document" => Ok(self.default_document()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Set a config value by key on a schema value (for `tt config set`).
    pub fn set_key(config: &mut GlobalConfig, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "server_url" => config.server_url = Some(value.to_string()),
            "default_document" => config.default_document = Some(value.to_string()),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        config.validate()
    }
}
