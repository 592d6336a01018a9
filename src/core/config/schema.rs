//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$TAGTREE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/tagtree/config.toml`
//! 3. `~/.tagtree/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., the server URL must be an http(s) URL).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// server_url = "http://localhost:8000/trees"
/// default_document = "tree.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Base URL of the tree store backend
    pub server_url: Option<String>,

    /// Document file used when `--file` is not passed
    pub default_document: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid server_url '{url}': must start with http:// or https://"
                )));
            }
        }

        if let Some(doc) = &self.default_document {
            if doc.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "default_document cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
