//! Configuration loading with layered overrides.
//!
//! Config is loaded in order (each layer overrides the previous):
//! 1. Default values
//! 2. Config file (TOML)
//! 3. Environment variables
//! 4. Explicit overrides (typically CLI arguments of the host tool)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Route-docs configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schema: Schema,
}

/// Options controlling how metadata is written into JSON schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Replace descriptions already present in the schema (e.g. from doc
    /// comments) with registered ones.
    #[serde(default)]
    pub overwrite_descriptions: bool,

    /// Emit `readOnly: true` for read-only fields.
    #[serde(default = "default_emit_read_only")]
    pub emit_read_only: bool,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            overwrite_descriptions: false,
            emit_read_only: default_emit_read_only(),
        }
    }
}

fn default_emit_read_only() -> bool {
    true
}

/// Builder for loading configuration with customizable options.
#[derive(Debug, Clone)]
pub struct Loader {
    /// Environment variable prefix (e.g., "MYAPP" -> MYAPP_EMIT_READ_ONLY)
    pub env_prefix: String,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            env_prefix: "ROUTE_DOCS".to_string(),
        }
    }
}

impl Loader {
    /// Create a new config loader with the given environment prefix.
    pub fn new(env_prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: env_prefix.into(),
        }
    }

    /// Load configuration from file, environment, and explicit overrides.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to TOML config file
    /// * `overwrite_descriptions` - Override for `schema.overwrite_descriptions`
    /// * `emit_read_only` - Override for `schema.emit_read_only`
    pub fn load(
        &self,
        config_path: Option<&Path>,
        overwrite_descriptions: Option<bool>,
        emit_read_only: Option<bool>,
    ) -> crate::Result<Config> {
        let mut config: Config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?
        } else {
            Config::default()
        };

        let prefix = &self.env_prefix;

        if let Some(v) = env_flag(&format!("{prefix}_OVERWRITE_DESCRIPTIONS")) {
            config.schema.overwrite_descriptions = v;
        }
        if let Some(v) = env_flag(&format!("{prefix}_EMIT_READ_ONLY")) {
            config.schema.emit_read_only = v;
        }

        if let Some(v) = overwrite_descriptions {
            config.schema.overwrite_descriptions = v;
        }
        if let Some(v) = emit_read_only {
            config.schema.emit_read_only = v;
        }

        Ok(config)
    }
}

/// Read a boolean environment variable. Unparsable values are ignored.
fn env_flag(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(var = name, value = %raw, "ignoring unparsable boolean");
            None
        }
    }
}
