//! maxo_options: maxo.json parsing and lexer options.
//!
//! Parses maxo.json files and provides the LexerOptions structure consumed
//! by the lexer and the CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The name of the config file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "maxo.json";

/// Options controlling a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexerOptions {
    /// How many items the producer may run ahead of the consumer.
    pub buffer_capacity: usize,
    /// Longest pending segment, in bytes, before the scan fails.
    pub max_segment_length: Option<usize>,
}

impl LexerOptions {
    /// The capacity of the item stream. Never less than one.
    pub fn effective_buffer_capacity(&self) -> usize {
        self.buffer_capacity.max(1)
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_max_segment_length(mut self, max: usize) -> Self {
        self.max_segment_length = Some(max);
        self
    }
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 1,
            max_segment_length: None,
        }
    }
}

/// The maxo.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxoConfig {
    pub lexer_options: Option<LexerOptions>,
}

impl MaxoConfig {
    /// The configured lexer options, or the defaults.
    pub fn lexer_options(&self) -> LexerOptions {
        self.lexer_options.clone().unwrap_or_default()
    }
}

/// Failure to load a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a maxo.json file from a string.
pub fn parse_config(content: &str) -> Result<MaxoConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a maxo.json file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<MaxoConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Json {
        path: display,
        source,
    })
}
