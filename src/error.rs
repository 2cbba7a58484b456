//! Error types for level configuration loading.
//!
//! These are the only fatal errors in the game: they abort startup before
//! any simulation state exists. Scoreboard and settings failures are soft
//! and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or resolving level configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("Parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration document lists no levels at all.
    #[error("Level configuration contains no levels")]
    NoLevels,

    /// The requested level name is not in the document.
    #[error("Unknown level '{0}'")]
    UnknownLevel(String),

    /// A level has a field outside its valid range.
    #[error("Invalid level '{level}': {reason}")]
    Invalid { level: String, reason: String },
}
