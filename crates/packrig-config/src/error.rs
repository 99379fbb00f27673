//! Error types for configuration resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised during configuration resolution.
///
/// All of these are fatal: resolution either fully succeeds or aborts the
/// build before any bundling work starts. There is no retry path anywhere;
/// resolution is deterministic for a fixed host state.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("invalid asset path: {message}")]
    InvalidPath {
        message: String,
        hint: Option<String>,
    },

    #[error("conflicting options for plugin '{plugin}'")]
    MergeConflict { plugin: String },

    #[error("invalid dev server port: {0} (expected 1-65535)")]
    InvalidPort(u32),

    #[error("no entry points specified")]
    NoEntries,

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
