//! Error types for clike-styler

use thiserror::Error;

/// Result type alias for styler operations
pub type Result<T> = std::result::Result<T, StylerError>;

/// Styler error types
///
/// Styling itself never fails; these cover the surfaces around it
/// (configuration, file access, buffer edits).
#[derive(Error, Debug)]
pub enum StylerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid language file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{0}")]
    Usage(String),

    #[error("Offset {offset} is outside the buffer (length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },
}
