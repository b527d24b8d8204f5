//! Error types for the glossing pipeline
//!
//! `GlossError` covers everything that aborts a request before any output is
//! produced. `StorageError` is kept apart because a failed document write does
//! not invalidate the HTML that was already rendered.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error for the glossing entry points
#[derive(Debug, Clone, Error)]
pub enum GlossError {
    /// Unknown language code, invalid rule pattern or unreadable configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input rejected before segmentation (empty or whitespace-only)
    #[error("validation error: {0}")]
    Validation(String),

    /// The external analyzer failed or broke its one-list-per-token contract
    #[error("analyzer error: {0}")]
    Analyzer(String),

    /// Template compilation or rendering failed
    #[error("template error: {0}")]
    Template(String),
}

impl GlossError {
    pub fn unknown_language(code: &str) -> Self {
        GlossError::Configuration(format!("unknown language '{}'", code))
    }
}

/// Failure of the document side effect
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Filesystem failure at the output location
    #[error("cannot write {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// The document could not be serialized (XML or container)
    #[error("document serialization failed: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    pub fn serialization<E: std::fmt::Display>(err: E) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GlossError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_message() {
        let err = GlossError::unknown_language("klingon");
        assert_eq!(err.to_string(), "configuration error: unknown language 'klingon'");
    }

    #[test]
    fn test_storage_io_keeps_path() {
        let err = StorageError::io(
            Path::new("/nope/paper.docx"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/nope/paper.docx"));
    }
}
