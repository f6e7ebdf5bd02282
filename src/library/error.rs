//! Errors raised while reading content from disk.
//!
//! The merge itself never fails; these only surface from the edges
//! (manual content files, glob patterns).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid asset pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
