//! Error types for the folder index

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ambiguous artist in {file_name:?}: found {tags} bracketed tags")]
    AmbiguousArtist { file_name: String, tags: usize },

    #[error("Invalid artist name: {0:?}")]
    InvalidArtist(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
}
