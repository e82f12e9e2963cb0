//! Folder Index
//!
//! This crate regroups a flat collection of media folders into an
//! artist-indexed layout.
//!
//! # Features
//!
//! - Artist extraction from bracketed filename tags (`song [Artist].mp3`)
//! - Folder file-count annotations (`Artist (3)`) kept in sync with contents
//! - Planning of the old-path → new-path mapping without touching the disk
//! - Applying that mapping with an explicit destination collision policy
//! - A catch-all bucket for files without an artist tag
//!
//! # Architecture
//!
//! - `parser`: Pure filename parsing (artist tags, counter suffixes)
//! - `media`: A single media file and its derived title/artist
//! - `folder`: A directory and its live file counter
//! - `scanner`: One-level listing of folders and files
//! - `planner`: Computes the path mapping for a root
//! - `applier`: Moves files, removes emptied folders, renumbers folders
//! - `pipeline`: scan → plan → apply → renumber in one call

mod error;
mod types;

pub mod applier;
pub mod folder;
pub mod media;
pub mod parser;
pub mod pipeline;
pub mod planner;
pub mod scanner;

pub use applier::{
    apply_media_paths_with, apply_new_media_paths, reindex_folders, remove_empty_folders,
    ApplyStats,
};
pub use error::IndexError;
pub use folder::Folder;
pub use media::Media;
pub use parser::{get_artist, remove_artist, remove_counter};
pub use pipeline::{plan_index, update_index};
pub use planner::{get_updated_media_paths, plan_media_paths, ArtistKey, PathMapping};
pub use scanner::{get_folder_files, get_folders};
pub use types::*;

/// Default name of the catch-all folder for files without an artist tag
pub const VARIOUS_ARTISTS_NAME: &str = "VA";

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, IndexError>;
