//! Planning of the artist-indexed layout
//!
//! Computes where every file under a root should live without touching
//! the filesystem. The mapping is consumed by
//! [`apply_new_media_paths`](crate::apply_new_media_paths).

use crate::{scanner, IndexError, Media, Result, VARIOUS_ARTISTS_NAME};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Original file path → target file path, one entry per source file
pub type PathMapping = BTreeMap<PathBuf, PathBuf>;

/// Destination group for a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtistKey {
    Artist(String),
    /// Files without an artist tag, from every source folder
    VariousArtists,
}

impl ArtistKey {
    /// Group for a file name, failing on ambiguous tags
    pub fn for_file_name(file_name: &str) -> Result<Self> {
        match crate::get_artist(file_name)? {
            Some(artist) => {
                validate_folder_name(&artist)?;
                Ok(ArtistKey::Artist(artist))
            }
            None => Ok(ArtistKey::VariousArtists),
        }
    }

    /// Directory name this group is collected into
    pub fn folder_name<'a>(&'a self, various_artists_name: &'a str) -> &'a str {
        match self {
            ArtistKey::Artist(name) => name,
            ArtistKey::VariousArtists => various_artists_name,
        }
    }
}

fn validate_folder_name(name: &str) -> Result<()> {
    if name == "." || name == ".." || name.chars().any(std::path::is_separator) {
        return Err(IndexError::InvalidArtist(name.to_string()));
    }
    Ok(())
}

/// Plan the new location of every file under `root`
///
/// Untagged files go to [`VARIOUS_ARTISTS_NAME`].
pub fn get_updated_media_paths(root: &Path) -> Result<PathMapping> {
    plan_media_paths(root, VARIOUS_ARTISTS_NAME)
}

/// Plan the new location of every file under `root`
///
/// The target of each file is `root / artist / file_name`, with untagged
/// files collected under `various_artists_name`.
pub fn plan_media_paths(root: &Path, various_artists_name: &str) -> Result<PathMapping> {
    let mut mapping = PathMapping::new();

    for folder in scanner::get_folders(root)? {
        for file in scanner::get_folder_files(folder.path())? {
            let media = Media::new(file);
            let file_name = media.file_name()?;
            let key = ArtistKey::for_file_name(file_name)?;

            let target = root.join(key.folder_name(various_artists_name)).join(file_name);
            tracing::debug!(
                "Planned {} -> {}",
                media.path().display(),
                target.display()
            );
            mapping.insert(media.path().to_path_buf(), target);
        }
    }

    tracing::info!(
        "Planned {} file moves under {}",
        mapping.len(),
        root.display()
    );

    Ok(mapping)
}

/// Number of files planned per destination folder
pub fn group_counts(mapping: &PathMapping) -> BTreeMap<PathBuf, usize> {
    let mut counts = BTreeMap::new();
    for target in mapping.values() {
        if let Some(parent) = target.parent() {
            *counts.entry(parent.to_path_buf()).or_insert(0) += 1;
        }
    }
    counts
}
