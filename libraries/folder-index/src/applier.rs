//! Applying a path mapping to the filesystem

use crate::{parser, scanner, CollisionPolicy, Folder, IndexError, PathMapping, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on `-N` suffixes tried for one colliding file
const MAX_CONFLICT_SUFFIX: usize = 1000;

/// Statistics from applying a mapping
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplyStats {
    pub moved: usize,
    /// Entries whose source already was the target
    pub unchanged: usize,
    /// Files moved under a suffixed name
    pub collisions: usize,
    pub created_folders: usize,
    pub removed_folders: usize,
}

/// Move every file in `mapping` to its target, renaming on collision
///
/// See [`apply_media_paths_with`].
pub fn apply_new_media_paths(mapping: &PathMapping) -> Result<ApplyStats> {
    apply_media_paths_with(mapping, CollisionPolicy::Rename)
}

/// Move every file in `mapping` to its target
///
/// Destination folders are created as needed and may already hold files.
/// Once all files are moved, every source folder left with no entries is
/// removed. Files move one at a time; on error the files already moved
/// stay where they are and a new plan over the same root picks up the rest.
pub fn apply_media_paths_with(mapping: &PathMapping, policy: CollisionPolicy) -> Result<ApplyStats> {
    let mut stats = ApplyStats::default();
    let mut source_dirs = BTreeSet::new();

    for (source, target) in mapping {
        if source == target {
            stats.unchanged += 1;
            continue;
        }

        let parent = target
            .parent()
            .ok_or_else(|| IndexError::InvalidPath(target.display().to_string()))?;
        if !parent.is_dir() {
            fs::create_dir_all(parent)?;
            stats.created_folders += 1;
            tracing::debug!("Created folder {}", parent.display());
        }

        let dest_path = if target.exists() {
            match policy {
                CollisionPolicy::Rename => {
                    let resolved = resolve_filename_conflict(target)?;
                    tracing::warn!(
                        "{} already exists; moving {} to {}",
                        target.display(),
                        source.display(),
                        resolved.display()
                    );
                    stats.collisions += 1;
                    resolved
                }
                CollisionPolicy::Reject => {
                    return Err(IndexError::DestinationExists(target.clone()));
                }
                CollisionPolicy::Overwrite => {
                    tracing::warn!("Overwriting {}", target.display());
                    fs::remove_file(target)?;
                    target.clone()
                }
            }
        } else {
            target.clone()
        };

        fs::rename(source, &dest_path)?;
        stats.moved += 1;
        tracing::debug!("Moved {} -> {}", source.display(), dest_path.display());

        if let Some(dir) = source.parent() {
            source_dirs.insert(dir.to_path_buf());
        }
    }

    for dir in &source_dirs {
        if dir.is_dir() && fs::read_dir(dir)?.next().is_none() {
            fs::remove_dir(dir)?;
            stats.removed_folders += 1;
            tracing::debug!("Removed empty folder {}", dir.display());
        }
    }

    tracing::info!(
        "Moved {} files ({} collisions), created {} folders, removed {} folders",
        stats.moved,
        stats.collisions,
        stats.created_folders,
        stats.removed_folders
    );

    Ok(stats)
}

/// Remove every empty folder directly under `root`
///
/// Runs after the moves so that a stale folder such as an emptied
/// `Artist A (2)` cannot block renumbering `Artist A` to the same name.
/// Returns how many folders were removed.
pub fn remove_empty_folders(root: &Path) -> Result<usize> {
    let mut removed = 0;
    for folder in scanner::get_folders(root)? {
        if fs::read_dir(folder.path())?.next().is_none() {
            fs::remove_dir(folder.path())?;
            removed += 1;
            tracing::debug!("Removed empty folder {}", folder.path().display());
        }
    }
    Ok(removed)
}

/// Find a free path next to `target` by appending a counter to the stem
///
/// "song.mp3" -> "song-1.mp3" -> "song-2.mp3" etc.
fn resolve_filename_conflict(target: &Path) -> Result<PathBuf> {
    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IndexError::InvalidPath(target.display().to_string()))?;
    let (stem, extension) = parser::split_extension(file_name)?;

    for counter in 1..=MAX_CONFLICT_SUFFIX {
        let new_filename = match extension {
            Some(ext) => format!("{}-{}.{}", stem, counter, ext),
            None => format!("{}-{}", stem, counter),
        };

        let new_path = target.with_file_name(&new_filename);
        if !new_path.exists() {
            return Ok(new_path);
        }
    }

    Err(IndexError::DestinationExists(target.to_path_buf()))
}

/// Rename every folder to carry its current entry count
///
/// Returns how many folders were renamed. Running it again without
/// changing folder contents renames nothing.
pub fn reindex_folders(folders: &mut [Folder]) -> Result<usize> {
    let mut renamed = 0;
    for folder in folders.iter_mut() {
        if folder.rename_with_counter()? {
            renamed += 1;
        }
    }

    tracing::info!("Renumbered {} of {} folders", renamed, folders.len());
    Ok(renamed)
}
