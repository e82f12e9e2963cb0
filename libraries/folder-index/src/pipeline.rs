//! Full reindex run: scan → plan → apply → renumber

use crate::{
    applier, planner, scanner, Folder, FolderSummary, IndexError, IndexOptions, IndexSummary,
    Media, PathMapping, Result,
};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(IndexError::FileNotFound(root.display().to_string()));
    }

    if !root.is_dir() {
        return Err(IndexError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    Ok(())
}

/// Compute the mapping a run would apply, without touching the filesystem
pub fn plan_index(root: &Path, options: &IndexOptions) -> Result<PathMapping> {
    validate_root(root)?;
    planner::plan_media_paths(root, &options.various_artists_name)
}

/// Rewrite every file under `root` to its canonical name
fn normalize_filenames(root: &Path) -> Result<usize> {
    let mut renamed = 0;
    for folder in scanner::get_folders(root)? {
        for file in scanner::get_folder_files(folder.path())? {
            if Media::new(file).rename_update()? {
                renamed += 1;
            }
        }
    }
    Ok(renamed)
}

/// Folders under `root`, titled after the mapping where one is a destination
///
/// A destination folder is named exactly after its artist key, so its
/// whole name is the title even when it ends in `" (<digits>)"`.
fn titled_folders(root: &Path, mapping: &PathMapping) -> Result<Vec<Folder>> {
    let destinations: BTreeSet<&OsStr> = mapping
        .values()
        .filter_map(|target| target.parent()?.file_name())
        .collect();

    let mut folders = Vec::new();
    for folder in scanner::get_folders(root)? {
        let is_destination = folder
            .path()
            .file_name()
            .is_some_and(|name| destinations.contains(name));

        if is_destination {
            let title = folder.name()?.to_string();
            folders.push(Folder::with_title(folder.path(), title));
        } else {
            folders.push(folder);
        }
    }
    Ok(folders)
}

/// Reindex `root` into one folder per artist, each named with its count
///
/// All state is read back from the filesystem, so a run interrupted
/// partway can be repeated on the same root. Folders left empty after the
/// moves are removed before renumbering.
pub fn update_index(root: &Path, options: &IndexOptions) -> Result<IndexSummary> {
    validate_root(root)?;
    tracing::info!("Reindexing {}", root.display());

    let renamed_files = if options.normalize_filenames {
        normalize_filenames(root)?
    } else {
        0
    };

    let mapping = planner::plan_media_paths(root, &options.various_artists_name)?;
    let stats = applier::apply_media_paths_with(&mapping, options.collision_policy)?;
    let emptied = applier::remove_empty_folders(root)?;

    let mut folders = titled_folders(root, &mapping)?;
    applier::reindex_folders(&mut folders)?;

    let mut summaries = Vec::with_capacity(folders.len());
    for folder in &folders {
        summaries.push(FolderSummary {
            name: folder.name()?.to_string(),
            count: folder.get_counter()?,
        });
    }
    summaries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(IndexSummary {
        root: root.to_path_buf(),
        renamed_files,
        moved_files: stats.moved,
        collisions: stats.collisions,
        created_folders: stats.created_folders,
        removed_folders: stats.removed_folders + emptied,
        folders: summaries,
    })
}
