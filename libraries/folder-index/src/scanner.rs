//! One-level scanning of a media root

use crate::{Folder, IndexError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Direct children of `path`, sorted by file name
fn children(path: &Path) -> Result<Vec<walkdir::DirEntry>> {
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    walker
        .into_iter()
        .map(|entry| entry.map_err(into_index_error))
        .collect()
}

fn into_index_error(err: walkdir::Error) -> IndexError {
    let path = err.path().map(|p| p.display().to_string());
    match err.into_io_error() {
        Some(io) => IndexError::Io(io),
        None => IndexError::InvalidPath(path.unwrap_or_default()),
    }
}

/// One [`Folder`] per direct subdirectory of `root`
///
/// Files at the root level are ignored.
pub fn get_folders(root: &Path) -> Result<Vec<Folder>> {
    let folders = children(root)?
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| Folder::new(entry.into_path()))
        .collect();

    Ok(folders)
}

/// Every direct file inside `folder_path`
///
/// Subdirectories are ignored.
pub fn get_folder_files(folder_path: &Path) -> Result<Vec<PathBuf>> {
    let files = children(folder_path)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}
