//! A media folder and its live entry counter

use crate::{parser, IndexError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory identified by its path
///
/// The counter is read from the filesystem on every call, so it reflects
/// files added or removed since the folder was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    path: PathBuf,
    title: Option<String>,
}

impl Folder {
    /// Wrap an existing directory path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: None,
        }
    }

    /// Wrap a directory whose title is known up front
    ///
    /// Used for folders named after an artist that itself ends in
    /// `" (<digits>)"`, which [`remove_counter`](parser::remove_counter)
    /// would otherwise strip.
    pub fn with_title(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: Some(title.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory name as it is on disk, counter included
    pub fn name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IndexError::InvalidPath(self.path.display().to_string()))
    }

    /// Directory name without its `(N)` counter
    pub fn title(&self) -> Result<String> {
        match &self.title {
            Some(title) => Ok(title.clone()),
            None => Ok(parser::remove_counter(self.name()?).to_string()),
        }
    }

    /// Number of entries directly inside the directory
    pub fn get_counter(&self) -> Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(&self.path)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    /// Rename the directory to `"{title} ({counter})"`
    ///
    /// Returns `true` if the directory was renamed, `false` if the name
    /// already carried the current count.
    pub fn rename_with_counter(&mut self) -> Result<bool> {
        let new_name = parser::with_counter(&self.title()?, self.get_counter()?);
        if self.name()? == new_name {
            return Ok(false);
        }

        let new_path = self.path.with_file_name(&new_name);
        if new_path.exists() {
            return Err(IndexError::DestinationExists(new_path));
        }

        fs::rename(&self.path, &new_path)?;
        tracing::debug!(
            "Renamed folder {} -> {}",
            self.path.display(),
            new_path.display()
        );
        self.path = new_path;

        Ok(true)
    }
}
