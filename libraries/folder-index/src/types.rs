//! Common types for the folder index

use crate::VARIOUS_ARTISTS_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when a file's destination path is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep both files: append `-1`, `-2`, ... to the incoming file's stem
    #[default]
    Rename,

    /// Stop the run with an error before moving the colliding file
    Reject,

    /// Replace the existing file (last writer wins)
    Overwrite,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Rename => "rename",
            CollisionPolicy::Reject => "reject",
            CollisionPolicy::Overwrite => "overwrite",
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rename" => Ok(CollisionPolicy::Rename),
            "reject" => Ok(CollisionPolicy::Reject),
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            other => Err(format!(
                "unknown collision policy {:?} (expected rename, reject or overwrite)",
                other
            )),
        }
    }
}

/// Options for a reindex run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Folder name for files without an artist tag
    pub various_artists_name: String,

    /// Destination collision handling
    pub collision_policy: CollisionPolicy,

    /// Rewrite every filename to its canonical form before planning
    pub normalize_filenames: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            various_artists_name: VARIOUS_ARTISTS_NAME.to_string(),
            collision_policy: CollisionPolicy::Rename,
            normalize_filenames: false,
        }
    }
}

/// A folder as it exists after a reindex run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Directory name on disk, counter included
    pub name: String,
    /// Number of entries in the folder
    pub count: usize,
}

/// Result of a full reindex run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Root directory that was reindexed
    pub root: PathBuf,
    /// Files whose name changed during normalization
    pub renamed_files: usize,
    /// Files moved to a new location
    pub moved_files: usize,
    /// Files moved under a suffixed name because the destination was taken
    pub collisions: usize,
    /// Artist folders created
    pub created_folders: usize,
    /// Folders removed because they were empty after the moves
    pub removed_folders: usize,
    /// Resulting folders, sorted by name
    pub folders: Vec<FolderSummary>,
}
