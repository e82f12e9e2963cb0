/// Command-line arguments
use clap::Parser;
use folder_index::CollisionPolicy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "update-index")]
#[command(about = "Regroup media folders into one folder per artist", long_about = None)]
pub struct Cli {
    /// Root directory whose subfolders are reindexed (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the planned moves without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Print the plan or summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Folder name for files without an artist tag
    #[arg(long = "various-artists", value_name = "NAME")]
    pub various_artists: Option<String>,

    /// What to do when a destination file already exists (rename, reject, overwrite)
    #[arg(long = "on-collision", value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,

    /// Rename files to their canonical "title [artist].ext" form first
    #[arg(long)]
    pub normalize: bool,
}
