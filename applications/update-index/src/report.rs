/// Human-readable and JSON output for plans and summaries
use crate::error::Result;
use folder_index::{parser, planner, IndexSummary, PathMapping};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// One planned file move, relative to the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A dry-run plan as printed with `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub root: PathBuf,
    pub moves: Vec<PlannedMove>,
    /// Destination folder name → planned file count
    pub folders: BTreeMap<String, usize>,
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

impl PlanReport {
    pub fn new(root: &Path, mapping: &PathMapping) -> Self {
        let moves = mapping
            .iter()
            .map(|(from, to)| PlannedMove {
                from: relative(root, from),
                to: relative(root, to),
            })
            .collect();

        let folders = planner::group_counts(mapping)
            .into_iter()
            .map(|(dir, count)| {
                let name = dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (name, count)
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            moves,
            folders,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Plan for {}", self.root.display());
        for planned in &self.moves {
            if planned.from == planned.to {
                let _ = writeln!(out, "  = {}", planned.from.display());
            } else {
                let _ = writeln!(
                    out,
                    "  {} -> {}",
                    planned.from.display(),
                    planned.to.display()
                );
            }
        }
        let _ = writeln!(out, "Resulting folders:");
        for (name, count) in &self.folders {
            let _ = writeln!(out, "  {}", parser::with_counter(name, *count));
        }
        let _ = write!(
            out,
            "{} files into {} folders",
            self.moves.len(),
            self.folders.len()
        );
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn render_summary(summary: &IndexSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reindexed {}", summary.root.display());
    if summary.renamed_files > 0 {
        let _ = writeln!(out, "  renamed files:   {}", summary.renamed_files);
    }
    let _ = writeln!(out, "  moved files:     {}", summary.moved_files);
    if summary.collisions > 0 {
        let _ = writeln!(out, "  collisions:      {}", summary.collisions);
    }
    let _ = writeln!(out, "  created folders: {}", summary.created_folders);
    let _ = writeln!(out, "  removed folders: {}", summary.removed_folders);
    let _ = write!(out, "Folders:");
    for folder in &summary.folders {
        let _ = write!(out, "\n  {}", folder.name);
    }
    out
}

pub fn summary_json(summary: &IndexSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
