use crate::time::error::FilenameError;
use crate::time::filename_parsing::analyze_filename;
use chrono::NaiveDateTime;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// The filename timestamp found for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameScan {
    pub path: PathBuf,
    pub result: Result<Option<NaiveDateTime>, FilenameError>,
}

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Recursively lists all files under `dir`.
/// Hidden files and directories are skipped unless `include_hidden` is set.
/// I/O errors encountered during traversal are propagated.
pub fn list_files_walkdir_filtered(
    dir: &Path,
    include_hidden: bool,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        // The root itself is never filtered, even when its own name starts with '.'.
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// Runs the filename parser over many paths in parallel. Output order follows input order.
///
/// Only the final component of each path is analyzed.
pub fn analyze_filenames(paths: &[PathBuf]) -> Vec<FilenameScan> {
    paths
        .par_iter()
        .map(|path| {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            FilenameScan {
                path: path.clone(),
                result: analyze_filename(&filename),
            }
        })
        .collect()
}
