use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the date_taken crate.
#[derive(Error, Debug)]
pub enum DateTakenError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    // --- Custom Module Errors ---
    #[error("Filename timestamp parsing failed: {0}")]
    Filename(#[from] crate::time::error::FilenameError),

    // --- Specific Logic Errors ---
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file type for metadata access: '{0}'")]
    UnsupportedFileType(String),

    #[error("Exiftool did not update the file: {0}")]
    WriteRejected(String),
}
