use crate::error::DateTakenError;
use exiftool::ExifTool;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// A program that can read and write the embedded metadata of media files.
///
/// Reads return exiftool style JSON grouped by category (`-g2`), so date tags live
/// under the `Time` group.
pub trait MetadataTool {
    /// Reads all metadata of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool fails to read the file.
    fn read_metadata(&mut self, path: &Path) -> Result<Value, DateTakenError>;

    /// Applies exiftool style tag assignments (`-Tag=value`) to `path`, in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool fails or reports that the file was not updated.
    fn write_tags(&mut self, path: &Path, assignments: &[String]) -> Result<(), DateTakenError>;
}

impl MetadataTool for ExifTool {
    fn read_metadata(&mut self, path: &Path) -> Result<Value, DateTakenError> {
        Ok(self.json(path, &["-g2"])?)
    }

    fn write_tags(&mut self, path: &Path, assignments: &[String]) -> Result<(), DateTakenError> {
        let path_arg = path.to_string_lossy();
        let mut args: Vec<&str> = vec!["-overwrite_original"];
        args.extend(assignments.iter().map(String::as_str));
        args.push(path_arg.as_ref());

        let lines = self.execute_lines(&args)?;
        debug!(path = %path.display(), output = ?lines, "exiftool write finished");
        check_write_report(&lines)
    }
}

/// Exiftool reports success with a summary like `1 image files updated`.
fn check_write_report(lines: &[String]) -> Result<(), DateTakenError> {
    let rejected = lines.iter().any(|line| {
        let line = line.trim();
        line.starts_with("0 image files updated") || line.contains("files weren't updated")
    });
    if rejected {
        return Err(DateTakenError::WriteRejected(lines.join("\n")));
    }
    Ok(())
}
