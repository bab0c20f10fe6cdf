use crate::DateTakenError;
use crate::metadata::{MediaFamily, MetadataTool, read_date_taken};
use crate::time::error::FilenameError;
use crate::time::filename_parsing::analyze_filename;
use crate::time::structs::{DateTaken, DateTakenBoth, MetadataTimestamp};
use bon::bon;
use chrono::NaiveDateTime;
use exiftool::ExifTool;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Behaviour switches of a [`DateTakenExtractor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Treat a filename timestamp that is not a real date (e.g. month `13`) as no timestamp,
    /// instead of failing with [`DateTakenError::Filename`].
    pub lenient_filenames: bool,
    /// Let [`DateTakenExtractor::update_date_taken`] replace a Date Taken that is already
    /// present in the metadata.
    pub overwrite_existing: bool,
}

/// Resolves and writes the Date Taken of photo and video files.
///
/// Metadata is the preferred source; a timestamp in the filename is the fallback.
/// The extractor holds a running metadata tool, so create it once and reuse it.
///
/// ```rust,no_run
/// # use date_taken::{DateTakenExtractor, DateTakenError};
/// # fn main() -> Result<(), DateTakenError> {
/// let mut extractor = DateTakenExtractor::builder()
///     .lenient_filenames(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct DateTakenExtractor<T: MetadataTool = ExifTool> {
    tool: T,
    options: ExtractorOptions,
}

#[bon]
impl DateTakenExtractor<ExifTool> {
    /// Constructs a `DateTakenExtractor` backed by exiftool.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific `exiftool` executable. If `None`, `exiftool` is searched for in the system's PATH.
    /// * `lenient_filenames: bool` - (Default: `false`) See [`ExtractorOptions::lenient_filenames`].
    /// * `overwrite_existing: bool` - (Default: `false`) See [`ExtractorOptions::overwrite_existing`].
    ///
    /// # Errors
    ///
    /// Returns [`DateTakenError::Exiftool`] if the `exiftool` executable cannot be found or fails to start.
    #[builder]
    pub fn new(
        exiftool_path: Option<PathBuf>,
        #[builder(default)] lenient_filenames: bool,
        #[builder(default)] overwrite_existing: bool,
    ) -> Result<Self, DateTakenError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(&path)?,
            None => ExifTool::new()?,
        };
        Ok(Self::with_tool(
            exiftool,
            ExtractorOptions {
                lenient_filenames,
                overwrite_existing,
            },
        ))
    }
}

impl<T: MetadataTool> DateTakenExtractor<T> {
    /// Wraps any [`MetadataTool`].
    pub const fn with_tool(tool: T, options: ExtractorOptions) -> Self {
        Self { tool, options }
    }

    pub const fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Finds the Date Taken of a file: metadata first, then the filename.
    ///
    /// Files whose type has no known metadata tags skip straight to the filename.
    ///
    /// # Errors
    ///
    /// * [`DateTakenError::FileNotFound`] if `path` does not exist.
    /// * [`DateTakenError::Exiftool`] if the metadata cannot be read.
    /// * [`DateTakenError::Filename`] if the filename timestamp is not a valid date and
    ///   lenient mode is off.
    pub fn date_taken(&mut self, path: &Path) -> Result<DateTaken, DateTakenError> {
        ensure_exists(path)?;

        match MediaFamily::from_path(path) {
            Ok(family) => {
                if let Some(found) = self.read_metadata(path, family)? {
                    debug!(path = %path.display(), tag = %found.tag, "Date Taken from metadata");
                    return Ok(found.into());
                }
            }
            Err(DateTakenError::UnsupportedFileType(ext)) => {
                debug!(path = %path.display(), %ext, "no metadata tags for this file type");
            }
            Err(e) => return Err(e),
        }

        match self.filename_timestamp(path)? {
            Some(datetime) => {
                debug!(path = %path.display(), %datetime, "Date Taken from filename");
                Ok(DateTaken::Filename { datetime })
            }
            None => Ok(DateTaken::None),
        }
    }

    /// Reads the Date Taken from the file's embedded metadata only.
    ///
    /// # Errors
    ///
    /// * [`DateTakenError::FileNotFound`] if `path` does not exist.
    /// * [`DateTakenError::UnsupportedFileType`] if the extension is not a known image or video type.
    /// * [`DateTakenError::Exiftool`] if the metadata cannot be read.
    pub fn from_metadata(
        &mut self,
        path: &Path,
    ) -> Result<Option<MetadataTimestamp>, DateTakenError> {
        ensure_exists(path)?;
        let family = MediaFamily::from_path(path)?;
        self.read_metadata(path, family)
    }

    /// Reads the Date Taken from the name of the file only.
    ///
    /// # Errors
    ///
    /// * [`DateTakenError::FileNotFound`] if `path` does not exist.
    /// * [`DateTakenError::Filename`] if the timestamp is not a valid date and lenient mode is off.
    pub fn from_filename(&self, path: &Path) -> Result<Option<NaiveDateTime>, DateTakenError> {
        ensure_exists(path)?;
        self.filename_timestamp(path)
    }

    /// Looks up the Date Taken in the metadata and in the filename, independently.
    ///
    /// # Errors
    ///
    /// The union of [`Self::from_metadata`] and [`Self::from_filename`].
    pub fn from_both(&mut self, path: &Path) -> Result<DateTakenBoth, DateTakenError> {
        Ok(DateTakenBoth {
            metadata: self.from_metadata(path)?,
            filename: self.from_filename(path)?,
        })
    }

    /// Writes `datetime` as the Date Taken into the metadata of `path`.
    ///
    /// # Errors
    ///
    /// * [`DateTakenError::FileNotFound`] if `path` does not exist.
    /// * [`DateTakenError::UnsupportedFileType`] for unknown extensions.
    /// * [`DateTakenError::Exiftool`] or [`DateTakenError::WriteRejected`] if writing fails.
    pub fn write_date_taken(
        &mut self,
        path: &Path,
        datetime: NaiveDateTime,
    ) -> Result<(), DateTakenError> {
        ensure_exists(path)?;
        let family = MediaFamily::from_path(path)?;
        let args = family.write_args(datetime, path);
        self.tool.write_tags(path, &args)?;
        info!(path = %path.display(), %datetime, "wrote Date Taken");
        Ok(())
    }

    /// The Date Taken [`Self::update_date_taken`] would write, without writing it.
    ///
    /// That is the filename timestamp, if there is one and the metadata has no Date Taken
    /// yet (or `overwrite_existing` is set).
    ///
    /// # Errors
    ///
    /// The union of [`Self::from_metadata`] and [`Self::from_filename`].
    pub fn planned_update(&mut self, path: &Path) -> Result<Option<NaiveDateTime>, DateTakenError> {
        ensure_exists(path)?;
        let family = MediaFamily::from_path(path)?;

        let Some(from_name) = self.filename_timestamp(path)? else {
            debug!(path = %path.display(), "no timestamp in filename, nothing to write");
            return Ok(None);
        };

        if !self.options.overwrite_existing
            && let Some(existing) = self.read_metadata(path, family)?
        {
            debug!(
                path = %path.display(),
                tag = %existing.tag,
                "metadata already has a Date Taken, leaving it"
            );
            return Ok(None);
        }

        Ok(Some(from_name))
    }

    /// Copies the filename timestamp into the file's metadata when it lacks a Date Taken.
    ///
    /// Returns the value that was written, or `None` if nothing was written.
    ///
    /// # Errors
    ///
    /// The union of [`Self::planned_update`] and [`Self::write_date_taken`].
    pub fn update_date_taken(
        &mut self,
        path: &Path,
    ) -> Result<Option<NaiveDateTime>, DateTakenError> {
        let planned = self.planned_update(path)?;
        if let Some(datetime) = planned {
            self.write_date_taken(path, datetime)?;
        }
        Ok(planned)
    }

    fn read_metadata(
        &mut self,
        path: &Path,
        family: MediaFamily,
    ) -> Result<Option<MetadataTimestamp>, DateTakenError> {
        let metadata = self.tool.read_metadata(path)?;
        Ok(read_date_taken(&metadata, family))
    }

    fn filename_timestamp(&self, path: &Path) -> Result<Option<NaiveDateTime>, DateTakenError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        match analyze_filename(&filename) {
            Ok(found) => Ok(found),
            Err(FilenameError::InvalidCalendarValue { matched }) if self.options.lenient_filenames => {
                warn!(
                    path = %path.display(),
                    %matched,
                    "filename timestamp is not a valid date, ignoring it"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), DateTakenError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(DateTakenError::FileNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::fs::File;
    use tempfile::TempDir;

    /// Serves fixed metadata and records writes instead of running exiftool.
    #[derive(Default)]
    struct FakeTool {
        metadata: Value,
        reads: usize,
        writes: Vec<(PathBuf, Vec<String>)>,
    }

    impl MetadataTool for FakeTool {
        fn read_metadata(&mut self, _path: &Path) -> Result<Value, DateTakenError> {
            self.reads += 1;
            Ok(self.metadata.clone())
        }

        fn write_tags(&mut self, path: &Path, assignments: &[String]) -> Result<(), DateTakenError> {
            self.writes.push((path.to_path_buf(), assignments.to_vec()));
            Ok(())
        }
    }

    fn extractor(metadata: Value, options: ExtractorOptions) -> DateTakenExtractor<FakeTool> {
        DateTakenExtractor::with_tool(
            FakeTool {
                metadata,
                ..FakeTool::default()
            },
            options,
        )
    }

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn exif_with_original(value: &str) -> Value {
        json!({ "Time": { "DateTimeOriginal": value } })
    }

    #[test]
    fn test_metadata_is_preferred_over_filename() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "IMG_20240101_123000.jpg");
        let mut extractor = extractor(
            exif_with_original("2025:02:02 11:11:11"),
            ExtractorOptions::default(),
        );

        let taken = extractor.date_taken(&path).unwrap();
        assert_eq!(
            taken,
            DateTaken::Metadata {
                datetime: dt(2025, 2, 2, 11, 11, 11),
                tag: "DateTimeOriginal".to_string()
            }
        );
        assert_eq!(taken.source(), crate::DateTakenSource::Metadata);
    }

    #[test]
    fn test_falls_back_to_filename() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "IMG_20240101_123000.jpg");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        let taken = extractor.date_taken(&path).unwrap();
        assert_eq!(taken.source(), crate::DateTakenSource::Filename);
        assert_eq!(taken.datetime(), Some(dt(2024, 1, 1, 12, 30, 0)));
    }

    #[test]
    fn test_none_when_no_source_has_a_date() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "vacation_photo.jpg");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        let taken = extractor.date_taken(&path).unwrap();
        assert_eq!(taken, DateTaken::None);
        assert_eq!(taken.datetime(), None);
    }

    #[test]
    fn test_unsupported_type_skips_metadata() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "notes 2020-05-05 10.00.00.txt");
        let mut extractor = extractor(
            exif_with_original("2025:02:02 11:11:11"),
            ExtractorOptions::default(),
        );

        let taken = extractor.date_taken(&path).unwrap();
        assert_eq!(taken.datetime(), Some(dt(2020, 5, 5, 10, 0, 0)));
        assert_eq!(extractor.tool.reads, 0);
        assert!(matches!(
            extractor.from_metadata(&path),
            Err(DateTakenError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("20210320_175909.jpg");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        assert!(matches!(
            extractor.date_taken(&path),
            Err(DateTakenError::FileNotFound(p)) if p == path
        ));
        assert!(matches!(
            extractor.from_filename(&path),
            Err(DateTakenError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_filename_date_is_strict_by_default() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "20211332_175909.jpg");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        assert!(matches!(
            extractor.date_taken(&path),
            Err(DateTakenError::Filename(FilenameError::InvalidCalendarValue { .. }))
        ));
    }

    #[test]
    fn test_invalid_filename_date_is_none_when_lenient() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "20211332_175909.jpg");
        let mut extractor = extractor(
            json!({}),
            ExtractorOptions {
                lenient_filenames: true,
                ..ExtractorOptions::default()
            },
        );

        assert_eq!(extractor.date_taken(&path).unwrap(), DateTaken::None);
        assert_eq!(extractor.from_filename(&path).unwrap(), None);
    }

    #[test]
    fn test_filename_ignores_directory_names() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("2019-01-01 00.00.00");
        std::fs::create_dir(&sub).unwrap();
        let path = sub.join("holiday.jpg");
        File::create(&path).unwrap();
        let extractor = extractor(json!({}), ExtractorOptions::default());

        assert_eq!(extractor.from_filename(&path).unwrap(), None);
    }

    #[test]
    fn test_from_both_reports_each_source() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "VID_20220723_134136.mp4");
        let mut extractor = extractor(
            json!({ "Time": { "MediaCreateDate": "2022:07:23 11:41:36" } }),
            ExtractorOptions::default(),
        );

        let both = extractor.from_both(&path).unwrap();
        assert_eq!(
            both.metadata,
            Some(MetadataTimestamp {
                datetime: dt(2022, 7, 23, 11, 41, 36),
                tag: "MediaCreateDate".to_string()
            })
        );
        assert_eq!(both.filename, Some(dt(2022, 7, 23, 13, 41, 36)));
    }

    #[test]
    fn test_update_writes_filename_date_when_metadata_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "Screenshot_2019-09-19-05-38-57.png");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        let written = extractor.update_date_taken(&path).unwrap();
        assert_eq!(written, Some(dt(2019, 9, 19, 5, 38, 57)));

        let (written_path, args) = &extractor.tool.writes[0];
        assert_eq!(written_path, &path);
        assert!(args.contains(&"-DateTimeOriginal=2019:09:19 05:38:57".to_string()));
        assert!(args.contains(&"-PNG:CreationTime=2019:09:19 05:38:57".to_string()));
    }

    #[test]
    fn test_update_keeps_existing_metadata() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "20210320_175909.jpg");
        let mut extractor = extractor(
            exif_with_original("2021:03:20 17:59:10"),
            ExtractorOptions::default(),
        );

        assert_eq!(extractor.update_date_taken(&path).unwrap(), None);
        assert!(extractor.tool.writes.is_empty());
    }

    #[test]
    fn test_update_overwrites_when_configured() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "20210320_175909.jpg");
        let mut extractor = extractor(
            exif_with_original("2000:01:01 00:00:00"),
            ExtractorOptions {
                overwrite_existing: true,
                ..ExtractorOptions::default()
            },
        );

        assert_eq!(
            extractor.update_date_taken(&path).unwrap(),
            Some(dt(2021, 3, 20, 17, 59, 9))
        );
        assert_eq!(extractor.tool.writes.len(), 1);
        assert_eq!(extractor.tool.reads, 0);
    }

    #[test]
    fn test_planned_update_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "20210320_175909.mov");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        assert_eq!(
            extractor.planned_update(&path).unwrap(),
            Some(dt(2021, 3, 20, 17, 59, 9))
        );
        assert!(extractor.tool.writes.is_empty());
    }

    #[test]
    fn test_update_without_filename_date_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "DSC_0042.jpg");
        let mut extractor = extractor(json!({}), ExtractorOptions::default());

        assert_eq!(extractor.update_date_taken(&path).unwrap(), None);
        assert!(extractor.tool.writes.is_empty());
    }
}
