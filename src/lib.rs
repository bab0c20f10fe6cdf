//! # Date Taken
//!
//! Read and write the "Date Taken" of photo and video files.
//!
//! The Date Taken is when a photo or video was captured, as opposed to when the file was
//! created or modified on disk. It is read from the file's embedded metadata when possible,
//! and otherwise recovered from a timestamp in the filename such as `IMG_20210320_175909.jpg`.
//!
//! ## Key Features
//!
//! - **Filename Timestamps**: [`analyze_filename`] finds a `YYYY MM DD hh mm ss` timestamp in any string, with optional `-`, `_`, `.` or space separators. Pure, no I/O.
//! - **Metadata**: Reads the Date Taken tags of images and videos through `exiftool`.
//! - **Source Reporting**: [`DateTakenExtractor::date_taken`] tells whether the value came from metadata, the filename, or nowhere.
//! - **Writing**: Copies a filename timestamp into the metadata of files that lack one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use date_taken::{DateTakenExtractor, DateTakenError};
//!
//! fn main() -> Result<(), DateTakenError> {
//!     let mut extractor = DateTakenExtractor::builder().build()?;
//!     let taken = extractor.date_taken(Path::new("photos/IMG_20210320_175909.jpg"))?;
//!
//!     println!("{:?} from {:?}", taken.datetime(), taken.source());
//!     Ok(())
//! }
//! ```

mod error;
mod extractor;
pub mod metadata;
pub mod time;
pub mod utils;

pub use error::DateTakenError;
pub use extractor::{DateTakenExtractor, ExtractorOptions};
pub use metadata::{MediaFamily, MetadataTool};
pub use time::error::FilenameError;
pub use time::filename_parsing::analyze_filename;
pub use time::structs::{DateTaken, DateTakenBoth, DateTakenSource, MetadataTimestamp};
