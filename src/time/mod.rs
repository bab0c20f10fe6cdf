//! Date Taken values and the parsers that produce them.
pub mod error;
pub mod filename_parsing;
pub mod parsing;
pub mod structs;

pub use filename_parsing::analyze_filename;
