//! Reading and writing the Date Taken stored in a file's embedded metadata.
//!
//! The tags differ per [`MediaFamily`]; the actual reading and writing is delegated to a
//! [`MetadataTool`], which is exiftool in practice.
mod family;
mod tool;

pub use family::{EXIF_DATE_FORMAT, MediaFamily};
pub use tool::MetadataTool;

use crate::time::parsing::parse_metadata_datetime;
use crate::time::structs::MetadataTimestamp;
use serde_json::Value;

/// Finds the Date Taken in exiftool `-g2` JSON, trying the family's tags in priority order.
pub fn read_date_taken(metadata: &Value, family: MediaFamily) -> Option<MetadataTimestamp> {
    let time_group = metadata.get("Time")?;
    family.date_tags().iter().find_map(|tag| {
        let datetime = time_group
            .get(*tag)
            .and_then(Value::as_str)
            .and_then(parse_metadata_datetime)?;
        Some(MetadataTimestamp {
            datetime,
            tag: (*tag).to_string(),
        })
    })
}
