use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where a Date Taken value came from.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DateTakenSource {
    /// Date Taken came from the file's embedded metadata.
    Metadata,
    /// Date Taken came from a timestamp in the filename.
    Filename,
    /// Neither the metadata nor the filename had a Date Taken.
    None,
}

/// A Date Taken read from a metadata tag.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTimestamp {
    pub datetime: NaiveDateTime,
    /// The tag the value was read from, e.g. `DateTimeOriginal`.
    pub tag: String,
}

/// The resolved Date Taken of a file, tagged with its source.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum DateTaken {
    Metadata {
        datetime: NaiveDateTime,
        tag: String,
    },
    Filename {
        datetime: NaiveDateTime,
    },
    None,
}

impl DateTaken {
    #[must_use]
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Metadata { datetime, .. } | Self::Filename { datetime } => Some(*datetime),
            Self::None => None,
        }
    }

    #[must_use]
    pub const fn source(&self) -> DateTakenSource {
        match self {
            Self::Metadata { .. } => DateTakenSource::Metadata,
            Self::Filename { .. } => DateTakenSource::Filename,
            Self::None => DateTakenSource::None,
        }
    }
}

impl From<MetadataTimestamp> for DateTaken {
    fn from(value: MetadataTimestamp) -> Self {
        Self::Metadata {
            datetime: value.datetime,
            tag: value.tag,
        }
    }
}

/// Date Taken from the metadata and from the filename, looked up independently.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateTakenBoth {
    pub metadata: Option<MetadataTimestamp>,
    pub filename: Option<NaiveDateTime>,
}
