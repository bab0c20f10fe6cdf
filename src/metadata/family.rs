use crate::error::DateTakenError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "heic", "heif", "tif", "tiff", "webp", "gif", "dng", "cr2", "cr3",
    "nef", "arw", "raf", "orf", "rw2",
];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "3gp", "3g2"];

/// Exiftool's date format for writing tags.
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// The family of media a file belongs to. Each family stores its Date Taken in different tags.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MediaFamily {
    Image,
    Video,
}

impl MediaFamily {
    /// Picks the family from the file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`DateTakenError::UnsupportedFileType`] if the extension is missing or unknown.
    pub fn from_path(path: &Path) -> Result<Self, DateTakenError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Video)
        } else {
            Err(DateTakenError::UnsupportedFileType(extension))
        }
    }

    /// Tags in the `Time` group holding the Date Taken, most reliable first.
    #[must_use]
    pub const fn date_tags(self) -> &'static [&'static str] {
        match self {
            Self::Image => &[
                "SubSecDateTimeOriginal",
                "DateTimeOriginal",
                "SubSecCreateDate",
                "CreateDate",
                "DateTimeDigitized",
                "CreationTime",
            ],
            Self::Video => &[
                "CreationDate",
                "CreateDate",
                "MediaCreateDate",
                "TrackCreateDate",
                "DateTimeOriginal",
            ],
        }
    }

    /// Exiftool arguments that set the Date Taken of `path` to `datetime`.
    #[must_use]
    pub fn write_args(self, datetime: NaiveDateTime, path: &Path) -> Vec<String> {
        let value = datetime.format(EXIF_DATE_FORMAT).to_string();
        let tags: &[&str] = match self {
            Self::Image => {
                let is_png = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
                if is_png {
                    &[
                        "DateTimeOriginal",
                        "CreateDate",
                        "ModifyDate",
                        "PNG:CreationTime",
                        "PNG:ModifyDate",
                    ]
                } else {
                    &["DateTimeOriginal", "CreateDate", "ModifyDate"]
                }
            }
            Self::Video => &[
                "QuickTime:CreateDate",
                "QuickTime:ModifyDate",
                "QuickTime:TrackCreateDate",
                "QuickTime:MediaCreateDate",
            ],
        };
        tags.iter().map(|tag| format!("-{tag}={value}")).collect()
    }
}
