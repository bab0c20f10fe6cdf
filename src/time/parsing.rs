//! Parsing of the date strings exiftool reports for metadata tags.

use chrono::{NaiveDateTime, Timelike};

/// Formats exiftool uses for naive date tags, with and without subseconds.
const NAIVE_FORMATS: [(&str, bool); 4] = [
    ("%Y:%m:%d %H:%M:%S%.f", true),
    ("%Y-%m-%d %H:%M:%S%.f", true),
    ("%Y:%m:%d %H:%M:%S", false),
    ("%Y-%m-%d %H:%M:%S", false),
];

/// Parses a metadata date string (`YYYY:MM:DD HH:MM:SS[.fff][±hh:mm|Z]`) into a naive datetime.
///
/// A trailing offset is dropped: Date Taken is the wall clock time of the camera.
/// Zeroed dates like `0000:00:00 00:00:00`, which some cameras write when the clock
/// was never set, give `None`.
pub fn parse_metadata_datetime(s: &str) -> Option<NaiveDateTime> {
    parse_naive(strip_offset(s.trim())).map(|(dt, _)| dt)
}

/// Parses a naive datetime string.
/// Returns the `NaiveDateTime` and whether subseconds were present in the string.
pub fn parse_naive(s: &str) -> Option<(NaiveDateTime, bool)> {
    for (fmt, has_subsecs_in_fmt) in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            let parsed_subsecs = has_subsecs_in_fmt && dt.nanosecond() != 0;
            return Some((dt, parsed_subsecs));
        }
    }
    None
}

fn strip_offset(s: &str) -> &str {
    let Some((date, time)) = s.split_once(' ') else {
        return s;
    };
    match time.find(['+', '-', 'Z']) {
        Some(idx) => &s[..date.len() + 1 + idx],
        None => s,
    }
}
