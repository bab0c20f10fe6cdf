use crate::time::error::FilenameError;
use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use std::sync::OnceLock;

// Six digit groups, YYYY MM DD hh mm ss, each pair optionally split by one of `-_. `.
// The match may not start or end inside a longer digit run.
static RE_SIX_GROUPS: OnceLock<Regex> = OnceLock::new();

fn six_group_regex() -> &'static Regex {
    RE_SIX_GROUPS.get_or_init(|| {
        Regex::new(
            r"(?:^|[^0-9])([0-9]{4})[-_. ]?([0-9]{2})[-_. ]?([0-9]{2})[-_. ]?([0-9]{2})[-_. ]?([0-9]{2})[-_. ]?([0-9]{2})(?:[^0-9]|$)",
        )
        .expect("six group timestamp pattern is valid")
    })
}

/// Looks for a `YYYY MM DD hh mm ss` timestamp in a filename.
///
/// The filename may include a path and/or an extension; the whole string is searched and
/// only the leftmost timestamp is considered. Between two adjacent groups a single `-`, `_`,
/// `.` or space is allowed, and separators do not need to be consistent.
///
/// # Returns
///
/// * `Ok(Some(datetime))` - the digits of the first match, taken as-is (no timezone).
/// * `Ok(None)` - the filename contains no timestamp.
/// * `Err(FilenameError::InvalidCalendarValue)` - the first match is not a real date/time,
///   e.g. month `13` or hour `25`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use date_taken::analyze_filename;
///
/// let dt = analyze_filename("IMG-2019.11.05 08.30.00(1)").unwrap();
/// let expected = NaiveDate::from_ymd_opt(2019, 11, 5)
///     .and_then(|d| d.and_hms_opt(8, 30, 0));
/// assert_eq!(dt, expected);
/// assert_eq!(analyze_filename("vacation_photo.jpg"), Ok(None));
/// ```
pub fn analyze_filename(filename: &str) -> Result<Option<NaiveDateTime>, FilenameError> {
    let Some(caps) = six_group_regex().captures(filename) else {
        return Ok(None);
    };
    to_datetime(filename, &caps).map(Some)
}

fn to_datetime(filename: &str, caps: &Captures) -> Result<NaiveDateTime, FilenameError> {
    let matched = match (caps.get(1), caps.get(6)) {
        (Some(first), Some(last)) => &filename[first.start()..last.end()],
        _ => "",
    };
    let invalid = || FilenameError::InvalidCalendarValue {
        matched: matched.to_string(),
    };

    let mut fields = [0u32; 6];
    for (i, field) in fields.iter_mut().enumerate() {
        *field = caps[i + 1].parse().map_err(|_| invalid())?;
    }
    let [year, month, day, hour, minute, second] = fields;

    // Years run 0001-9999, like the calendar exiftool writes.
    if year == 0 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(invalid)
}
