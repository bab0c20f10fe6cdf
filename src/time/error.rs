use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    #[error("Filename timestamp '{matched}' is not a valid calendar date/time")]
    InvalidCalendarValue { matched: String },
}
