//! Fixed-format date codec for the `dd-MMM-yyyy` wire pattern.
//!
//! chrono renders `%b` with the English month abbreviations regardless of
//! locale, so the pattern is invariant. Parsing is strict: an input only
//! counts if it reproduces itself when formatted back, because chrono alone
//! would also accept `5-Jan-2024` or a spelled-out month name.
//!
//! The module doubles as a serde adapter, so response models can annotate
//! date fields with `#[serde(with = "roster_core::date_format")]`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::CoreError;

/// chrono format string for `dd-MMM-yyyy`.
pub const FORMAT: &str = "%d-%b-%Y";

/// Render a date as `dd-MMM-yyyy`, e.g. `05-Jan-2024`.
pub fn format(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

/// Parse a `dd-MMM-yyyy` string, rejecting anything that does not match the
/// pattern exactly.
pub fn parse(value: &str) -> Result<NaiveDate, CoreError> {
    let date = NaiveDate::parse_from_str(value, FORMAT).map_err(|_| CoreError::MalformedDate)?;
    if format(date) != value {
        return Err(CoreError::MalformedDate);
    }
    Ok(date)
}

/// Format predicate used by the field validator.
pub fn is_valid(value: &str) -> bool {
    parse(value).is_ok()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(*date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(serde::de::Error::custom)
}
