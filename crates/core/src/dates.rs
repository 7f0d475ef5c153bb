//! Coercion of client-supplied date strings into stored timestamps.
//!
//! The admin panel sends project dates as ISO-8601 strings, sometimes as a
//! full RFC 3339 instant and sometimes as a bare `YYYY-MM-DD` from a date
//! picker. [`ProjectDate`] accepts either and normalizes to UTC so the
//! repository layer only ever binds a [`Timestamp`].

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive date-time layouts accepted in addition to RFC 3339. Interpreted as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years a `TIMESTAMPTZ` column round-trips as four-digit ISO-8601.
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// A project date parsed from an ISO-8601 string.
///
/// Deserializes from a JSON string and serializes as an RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ProjectDate(Timestamp);

impl ProjectDate {
    pub fn into_inner(self) -> Timestamp {
        self.0
    }
}

impl FromStr for ProjectDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s).map(ProjectDate)
    }
}

impl TryFrom<String> for ProjectDate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Deserialize an optional [`ProjectDate`] for partial updates.
///
/// `null`, a missing field, and a blank string all mean "keep the stored
/// date"; any other string must parse.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<ProjectDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .parse::<ProjectDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Parse an ISO-8601 date or date-time string into a UTC timestamp.
///
/// Offsets are honoured and converted to UTC; values without an offset are
/// taken as UTC; a bare calendar date maps to midnight UTC.
pub fn parse_date(raw: &str) -> Result<Timestamp, CoreError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(CoreError::Validation("date must not be empty".into()));
    }

    let invalid = || CoreError::Validation(format!("'{raw}' is not a valid ISO-8601 date"));

    let ts = parse_any(s).ok_or_else(invalid)?;
    if !STORABLE_YEARS.contains(&ts.year()) {
        return Err(CoreError::Validation(format!(
            "'{raw}' is outside the supported years {}..={}",
            STORABLE_YEARS.start(),
            STORABLE_YEARS.end()
        )));
    }
    Ok(ts)
}

fn parse_any(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
