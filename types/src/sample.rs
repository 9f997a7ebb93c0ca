//! Planting-date parsing.
//!
//! Upstream services hand planting dates over as ISO-8601 strings. Strings
//! carrying an offset (or `Z`) are absolute; date-times without an offset
//! and bare dates are interpreted in a caller-supplied time zone, a bare
//! date meaning midnight in that zone.

use crate::error::TreekinError;
use crate::time::Timestamp;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Offset-less date-time layouts, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts carrying an explicit offset that RFC 3339 rejects
/// (minute precision, space separator, offsets without a colon).
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One tree's planting instant, as fed into accrual.
///
/// A sample built from an unparseable string carries no instant and
/// contributes nothing downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeAgeSample {
    planted_at: Option<Timestamp>,
}

impl TreeAgeSample {
    pub fn new(planted_at: Timestamp) -> Self {
        Self {
            planted_at: Some(planted_at),
        }
    }

    /// A sample with no usable planting instant.
    pub fn unknown() -> Self {
        Self { planted_at: None }
    }

    /// Parse `input`, interpreting offset-less values in `tz`.
    ///
    /// Never fails: an unparseable string yields [`TreeAgeSample::unknown`].
    pub fn parse_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Self {
        match parse_planted_at(input, tz) {
            Ok(ts) => Self::new(ts),
            Err(e) => {
                tracing::debug!(input, error = %e, "ignoring unparseable planting date");
                Self::unknown()
            }
        }
    }

    pub fn planted_at(&self) -> Option<Timestamp> {
        self.planted_at
    }

    pub fn is_known(&self) -> bool {
        self.planted_at.is_some()
    }
}

impl From<Timestamp> for TreeAgeSample {
    fn from(ts: Timestamp) -> Self {
        Self::new(ts)
    }
}

/// Parse an ISO-8601 planting date into a [`Timestamp`].
///
/// Accepts RFC 3339 (`2024-05-01T08:30:00Z`, `...+05:30`), other
/// offset-carrying ISO-8601 forms (`2024-05-01T08:30Z`,
/// `2024-05-01 08:30+0530`), offset-less date-times
/// (`2024-05-01T08:30:00`, `2024-05-01 08:30`) and bare dates
/// (`2024-05-01`). Offset-less forms are resolved in `tz`; when a local
/// time is ambiguous (DST fold) the earlier instant wins.
pub fn parse_planted_at<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<Timestamp, TreekinError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TreekinError::InvalidDate(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Timestamp::from_millis(dt.timestamp_millis()));
    }

    let with_offset = zulu_as_offset(trimmed);
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(Timestamp::from_millis(dt.timestamp_millis()));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return resolve_local(naive, tz, input);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return resolve_local(date.and_time(NaiveTime::MIN), tz, input);
    }

    Err(TreekinError::InvalidDate(input.to_string()))
}

/// Rewrite a trailing `Z` designator as `+00:00`.
fn zulu_as_offset(input: &str) -> String {
    match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => input.to_string(),
    }
}

fn resolve_local<Tz: TimeZone>(
    naive: NaiveDateTime,
    tz: &Tz,
    input: &str,
) -> Result<Timestamp, TreekinError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(Timestamp::from_millis(dt.timestamp_millis())),
        LocalResult::Ambiguous(earliest, _) => {
            Ok(Timestamp::from_millis(earliest.timestamp_millis()))
        }
        // Skipped by a DST gap; no such wall-clock instant exists.
        LocalResult::None => Err(TreekinError::InvalidDate(input.to_string())),
    }
}
