//! Request-time normalization.
//!
//! A visibility request carries either an absolute UTC instant or a local
//! wall-clock string plus an IANA timezone name. Both forms resolve to a
//! single `DateTime<Utc>` before any ephemeris work happens.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving a request time.
///
/// All variants are request errors: the caller can correct its input and
/// retry; nothing here is retryable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Local wall-clock string does not parse as `YYYY-MM-DDTHH:MM`.
    #[error("invalid local time format: {0:?}")]
    InvalidTimeFormat(String),
    /// Timezone name is not a known IANA zone.
    #[error("invalid timezone: {0:?}")]
    InvalidTimezone(String),
    /// Local-time form used but no timezone available from the request or
    /// the location record.
    #[error("timezone required for local time input")]
    MissingTimezone,
}

/// The time input of a visibility request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimeDescriptor {
    /// An absolute instant, already in UTC.
    Utc(DateTime<Utc>),
    /// A naive local wall-clock string (`YYYY-MM-DDTHH:MM`) and the IANA
    /// zone it should be interpreted in. The zone may be filled in from the
    /// location record before resolution; `None` at resolution time is an
    /// error.
    Local {
        when_local: String,
        timezone: Option<String>,
    },
}

impl TimeDescriptor {
    /// Build a descriptor from an absolute timestamp string.
    ///
    /// Accepts RFC 3339 (offset-carrying) timestamps; a naive
    /// `YYYY-MM-DDTHH:MM[:SS]` string is treated as UTC.
    pub fn parse_absolute(input: &str) -> Result<Self, TimeError> {
        if let Ok(t) = DateTime::parse_from_rfc3339(input) {
            return Ok(TimeDescriptor::Utc(t.with_timezone(&Utc)));
        }
        let naive = parse_naive(input)?;
        Ok(TimeDescriptor::Utc(Utc.from_utc_datetime(&naive)))
    }

    /// Resolve this descriptor into a single unambiguous UTC instant.
    pub fn resolve_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        match self {
            TimeDescriptor::Utc(t) => Ok(*t),
            TimeDescriptor::Local {
                when_local,
                timezone,
            } => {
                let tz_name = timezone.as_deref().ok_or(TimeError::MissingTimezone)?;
                let naive = parse_naive(when_local)?;
                let tz: Tz = tz_name
                    .parse()
                    .map_err(|_| TimeError::InvalidTimezone(tz_name.to_string()))?;
                match naive.and_local_timezone(tz) {
                    LocalResult::Single(t) => Ok(t.with_timezone(&Utc)),
                    // DST fold: take the earlier of the two instants.
                    LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
                    // Spring-forward gap: the wall-clock time never existed.
                    LocalResult::None => Err(TimeError::InvalidTimeFormat(when_local.clone())),
                }
            }
        }
    }
}

fn parse_naive(input: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTimeFormat(input.to_string()))
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
