//! Period parsing for time-series points.
//!
//! The backend sends periods as RFC 3339 timestamps for monthly data
//! (`2024-01-31T18:30:00.000Z`) and as bare years for yearly data. Civil
//! dates and datetimes without an offset are read as UTC.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

use crate::error::CoreError;

/// Parse a period string into a UTC timestamp.
///
/// Accepted forms, tried in order: RFC 3339 timestamp, civil datetime, civil
/// date, `YYYY-MM`, `YYYY`.
pub fn parse_period(raw: &str) -> Result<Timestamp, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid(raw, "empty period"));
    }

    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }
    if let Ok(dt) = value.parse::<DateTime>() {
        return civil_to_utc(raw, dt);
    }
    if let Ok(date) = value.parse::<Date>() {
        return civil_to_utc(raw, date.to_datetime(jiff::civil::Time::midnight()));
    }

    let mut parts = value.splitn(2, '-');
    let year = parts
        .next()
        .and_then(|y| y.parse::<i16>().ok())
        .ok_or_else(|| invalid(raw, "unrecognized period format"))?;
    let month = match parts.next() {
        Some(m) => m
            .parse::<i8>()
            .map_err(|_| invalid(raw, "unrecognized period format"))?,
        None => 1,
    };
    let date = Date::new(year, month, 1).map_err(|e| invalid(raw, &e.to_string()))?;
    civil_to_utc(raw, date.to_datetime(jiff::civil::Time::midnight()))
}

/// Parse a bare numeric year (e.g. `2024` sent as a JSON number).
pub fn period_from_year(year: i64) -> Result<Timestamp, CoreError> {
    let y = i16::try_from(year).map_err(|_| invalid(&year.to_string(), "year out of range"))?;
    let date = Date::new(y, 1, 1).map_err(|e| invalid(&year.to_string(), &e.to_string()))?;
    civil_to_utc(&year.to_string(), date.to_datetime(jiff::civil::Time::midnight()))
}

fn civil_to_utc(raw: &str, dt: DateTime) -> Result<Timestamp, CoreError> {
    dt.to_zoned(TimeZone::UTC)
        .map(|z| z.timestamp())
        .map_err(|e| invalid(raw, &e.to_string()))
}

fn invalid(raw: &str, reason: &str) -> CoreError {
    CoreError::InvalidPeriod {
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}
