//! Request date parsing.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::{CoinworthError, Result};

/// Parse a `YYYY-MM-DD` date string into a UTC-midnight epoch timestamp.
///
/// Rejects malformed dates and dates in the future. Day granularity is all
/// the pipeline needs; midnight of a given calendar day is always in the
/// past once that day has started, so "today" parses successfully.
pub fn parse_date(raw: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoinworthError::InvalidDateFormat)?;

    let timestamp = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    if timestamp > Utc::now().timestamp() {
        return Err(CoinworthError::FutureDate);
    }

    Ok(timestamp)
}

/// Calendar date (`YYYY-MM-DD`, UTC) of an epoch timestamp, for message
/// phrasing. `None` if the timestamp is outside chrono's representable range.
pub fn calendar_date(timestamp: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(timestamp, 0).map(|dt| dt.format("%Y-%m-%d").to_string())
}
