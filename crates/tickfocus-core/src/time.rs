//! Timestamp conventions of the vendor API.
//!
//! The backend does not accept a parsed timezone offset on focus
//! timestamps: it expects a naive ISO-8601 wall-clock string with a
//! literal `+0000` appended. Statistics paths use a compact
//! `YYYYMMDD` day stamp, and the timing-range endpoint takes
//! millisecond epochs.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ApiError, Result};

/// Format a naive wall-clock timestamp the way the vendor expects:
/// ISO-8601 without offset, then the literal `+0000`. The fractional
/// part is printed only when nonzero.
pub fn to_api_timestamp(t: NaiveDateTime) -> String {
    format!("{}+0000", t.format("%Y-%m-%dT%H:%M:%S%.f"))
}

/// Compact `YYYYMMDD` stamp used in statistics endpoint paths.
pub fn to_date_stamp(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Decode a `YYYYMMDD` day stamp, as returned for the day keys of the
/// daily statistics endpoint.
pub fn from_date_stamp(stamp: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(stamp, "%Y%m%d")
        .map_err(|_| ApiError::InvalidStamp(stamp.to_string()))
}

/// Millisecond epoch for the timing-range query. Naive timestamps are
/// taken as UTC wall-clock values, the same convention the record
/// bodies use.
pub fn to_epoch_millis(t: NaiveDateTime) -> i64 {
    t.and_utc().timestamp_millis()
}
