//! Read-only aggregated focus-time statistics.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Result;
use crate::time::to_date_stamp;
use crate::transport::ApiClient;

const STATS_BASE: &str = "/pomodoros/statistics";

/// Reader over the vendor's aggregated focus statistics. Every method
/// is one GET with both range bounds stamp-encoded into the path,
/// returning the decoded body unmodified -- no local computation.
pub struct FocusStats<'a, C: ApiClient> {
    client: &'a C,
}

impl<'a, C: ApiClient> FocusStats<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Average focused minutes per hour of day over the date range.
    pub fn average_by_hour(&self, start: NaiveDate, end: NaiveDate) -> Result<Value> {
        self.client.http_get(&format!(
            "{STATS_BASE}/dist/clock/{}/{}",
            to_date_stamp(start),
            to_date_stamp(end)
        ))
    }

    /// Focused minutes per hour for each day in the range. Days are
    /// keyed by `YYYYMMDD` stamps; `time::from_date_stamp` decodes
    /// them.
    pub fn daily_by_hour(&self, start: NaiveDate, end: NaiveDate) -> Result<Value> {
        self.client.http_get(&format!(
            "{STATS_BASE}/dist/clockByDay/{}/{}",
            to_date_stamp(start),
            to_date_stamp(end)
        ))
    }

    /// Focused minutes grouped by project, tag and task over the date
    /// range.
    pub fn totals_by_category(&self, start: NaiveDate, end: NaiveDate) -> Result<Value> {
        self.client.http_get(&format!(
            "{STATS_BASE}/dist/{}/{}",
            to_date_stamp(start),
            to_date_stamp(end)
        ))
    }

    /// Today's focus totals, in minutes.
    pub fn today(&self) -> Result<Value> {
        self.client.http_get(&format!("{STATS_BASE}/generalForDesktop"))
    }
}
