//! Management of named timers of either kind and focus records
//! against them -- the generalization of the pomodoro flow.

use chrono::NaiveDateTime;
use serde_json::{from_value, Value};

use crate::batch;
use crate::error::Result;
use crate::lookup::{self, TimerKey};
use crate::time::{to_api_timestamp, to_epoch_millis};
use crate::transport::ApiClient;
use crate::types::{push_entry, FocusEntry, FocusRecord, NewTimer, RecordOptions, Timer};

const TIMING_BATCH_PATH: &str = "/batch/pomodoro/timing";
const TIMING_RANGE_PATH: &str = "/pomodoros/timing";

/// Manager for arbitrary named timers (pomodoro or timing type) and
/// the session records recorded against them.
pub struct TimerManager<'a, C: ApiClient> {
    client: &'a C,
}

impl<'a, C: ApiClient> TimerManager<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Create a timer definition of the kind carried by `timer`.
    /// Duplicate names are allowed by the vendor.
    pub fn add_timer(&self, timer: NewTimer) -> Result<Value> {
        let kind = timer.kind;
        self.client
            .http_post(lookup::TIMER_PATH, &batch::timer_add_envelope(timer, kind))
    }

    /// Delete one timer definition by id.
    pub fn delete_timer(&self, timer_id: &str) -> Result<Value> {
        self.client
            .http_post(lookup::TIMER_PATH, &batch::timer_delete_envelope(timer_id))
    }

    /// All timer definitions on the account.
    pub fn list_timers(&self) -> Result<Vec<Timer>> {
        lookup::fetch_timers(self.client)
    }

    /// The timer with the given id, scanning a fresh list.
    pub fn get_timer(&self, timer_id: &str) -> Result<Timer> {
        lookup::timer_by_id(self.client, timer_id)
    }

    /// Id of the first timer named `name`, scanning a fresh list in
    /// whatever order the vendor returned it.
    pub fn get_timer_id_by_name(&self, name: &str) -> Result<String> {
        lookup::timer_id_by_name(self.client, name)
    }

    /// Build one timer-reference fragment for a record, resolving the
    /// timer by name or id over a fresh timer list (name wins when
    /// both are given, neither is an error before any network call).
    /// `append_to` accumulates fragments the same way the pomodoro
    /// builder does.
    pub fn build_timer_record(
        &self,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        timer_name: Option<&str>,
        timer_id: Option<&str>,
        append_to: Option<Vec<FocusEntry>>,
    ) -> Result<Vec<FocusEntry>> {
        let key = TimerKey::from_options(timer_name, timer_id)?;
        let timers = lookup::fetch_timers(self.client)?;
        let timer = lookup::resolve(&timers, key)?;

        let entry = FocusEntry {
            task_id: None,
            title: None,
            timer_id: Some(timer.id.clone()),
            timer_name: Some(timer.name.clone()),
            tags: Vec::new(),
            project_name: String::new(),
            start_time: to_api_timestamp(start_time),
            end_time: to_api_timestamp(end_time),
        };
        Ok(push_entry(entry, append_to))
    }

    /// Persist one record against a timer through the timing batch
    /// endpoint, which additionally wants the record flagged as newly
    /// added.
    pub fn add_record(
        &self,
        tasks: &[FocusEntry],
        start_time: NaiveDateTime,
        opts: RecordOptions,
    ) -> Result<Value> {
        let envelope = batch::record_add_envelope(tasks, start_time, &opts, true);
        self.client.http_post(TIMING_BATCH_PATH, &envelope)
    }

    /// Records in the given range that reference `timer_id`. The
    /// range travels server-side as millisecond epochs; the per-timer
    /// filter happens here, scanning each record's task list.
    pub fn get_records_in_range(
        &self,
        timer_id: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Vec<FocusRecord>> {
        let path = format!(
            "{TIMING_RANGE_PATH}?from={}&to={}",
            to_epoch_millis(start_time),
            to_epoch_millis(end_time)
        );
        let records: Vec<FocusRecord> = from_value(self.client.http_get(&path)?)?;
        Ok(records
            .into_iter()
            .filter(|record| {
                record
                    .tasks
                    .iter()
                    .any(|entry| entry.timer_id.as_deref() == Some(timer_id))
            })
            .collect())
    }
}
