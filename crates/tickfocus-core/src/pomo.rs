//! CRUD over pomodoro session records, pomodoro timer definitions and
//! the account's pomodoro preferences.

use chrono::NaiveDateTime;
use serde_json::{to_value, Value};

use crate::batch;
use crate::error::{ApiError, Result};
use crate::lookup;
use crate::time::to_api_timestamp;
use crate::transport::ApiClient;
use crate::types::{push_entry, FocusEntry, NewTimer, PomoPreferences, RecordOptions, Timer, TimerKind};

const POMO_BATCH_PATH: &str = "/batch/pomodoro";
const RECORD_PATH: &str = "/pomodoro";
const TIMELINE_PATH: &str = "/pomodoros/timeline";
const PREFERENCES_PATH: &str = "/user/preferences/pomodoro";

/// Manager for the pomodoro flow: focus records against tasks from
/// the caller's task cache, pomodoro-type timers, and preferences.
pub struct PomoManager<'a, C: ApiClient> {
    client: &'a C,
}

impl<'a, C: ApiClient> PomoManager<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Build one task-reference fragment for a record. Exactly one of
    /// `task_name` / `task_id` must be given (name wins when both
    /// are); the task, and its project name, resolve from the
    /// caller's cache before any payload is built. With `append_to`
    /// the fragment is pushed onto the given sequence and that
    /// sequence is returned, so several fragments can accumulate into
    /// one record before [`add_record`](Self::add_record).
    pub fn build_task_record(
        &self,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        task_name: Option<&str>,
        task_id: Option<&str>,
        append_to: Option<Vec<FocusEntry>>,
    ) -> Result<Vec<FocusEntry>> {
        let task = match (task_name, task_id) {
            (Some(name), _) => self.client.entity_by_field("title", name)?,
            (None, Some(id)) => self.client.entity_by_id(id)?,
            (None, None) => return Err(ApiError::MissingArgument("a task name or a task id")),
        };
        let project = self
            .client
            .entity_by_id(task["projectId"].as_str().unwrap_or_default())?;

        let tags = task["tags"]
            .as_array()
            .map(|tags| {
                tags.iter()
                    .filter_map(|tag| tag.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let entry = FocusEntry {
            task_id: task["id"].as_str().map(str::to_string),
            title: task["title"].as_str().map(str::to_string),
            timer_id: None,
            timer_name: None,
            tags,
            project_name: project["name"].as_str().unwrap_or_default().to_string(),
            start_time: to_api_timestamp(start_time),
            end_time: to_api_timestamp(end_time),
        };
        Ok(push_entry(entry, append_to))
    }

    /// Persist one focus record built from `tasks`. A fresh 24-hex
    /// record id is generated per call and the whole record travels
    /// in a single batch envelope.
    pub fn add_record(
        &self,
        tasks: &[FocusEntry],
        start_time: NaiveDateTime,
        opts: RecordOptions,
    ) -> Result<Value> {
        let envelope = batch::record_add_envelope(tasks, start_time, &opts, false);
        self.client.http_post(POMO_BATCH_PATH, &envelope)
    }

    /// Delete one record by id via the singular record endpoint. The
    /// vendor performs a true delete; there is no undo.
    pub fn delete_record(&self, record_id: &str) -> Result<Value> {
        self.client.http_delete(&format!("{RECORD_PATH}/{record_id}"))
    }

    /// Create a pomodoro timer definition. The vendor allows
    /// duplicate names; nothing is checked here.
    pub fn add_timer(&self, timer: NewTimer) -> Result<Value> {
        let envelope = batch::timer_add_envelope(timer, TimerKind::Pomodoro);
        self.client.http_post(lookup::TIMER_PATH, &envelope)
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

    /// Raw list of recent pomo and focus sessions. The vendor only
    /// serves roughly the last ten days here and exposes no
    /// pagination.
    pub fn get_timeline(&self) -> Result<Value> {
        self.client.http_get(TIMELINE_PATH)
    }

    /// Current pomodoro preferences, as the vendor returns them.
    pub fn get_preferences(&self) -> Result<Value> {
        self.client.http_get(PREFERENCES_PATH)
    }

    /// Replace the account's pomodoro preferences. The endpoint is a
    /// full overwrite, not a patch, so all ten fields are always
    /// sent; start from [`PomoPreferences::default`] for the vendor
    /// defaults.
    pub fn set_preferences(&self, preferences: &PomoPreferences) -> Result<Value> {
        self.client.http_put(PREFERENCES_PATH, &to_value(preferences)?)
    }
}
