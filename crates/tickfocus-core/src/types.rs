//! Vendor wire records for timers, focus records and preferences.
//!
//! Everything here is a vendor-defined shape. The client neither
//! stores nor mutates local copies beyond the duration of one call.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Countdown (pomodoro) vs count-up (timing) timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Pomodoro,
    Timing,
}

/// A named, reusable timer definition, distinct from any individual
/// session record against it. Names are user-chosen and not unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TimerKind,
    #[serde(default)]
    pub pomodoro_time: i64,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub modified_time: Option<String>,
}

/// One task- or timer-reference attached to a focus record.
///
/// The pomodoro flow fills `task_id`/`title`, the generic timer flow
/// fills `timer_id`/`timer_name`; the vendor treats these as the same
/// shape with a different foreign-key field, so the unused side is
/// skipped during serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project_name: String,
    pub start_time: String,
    pub end_time: String,
}

/// One focus/pomodoro session as the timeline endpoints return it.
/// Timeline rows carry extra vendor fields (etag, type, added); those
/// are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusRecord {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub pause_duration: i64,
    #[serde(default)]
    pub tasks: Vec<FocusEntry>,
    #[serde(default)]
    pub note: String,
}

/// The account's pomodoro preference set. Singleton per account with
/// full-replace semantics: a write always carries all ten fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomoPreferences {
    pub sounds_on: bool,
    pub long_break_interval: i64,
    /// Daily focus target in minutes.
    pub focus_duration: i64,
    pub auto_break: bool,
    pub auto_pomo: bool,
    pub pomo_goal: i64,
    /// Pomodoro session length in minutes.
    pub pomo_duration: i64,
    pub short_break_duration: i64,
    pub long_break_duration: i64,
    pub mindfulness_enabled: bool,
}

impl Default for PomoPreferences {
    fn default() -> Self {
        Self {
            sounds_on: true,
            long_break_interval: 4,
            focus_duration: 120,
            auto_break: false,
            auto_pomo: false,
            pomo_goal: 4,
            pomo_duration: 20,
            short_break_duration: 5,
            long_break_duration: 15,
            mindfulness_enabled: false,
        }
    }
}

/// Attribute set for creating a timer definition. A `None` id gets a
/// fresh 24-hex id; `None` creation/modification times mean the wall
/// clock at the moment of the call.
#[derive(Debug, Clone)]
pub struct NewTimer {
    pub id: Option<String>,
    pub icon: String,
    pub color: String,
    pub name: String,
    /// Ignored by the pomodoro manager, which only creates pomodoro
    /// timers.
    pub kind: TimerKind,
    /// Countdown length in minutes; only meaningful for pomodoro
    /// timers.
    pub pomodoro_time: i64,
    pub status: i64,
    pub sort_order: i64,
    pub created: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
}

impl Default for NewTimer {
    fn default() -> Self {
        Self {
            id: None,
            icon: "habit_daily_check_in".to_string(),
            color: "#97E38B".to_string(),
            name: "Timer".to_string(),
            kind: TimerKind::Pomodoro,
            pomodoro_time: 25,
            status: 0,
            sort_order: -1_099_511_627_776,
            created: None,
            modified: None,
        }
    }
}

/// Optional fields of `add_record`. An `end_time` left `None` means
/// the wall clock at the moment of the call, never a value captured
/// earlier in the process lifetime.
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub end_time: Option<NaiveDateTime>,
    /// Pause duration in seconds.
    pub pause_duration: i64,
    /// 0 = incomplete/interrupted, 1 = completed, by vendor
    /// convention. Not enforced here.
    pub status: i64,
    pub note: String,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            end_time: None,
            pause_duration: 0,
            status: 1,
            note: String::new(),
        }
    }
}

/// Append `entry` to `append_to` when given, returning the same
/// sequence, otherwise start a new single-element sequence. Lets
/// callers accumulate several fragments into one record.
pub(crate) fn push_entry(entry: FocusEntry, append_to: Option<Vec<FocusEntry>>) -> Vec<FocusEntry> {
    match append_to {
        Some(mut entries) => {
            entries.push(entry);
            entries
        }
        None => vec![entry],
    }
}
