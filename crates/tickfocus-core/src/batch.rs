//! Batch-envelope construction shared by the record managers.
//!
//! The vendor applies one envelope (`{"add": [...], "update": [...],
//! "delete": [...]}`) atomically per request; each builder here
//! produces exactly one envelope for exactly one HTTP call.

use chrono::{Local, NaiveDateTime};
use serde_json::{json, Value};

use crate::ids::generate_id;
use crate::time::to_api_timestamp;
use crate::types::{FocusEntry, NewTimer, RecordOptions, TimerKind};

/// Envelope adding one timer definition. `kind` is chosen by the
/// calling manager rather than taken from `timer`, since the pomodoro
/// manager only creates pomodoro timers. Missing id and timestamps
/// fall back to a fresh 24-hex id and the wall clock of this call.
pub(crate) fn timer_add_envelope(timer: NewTimer, kind: TimerKind) -> Value {
    let now = Local::now().naive_local();
    json!({
        "add": [{
            "id": timer.id.unwrap_or_else(generate_id),
            "icon": timer.icon,
            "color": timer.color,
            "name": timer.name,
            "type": kind,
            "pomodoroTime": timer.pomodoro_time,
            "status": timer.status,
            "sortOrder": timer.sort_order,
            "createdTime": to_api_timestamp(timer.created.unwrap_or(now)),
            "modifiedTime": to_api_timestamp(timer.modified.unwrap_or(now)),
        }],
        "update": [],
        "delete": [],
    })
}

/// Envelope deleting one timer definition by id.
pub(crate) fn timer_delete_envelope(timer_id: &str) -> Value {
    json!({
        "add": [],
        "update": [],
        "delete": [timer_id],
    })
}

/// Envelope adding one focus record over `tasks`. A fresh record id
/// is generated per call, and a missing end time is the wall clock of
/// this call -- never a default captured earlier. The timing batch
/// endpoint additionally wants the record marked as newly added, as
/// the string `"true"`.
pub(crate) fn record_add_envelope(
    tasks: &[FocusEntry],
    start_time: NaiveDateTime,
    opts: &RecordOptions,
    mark_added: bool,
) -> Value {
    let end_time = opts.end_time.unwrap_or_else(|| Local::now().naive_local());
    let mut record = json!({
        "id": generate_id(),
        "startTime": to_api_timestamp(start_time),
        "endTime": to_api_timestamp(end_time),
        "status": opts.status,
        "pauseDuration": opts.pause_duration,
        "tasks": tasks,
        "note": opts.note,
    });
    if mark_added {
        record["added"] = json!("true");
    }
    json!({
        "add": [record],
        "update": [],
    })
}
