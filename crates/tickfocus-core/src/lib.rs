//! # tickfocus-core
//!
//! Client bindings for TickTick's private focus/pomodoro REST API:
//! focus session records, custom timers, aggregated statistics and
//! account-wide pomodoro preferences.
//!
//! Every operation builds one JSON payload in the vendor's batch
//! envelope (`{"add": [...], "update": [...], "delete": [...]}`) and
//! issues exactly one HTTP call through an injected [`ApiClient`],
//! returning the decoded response. The session itself (cookies,
//! headers, auth) is caller-owned state described by
//! [`SessionConfig`]; this crate only reads it and never rotates or
//! refreshes credentials.
//!
//! ## Key components
//!
//! - [`FocusStats`]: read-only aggregated focus statistics
//! - [`PomoManager`]: pomodoro records, pomodoro timers, preferences
//! - [`TimerManager`]: generic named timers and records against them
//! - [`HttpTransport`]: reqwest-backed [`ApiClient`] implementation

mod batch;
pub mod error;
pub mod focus;
pub mod ids;
pub mod lookup;
pub mod pomo;
pub mod time;
pub mod timers;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, Result};
pub use focus::FocusStats;
pub use pomo::PomoManager;
pub use timers::TimerManager;
pub use transport::{ApiClient, HttpTransport, SessionConfig, DEFAULT_BASE_URL};
pub use types::{
    FocusEntry, FocusRecord, NewTimer, PomoPreferences, RecordOptions, Timer, TimerKind,
};
