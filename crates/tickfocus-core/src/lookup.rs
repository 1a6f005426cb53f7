//! Name/id resolution over freshly fetched timer lists.
//!
//! Resolution is a linear scan over one GET of the full list, on
//! purpose: caching the list could miss a timer added since the last
//! fetch. Duplicate names are allowed by the vendor, so a name lookup
//! is "first match, order unspecified" -- the order is whatever the
//! endpoint returned.

use serde_json::from_value;

use crate::error::{ApiError, Result};
use crate::transport::ApiClient;
use crate::types::Timer;

pub(crate) const TIMER_PATH: &str = "/timer";

/// How a caller identifies a timer: user-chosen name or vendor id.
#[derive(Debug, Clone, Copy)]
pub enum TimerKey<'a> {
    Name(&'a str),
    Id(&'a str),
}

impl<'a> TimerKey<'a> {
    /// Classify an optional name/id pair. Neither present is the
    /// caller's error, reported before any network traffic; a name
    /// takes precedence when both are given.
    pub fn from_options(name: Option<&'a str>, id: Option<&'a str>) -> Result<Self> {
        match (name, id) {
            (Some(name), _) => Ok(TimerKey::Name(name)),
            (None, Some(id)) => Ok(TimerKey::Id(id)),
            (None, None) => Err(ApiError::MissingArgument("a timer name or a timer id")),
        }
    }
}

/// Fetch every timer definition on the account.
pub fn fetch_timers<C: ApiClient>(client: &C) -> Result<Vec<Timer>> {
    Ok(from_value(client.http_get(TIMER_PATH)?)?)
}

/// First timer in `timers` named `name`.
pub fn find_by_name<'a>(timers: &'a [Timer], name: &str) -> Option<&'a Timer> {
    timers.iter().find(|timer| timer.name == name)
}

/// First timer in `timers` with id `id`.
pub fn find_by_id<'a>(timers: &'a [Timer], id: &str) -> Option<&'a Timer> {
    timers.iter().find(|timer| timer.id == id)
}

/// Resolve `key` against an already-fetched list.
pub fn resolve<'a>(timers: &'a [Timer], key: TimerKey<'_>) -> Result<&'a Timer> {
    match key {
        TimerKey::Name(name) => find_by_name(timers, name).ok_or_else(|| ApiError::NotFound {
            kind: "timer",
            name: name.to_string(),
        }),
        TimerKey::Id(id) => find_by_id(timers, id).ok_or_else(|| ApiError::NotFound {
            kind: "timer",
            name: id.to_string(),
        }),
    }
}

/// Resolve a timer name to its id over a fresh fetch.
pub fn timer_id_by_name<C: ApiClient>(client: &C, name: &str) -> Result<String> {
    let timers = fetch_timers(client)?;
    resolve(&timers, TimerKey::Name(name)).map(|timer| timer.id.clone())
}

/// Resolve a timer id to its full definition over a fresh fetch.
pub fn timer_by_id<C: ApiClient>(client: &C, id: &str) -> Result<Timer> {
    let timers = fetch_timers(client)?;
    resolve(&timers, TimerKey::Id(id)).cloned()
}
