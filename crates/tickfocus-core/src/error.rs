//! Error types for tickfocus-core.
//!
//! Local argument and lookup failures get their own variants;
//! anything the transport raises (auth failure, timeout, non-2xx
//! status) propagates untranslated. There is no retry and no
//! partial-failure recovery: a batch envelope either succeeds as a
//! whole or the call fails.

use thiserror::Error;

/// Error type shared by every operation in the crate.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A method that accepts "name or id" received neither. Raised
    /// before any network traffic.
    #[error("missing argument: provide {0}")]
    MissingArgument(&'static str),

    /// A by-name or by-id lookup scanned the full collection without
    /// a match.
    #[error("no {kind} matching '{name}' found")]
    NotFound { kind: &'static str, name: String },

    /// Transport failure: connection, timeout, auth, non-2xx status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body or lookup result was not the JSON shape the
    /// vendor documents.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A day stamp that is not `YYYYMMDD`.
    #[error("invalid day stamp '{0}'")]
    InvalidStamp(String),

    /// Invalid session configuration (base URL or header values).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for ApiError.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
