//! The transport capability trait and its reqwest-backed
//! implementation.
//!
//! The original session object is duck-typed ambient state; here it
//! is an explicit trait so record managers can run against any
//! transport, and against an in-memory stub in tests.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, COOKIE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// API root for the vendor's private v2 endpoints.
pub const DEFAULT_BASE_URL: &str = "https://api.ticktick.com/api/v2";

/// Capabilities every injected client must provide: the four HTTP
/// verbs against the vendor API root, plus lookups into the local
/// task/project cache kept by the surrounding session layer.
///
/// Errors from the HTTP verbs propagate to callers untranslated; the
/// managers never retry or reinterpret them.
pub trait ApiClient {
    /// GET `path` (relative to the API root) and decode the body.
    fn http_get(&self, path: &str) -> Result<Value>;

    /// POST `body` as JSON to `path` and decode the response.
    fn http_post(&self, path: &str, body: &Value) -> Result<Value>;

    /// PUT `body` as JSON to `path` and decode the response.
    fn http_put(&self, path: &str, body: &Value) -> Result<Value>;

    /// DELETE `path` and decode the response (`null` for an empty
    /// body).
    fn http_delete(&self, path: &str) -> Result<Value>;

    /// Look up a cached task or project by its vendor id.
    fn entity_by_id(&self, id: &str) -> Result<Value>;

    /// Look up a cached entity by an exact field match, e.g.
    /// `("title", "Write report")`.
    fn entity_by_field(&self, field: &str, value: &str) -> Result<Value>;
}

/// Caller-owned session state: where the API lives and which cookies
/// and headers authenticate the account. This crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// API root, [`DEFAULT_BASE_URL`] unless overridden.
    pub base_url: String,
    /// Full `Cookie` header value, session cookie included.
    pub cookie: String,
    /// Additional headers sent on every request (device id,
    /// user agent, CSRF token -- whatever the session layer needs).
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl SessionConfig {
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie: cookie.into(),
            headers: Vec::new(),
        }
    }
}

/// Blocking reqwest implementation of [`ApiClient`].
///
/// The session's cookie and headers are installed as client defaults
/// at construction. Entity resolution is backed by an in-memory map
/// seeded by whoever owns the task/project sync state; this crate
/// does not fetch or refresh it.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
    entities: HashMap<String, Value>,
}

impl HttpTransport {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if !config.cookie.is_empty() {
            let value = config
                .cookie
                .parse()
                .map_err(|_| ApiError::Config("invalid cookie value".to_string()))?;
            headers.insert(COOKIE, value);
        }
        for (name, value) in &config.headers {
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::Config(format!("invalid header name '{name}'")))?;
            let value = value
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid value for header '{name}'")))?;
            headers.insert(header, value);
        }

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            entities: HashMap::new(),
        })
    }

    /// Seed the entity cache with task/project objects carrying an
    /// `id` field. Objects without one are dropped.
    pub fn seed_entities<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Value>,
    {
        for entity in entities {
            if let Some(id) = entity["id"].as_str().map(str::to_string) {
                self.entities.insert(id, entity);
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn decode(response: reqwest::blocking::Response) -> Result<Value> {
        let text = response.error_for_status()?.text()?;
        if text.is_empty() {
            // some DELETE endpoints answer with no body at all
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ApiClient for HttpTransport {
    fn http_get(&self, path: &str) -> Result<Value> {
        Self::decode(self.client.get(self.url(path)).send()?)
    }

    fn http_post(&self, path: &str, body: &Value) -> Result<Value> {
        Self::decode(self.client.post(self.url(path)).json(body).send()?)
    }

    fn http_put(&self, path: &str, body: &Value) -> Result<Value> {
        Self::decode(self.client.put(self.url(path)).json(body).send()?)
    }

    fn http_delete(&self, path: &str) -> Result<Value> {
        Self::decode(self.client.delete(self.url(path)).send()?)
    }

    fn entity_by_id(&self, id: &str) -> Result<Value> {
        self.entities.get(id).cloned().ok_or_else(|| ApiError::NotFound {
            kind: "entity",
            name: id.to_string(),
        })
    }

    fn entity_by_field(&self, field: &str, value: &str) -> Result<Value> {
        self.entities
            .values()
            .find(|entity| entity[field] == value)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: "entity",
                name: value.to_string(),
            })
    }
}
