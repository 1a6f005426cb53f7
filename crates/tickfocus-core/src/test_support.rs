//! Recording stub client shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::transport::ApiClient;

/// One HTTP call the stub observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// In-memory stand-in for the vendor session. Records every HTTP
/// call and replays queued responses in order, falling back to
/// `null`. Entity lookups resolve against seeded JSON objects without
/// touching the call log, mirroring the real cache. With `echo_puts`
/// a GET replays the body of the last PUT, which is how the
/// preferences round-trip is verified.
#[derive(Default)]
pub struct StubClient {
    calls: RefCell<Vec<Call>>,
    responses: RefCell<VecDeque<Value>>,
    pub entities: Vec<Value>,
    pub echo_puts: bool,
    last_put: RefCell<Option<Value>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Value>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) -> Result<Value> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        Ok(self.responses.borrow_mut().pop_front().unwrap_or(Value::Null))
    }
}

impl ApiClient for StubClient {
    fn http_get(&self, path: &str) -> Result<Value> {
        if self.echo_puts {
            if let Some(last) = self.last_put.borrow().clone() {
                self.calls.borrow_mut().push(Call {
                    method: "GET",
                    path: path.to_string(),
                    body: None,
                });
                return Ok(last);
            }
        }
        self.record("GET", path, None)
    }

    fn http_post(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("POST", path, Some(body))
    }

    fn http_put(&self, path: &str, body: &Value) -> Result<Value> {
        *self.last_put.borrow_mut() = Some(body.clone());
        self.record("PUT", path, Some(body))
    }

    fn http_delete(&self, path: &str) -> Result<Value> {
        self.record("DELETE", path, None)
    }

    fn entity_by_id(&self, id: &str) -> Result<Value> {
        self.entities
            .iter()
            .find(|entity| entity["id"] == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: "entity",
                name: id.to_string(),
            })
    }

    fn entity_by_field(&self, field: &str, value: &str) -> Result<Value> {
        self.entities
            .iter()
            .find(|entity| entity[field] == value)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: "entity",
                name: value.to_string(),
            })
    }
}
