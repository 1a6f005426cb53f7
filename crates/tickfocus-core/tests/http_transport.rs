//! HTTP-level tests of the reqwest transport against a local mock
//! server.

use mockito::{Matcher, Server};
use serde_json::{json, Value};
use tickfocus_core::{ApiClient, ApiError, HttpTransport, SessionConfig};

fn transport_for(server: &Server) -> HttpTransport {
    let mut config = SessionConfig::new("t=session-cookie");
    config.base_url = server.url();
    config
        .headers
        .push(("x-device".to_string(), "tickfocus-test".to_string()));
    HttpTransport::new(&config).unwrap()
}

#[test]
fn get_decodes_json_and_forwards_session_headers() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/pomodoros/timeline")
        .match_header("cookie", "t=session-cookie")
        .match_header("x-device", "tickfocus-test")
        .with_body(r#"[{"id": "r1"}]"#)
        .create();

    let transport = transport_for(&server);
    let body = transport.http_get("/pomodoros/timeline").unwrap();

    assert_eq!(body, json!([{"id": "r1"}]));
    mock.assert();
}

#[test]
fn post_sends_the_envelope_as_json() {
    let mut server = Server::new();
    let envelope = json!({"add": [], "update": [], "delete": ["t1"]});
    let mock = server
        .mock("POST", "/timer")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(envelope.clone()))
        .with_body("{}")
        .create();

    let transport = transport_for(&server);
    transport.http_post("/timer", &envelope).unwrap();
    mock.assert();
}

#[test]
fn put_sends_the_preference_object() {
    let mut server = Server::new();
    let preferences = json!({"pomoDuration": 25, "soundsOn": true});
    let mock = server
        .mock("PUT", "/user/preferences/pomodoro")
        .match_body(Matcher::Json(preferences.clone()))
        .with_body(r#"{"pomoDuration": 25, "soundsOn": true}"#)
        .create();

    let transport = transport_for(&server);
    let body = transport
        .http_put("/user/preferences/pomodoro", &preferences)
        .unwrap();
    assert_eq!(body["pomoDuration"], 25);
    mock.assert();
}

#[test]
fn delete_with_empty_body_decodes_to_null() {
    let mut server = Server::new();
    let mock = server.mock("DELETE", "/pomodoro/r1").with_status(200).create();

    let transport = transport_for(&server);
    let body = transport.http_delete("/pomodoro/r1").unwrap();
    assert_eq!(body, Value::Null);
    mock.assert();
}

#[test]
fn non_success_status_surfaces_as_a_network_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pomodoros/timeline")
        .with_status(401)
        .create();

    let transport = transport_for(&server);
    let err = transport.http_get("/pomodoros/timeline").unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn malformed_json_surfaces_as_a_json_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/timer")
        .with_body("not json at all")
        .create();

    let transport = transport_for(&server);
    let err = transport.http_get("/timer").unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}

#[test]
fn seeded_entities_resolve_by_id_and_field() {
    let server = Server::new();
    let mut transport = transport_for(&server);
    transport.seed_entities(vec![
        json!({"id": "abc", "title": "Write report", "projectId": "p1"}),
        json!({"id": "p1", "name": "Work"}),
    ]);

    assert_eq!(transport.entity_by_id("p1").unwrap()["name"], "Work");
    assert_eq!(
        transport.entity_by_field("title", "Write report").unwrap()["id"],
        "abc"
    );
    assert!(matches!(
        transport.entity_by_id("missing").unwrap_err(),
        ApiError::NotFound { kind: "entity", .. }
    ));
}
