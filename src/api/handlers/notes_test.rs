//! Integration tests for Note API endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use super::test_support::{assert_json_content_type, body_bytes, json_body, send, test_app};

fn sample_note() -> Value {
    json!({
        "id": "n1",
        "title": "T",
        "content": "<b>hi</b>",
        "tags": ["a"],
        "category": "x",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

async fn list(app: &axum::Router) -> Value {
    let response = send(app, "GET", "/api/notes", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    json_body(response).await
}

#[tokio::test(flavor = "multi_thread")]
async fn create_update_list_note() {
    let app = test_app().await;

    let response = send(&app, "POST", "/api/notes", Some(sample_note())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({"id": "n1"}));

    let response = send(
        &app,
        "PUT",
        "/api/notes/n1",
        Some(json!({
            "title": "T",
            "content": "<p>updated</p>",
            "tags": ["a"],
            "category": "x",
            "updatedAt": "2024-01-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = list(&app).await;
    let notes = body.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], "n1");
    assert_eq!(notes[0]["content"], "<p>updated</p>");
    assert_eq!(notes[0]["createdAt"], "2024-01-01T00:00:00Z");
    assert!(notes[0]["updatedAt"].as_str().unwrap() > "2024-01-01T00:00:00Z");
}

#[tokio::test(flavor = "multi_thread")]
async fn note_fields_round_trip() {
    let app = test_app().await;

    send(&app, "POST", "/api/notes", Some(sample_note())).await;

    assert_eq!(list(&app).await, json!([sample_note()]));
}

#[tokio::test(flavor = "multi_thread")]
async fn note_tags_keep_order() {
    let app = test_app().await;

    let mut note = sample_note();
    note["tags"] = json!(["work", "urgent"]);
    send(&app, "POST", "/api/notes", Some(note)).await;

    assert_eq!(list(&app).await[0]["tags"], json!(["work", "urgent"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn script_is_stripped_on_create() {
    let app = test_app().await;

    let mut note = sample_note();
    note["content"] = json!("<p>ok</p><script>alert(1)</script>");
    send(&app, "POST", "/api/notes", Some(note)).await;

    let content = list(&app).await[0]["content"].as_str().unwrap().to_string();
    assert!(content.contains("<p>ok</p>"));
    assert!(!content.contains("<script>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn script_is_stripped_on_update() {
    let app = test_app().await;

    send(&app, "POST", "/api/notes", Some(sample_note())).await;
    send(
        &app,
        "PUT",
        "/api/notes/n1",
        Some(json!({
            "title": "T",
            "content": "<p onclick=\"x()\">ok</p><script>alert(1)</script><img src=x onerror=y>",
            "tags": []
        })),
    )
    .await;

    assert_eq!(list(&app).await[0]["content"], "<p>ok</p>");
}

#[tokio::test(flavor = "multi_thread")]
async fn notes_listed_newest_updated_first() {
    let app = test_app().await;

    for (id, updated) in [
        ("old", "2024-01-01T00:00:00Z"),
        ("new", "2024-03-01T00:00:00Z"),
        ("mid", "2024-02-01T00:00:00Z"),
    ] {
        let mut note = sample_note();
        note["id"] = json!(id);
        note["updatedAt"] = json!(updated);
        send(&app, "POST", "/api/notes", Some(note)).await;
    }

    // Touching "old" moves it to the front
    send(
        &app,
        "PUT",
        "/api/notes/old",
        Some(json!({"title": "T", "content": "", "tags": []})),
    )
    .await;

    let ids: Vec<String> = list(&app)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["old", "new", "mid"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_note_id_is_server_error() {
    let app = test_app().await;

    send(&app, "POST", "/api/notes", Some(sample_note())).await;
    let response = send(&app, "POST", "/api/notes", Some(sample_note())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());

    assert_eq!(list(&app).await.as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn tag_with_comma_is_rejected() {
    let app = test_app().await;

    let mut note = sample_note();
    note["tags"] = json!(["a,b"]);
    let response = send(&app, "POST", "/api/notes", Some(note)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_note_is_ok_and_creates_nothing() {
    let app = test_app().await;

    let response = send(
        &app,
        "PUT",
        "/api/notes/ghost",
        Some(json!({"title": "T", "content": "", "tags": []})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_note_twice() {
    let app = test_app().await;

    send(&app, "POST", "/api/notes", Some(sample_note())).await;

    let response = send(&app, "DELETE", "/api/notes/n1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, "DELETE", "/api/notes/n1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_update_body_is_client_error() {
    let app = test_app().await;

    send(&app, "POST", "/api/notes", Some(sample_note())).await;
    let response = send(&app, "PUT", "/api/notes/n1", Some(json!({"content": "no title"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(list(&app).await[0]["content"], "<b>hi</b>");
}

#[tokio::test(flavor = "multi_thread")]
async fn unmatched_note_sub_paths_are_not_found() {
    let app = test_app().await;

    for (method, uri) in [
        ("PUT", "/api/notes/a/b"),
        ("DELETE", "/api/notes/a/b"),
        ("PUT", "/api/notes/"),
        ("DELETE", "/api/notes"),
        ("PUT", "/api/notes"),
        ("PUT", "/api/unknown"),
        ("DELETE", "/api/unknown/1"),
    ] {
        let response = send(&app, method, uri, Some(json!({"title": "T"}))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
    }
}
