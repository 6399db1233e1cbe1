//! Integration tests for note placement and CRUD.

use std::time::Duration;

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_note_in_missing_folder_is_not_created() {
    let app = TestApp::new();
    let code = app.signup("300001").await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": "Lost",
                "content": "body",
                "folderId": uuid::Uuid::new_v4().to_string(),
            })),
            Some(&code),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let notes = app.request("GET", "/api/notes", None, Some(&code)).await;
    assert_eq!(notes.body["count"], 0);
}

#[tokio::test]
async fn test_folder_contents_ordering() {
    let app = TestApp::new();
    let code = app.signup("300002").await;
    let inbox = app.create_folder(&code, "Inbox", None).await;

    app.create_note(&code, "older", Some(&inbox)).await;
    tokio::time::sleep(Duration::from_millis(2)).await;
    app.request(
        "POST",
        "/api/notes",
        Some(json!({
            "title": "pinned",
            "content": "body",
            "isPinned": true,
            "folderId": inbox,
        })),
        Some(&code),
    )
    .await;
    tokio::time::sleep(Duration::from_millis(2)).await;
    app.create_note(&code, "newer", Some(&inbox)).await;

    let contents = app
        .request(
            "GET",
            &format!("/api/folders/{inbox}/contents"),
            None,
            Some(&code),
        )
        .await;
    assert_eq!(contents.body["currentFolder"]["name"], "Inbox");
    let titles: Vec<&str> = contents.body["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["pinned", "newer", "older"]);
}

#[tokio::test]
async fn test_note_crud() {
    let app = TestApp::new();
    let code = app.signup("300003").await;
    let id = app.create_note(&code, "draft", None).await;

    let fetched = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&code))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["note"]["title"], "draft");
    assert!(fetched.body["note"]["folderId"].is_null());

    let updated = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(json!({ "title": "final", "tags": [" a ", ""], "isPinned": true })),
            Some(&code),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["note"]["title"], "final");
    assert_eq!(updated.body["note"]["tags"], json!(["a"]));
    assert_eq!(updated.body["note"]["isPinned"], true);
    assert_eq!(updated.body["note"]["content"], "body");

    let deleted = app
        .request("DELETE", &format!("/api/notes/{id}"), None, Some(&code))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&code))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notes_are_scoped_to_their_owner() {
    let app = TestApp::new();
    let alice = app.signup("300004").await;
    let bob = app.signup("300005").await;
    let id = app.create_note(&alice, "secret", None).await;

    let read = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&bob))
        .await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let edit = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(json!({ "title": "mine" })),
            Some(&bob),
        )
        .await;
    assert_eq!(edit.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/notes", None, Some(&bob)).await;
    assert_eq!(list.body["count"], 0);
}

#[tokio::test]
async fn test_note_validation() {
    let app = TestApp::new();
    let code = app.signup("300006").await;

    let missing = app
        .request("POST", "/api/notes", Some(json!({ "title": "t" })), Some(&code))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let bad_image = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": "t",
                "content": "c",
                "images": [{ "id": "1", "data": "%%%", "mimeType": "image/png" }],
            })),
            Some(&code),
        )
        .await;
    assert_eq!(bad_image.status, StatusCode::BAD_REQUEST);

    let good_image = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": "t",
                "content": "c",
                "images": [{ "id": "1", "data": "aGVsbG8=", "mimeType": "image/png" }],
            })),
            Some(&code),
        )
        .await;
    assert_eq!(good_image.status, StatusCode::CREATED);
    assert_eq!(good_image.body["note"]["images"][0]["mimeType"], "image/png");

    let data_url = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": "t",
                "content": "c",
                "images": [{
                    "id": "2",
                    "data": "data:image/png;base64,aGVsbG8=",
                    "mimeType": "image/png",
                    "name": "paste.png",
                }],
            })),
            Some(&code),
        )
        .await;
    assert_eq!(data_url.status, StatusCode::CREATED);
    assert_eq!(
        data_url.body["note"]["images"][0]["data"],
        "data:image/png;base64,aGVsbG8="
    );

    let mismatched = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({
                "title": "t",
                "content": "c",
                "images": [{
                    "id": "3",
                    "data": "data:image/gif;base64,aGVsbG8=",
                    "mimeType": "image/png",
                }],
            })),
            Some(&code),
        )
        .await;
    assert_eq!(mismatched.status, StatusCode::BAD_REQUEST);
}
