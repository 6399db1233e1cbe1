//! Integration tests for the folder tree endpoints.

use http::StatusCode;
use serde_json::json;

use notevault_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_nested_folders_materializes_paths() {
    let app = TestApp::new();
    let code = app.signup("100001").await;

    let work = app.create_folder(&code, "Work", None).await;
    let projects = app.create_folder(&code, "Projects", Some(&work)).await;
    app.create_folder(&code, "Alpha", Some(&projects)).await;

    let response = app.request("GET", "/api/folders/all", None, Some(&code)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 3);

    let paths: Vec<(&str, &str)> = response.body["folders"]
        .as_array()
        .expect("folders")
        .iter()
        .map(|f| (f["path"].as_str().unwrap(), f["name"].as_str().unwrap()))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("/", "Work"),
            ("/Work", "Projects"),
            ("/Work/Projects", "Alpha"),
        ]
    );
}

#[tokio::test]
async fn test_rename_leaves_descendant_paths() {
    let app = TestApp::new();
    let code = app.signup("100002").await;
    let work = app.create_folder(&code, "Work", None).await;
    let projects = app.create_folder(&code, "Projects", Some(&work)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{work}"),
            Some(json!({ "name": "Job" })),
            Some(&code),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"]["name"], "Job");
    assert_eq!(response.body["folder"]["path"], "/");

    let contents = app
        .request(
            "GET",
            &format!("/api/folders/{work}/contents"),
            None,
            Some(&code),
        )
        .await;
    assert_eq!(contents.body["folders"][0]["id"], projects.as_str());
    assert_eq!(contents.body["folders"][0]["path"], "/Work");
}

#[tokio::test]
async fn test_rename_with_cascading_paths() {
    let mut config = AppConfig::default();
    config.folders.cascade_rename_paths = true;
    let app = TestApp::with_config(config);
    let code = app.signup("100003").await;
    let work = app.create_folder(&code, "Work", None).await;
    app.create_folder(&code, "Projects", Some(&work)).await;

    app.request(
        "PUT",
        &format!("/api/folders/{work}"),
        Some(json!({ "name": "Job" })),
        Some(&code),
    )
    .await;

    let contents = app
        .request(
            "GET",
            &format!("/api/folders/{work}/contents"),
            None,
            Some(&code),
        )
        .await;
    assert_eq!(contents.body["folders"][0]["path"], "/Job");
}

#[tokio::test]
async fn test_cascade_delete_removes_subtree() {
    let app = TestApp::new();
    let code = app.signup("100004").await;
    let a = app.create_folder(&code, "A", None).await;
    let b = app.create_folder(&code, "B", Some(&a)).await;
    app.create_note(&code, "N1", Some(&b)).await;
    app.create_note(&code, "loose", None).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{a}"), None, Some(&code))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["foldersDeleted"], 2);
    assert_eq!(response.body["notesDeleted"], 1);

    let all = app.request("GET", "/api/folders/all", None, Some(&code)).await;
    assert_eq!(all.body["count"], 0);

    let notes = app.request("GET", "/api/notes", None, Some(&code)).await;
    assert_eq!(notes.body["count"], 1);

    let again = app
        .request("DELETE", &format!("/api/folders/{a}"), None, Some(&code))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_folders_are_scoped_to_their_owner() {
    let app = TestApp::new();
    let alice = app.signup("200001").await;
    let bob = app.signup("200002").await;
    let work = app.create_folder(&alice, "Work", None).await;

    let spy = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Spy", "parentId": work })),
            Some(&bob),
        )
        .await;
    assert_eq!(spy.status, StatusCode::NOT_FOUND);

    let contents = app
        .request(
            "GET",
            &format!("/api/folders/{work}/contents"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(contents.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", &format!("/api/folders/{work}"), None, Some(&bob))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let listing = app.request("GET", "/api/folders", None, Some(&bob)).await;
    assert_eq!(listing.body["count"], 0);
}

#[tokio::test]
async fn test_rename_by_other_account_is_not_found() {
    for cascade in [false, true] {
        let mut config = AppConfig::default();
        config.folders.cascade_rename_paths = cascade;
        let app = TestApp::with_config(config);
        let alice = app.signup("200011").await;
        let bob = app.signup("200012").await;
        let work = app.create_folder(&alice, "Work", None).await;
        app.create_folder(&alice, "Projects", Some(&work)).await;

        let rename = app
            .request(
                "PUT",
                &format!("/api/folders/{work}"),
                Some(json!({ "name": "Hijacked" })),
                Some(&bob),
            )
            .await;
        assert_eq!(rename.status, StatusCode::NOT_FOUND);

        let all = app.request("GET", "/api/folders/all", None, Some(&alice)).await;
        assert_eq!(all.body["folders"][0]["name"], "Work");
        assert_eq!(all.body["folders"][0]["path"], "/");
        assert_eq!(all.body["folders"][1]["name"], "Projects");
        assert_eq!(all.body["folders"][1]["path"], "/Work");
    }
}

#[tokio::test]
async fn test_root_contents_and_listing() {
    let app = TestApp::new();
    let code = app.signup("100005").await;

    let empty = app
        .request("GET", "/api/folders/root/contents", None, Some(&code))
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert!(empty.body["currentFolder"].is_null());
    assert_eq!(empty.body["folders"], json!([]));
    assert_eq!(empty.body["notes"], json!([]));

    let work = app.create_folder(&code, "work", None).await;
    app.create_folder(&code, "Archive", None).await;
    app.create_folder(&code, "inner", Some(&work)).await;

    let roots = app.request("GET", "/api/folders", None, Some(&code)).await;
    let names: Vec<&str> = roots.body["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Archive", "work"]);

    let children = app
        .request(
            "GET",
            &format!("/api/folders?parentId={work}"),
            None,
            Some(&code),
        )
        .await;
    assert_eq!(children.body["count"], 1);
    assert_eq!(children.body["folders"][0]["name"], "inner");
}

#[tokio::test]
async fn test_tree_and_breadcrumbs() {
    let app = TestApp::new();
    let code = app.signup("100006").await;
    let work = app.create_folder(&code, "Work", None).await;
    let projects = app.create_folder(&code, "Projects", Some(&work)).await;

    let tree = app.request("GET", "/api/folders/tree", None, Some(&code)).await;
    assert_eq!(tree.status, StatusCode::OK);
    assert_eq!(tree.body["count"], 2);
    assert_eq!(tree.body["tree"][0]["name"], "Work");
    assert_eq!(tree.body["tree"][0]["children"][0]["name"], "Projects");

    let crumbs = app
        .request(
            "GET",
            &format!("/api/folders/{projects}/breadcrumbs"),
            None,
            Some(&code),
        )
        .await;
    assert_eq!(crumbs.status, StatusCode::OK);
    assert_eq!(crumbs.body["breadcrumbs"][0]["name"], "Work");
    assert_eq!(crumbs.body["breadcrumbs"][1]["name"], "Projects");
}

#[tokio::test]
async fn test_invalid_input() {
    let app = TestApp::new();
    let code = app.signup("100007").await;

    let blank = app
        .request("POST", "/api/folders", Some(json!({ "name": "   " })), Some(&code))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], "VALIDATION_ERROR");

    let long = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "x".repeat(101) })),
            Some(&code),
        )
        .await;
    assert_eq!(long.status, StatusCode::BAD_REQUEST);

    let bad_id = app
        .request("GET", "/api/folders/not-an-id/contents", None, Some(&code))
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
}
