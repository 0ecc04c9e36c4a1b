// tests/http_categories.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{TestApp, assert_error};

#[tokio::test]
async fn create_derives_slug_and_list_is_sorted_by_name() {
    let app = TestApp::new();
    let (token, _) = app.register("editor").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/categories",
            Some(&token),
            Some(json!({ "name": "Web Development" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["slug"], json!("web-development"));

    app.create_category(&token, "Databases").await;

    let (status, body) = app.get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Databases", "Web Development"]);
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let app = TestApp::new();
    let (token, _) = app.register("editor").await;
    app.create_category(&token, "Rust").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/categories",
            Some(&token),
            Some(json!({ "name": "Rust" })),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Category already exists");
}

#[tokio::test]
async fn distinct_names_may_share_a_slug() {
    let app = TestApp::new();
    let (token, _) = app.register("editor").await;

    for name in ["C", "C++"] {
        let (status, body) = app
            .call(
                Method::POST,
                "/api/categories",
                Some(&token),
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["data"]["slug"], json!("c"));
    }

    let (_, body) = app.get("/api/categories").await;
    assert_eq!(body["count"], json!(2));
}

#[tokio::test]
async fn create_requires_auth_and_a_name() {
    let app = TestApp::new();

    let (status, body) = app
        .call(
            Method::POST,
            "/api/categories",
            None,
            Some(json!({ "name": "Rust" })),
        )
        .await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "Not authorized, no token");

    let (token, _) = app.register("editor").await;
    let (status, body) = app
        .call(Method::POST, "/api/categories", Some(&token), Some(json!({})))
        .await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Please provide a category name",
    );
}

#[tokio::test]
async fn rename_updates_slug_and_posts_follow() {
    let app = TestApp::new();
    let (token, _) = app.register("editor").await;
    let id = app.create_category(&token, "Devops").await;
    app.create_post(&token, "Shipping things", &id).await;

    let (status, body) = app
        .call(
            Method::PUT,
            &format!("/api/categories/{id}"),
            Some(&token),
            Some(json!({ "name": "Platform Engineering" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["slug"], json!("platform-engineering"));

    let (_, body) = app.get("/api/posts/shipping-things").await;
    assert_eq!(body["data"]["category"]["name"], json!("Platform Engineering"));
}

#[tokio::test]
async fn rename_of_unknown_category_is_not_found() {
    let app = TestApp::new();
    let (token, _) = app.register("editor").await;

    let (status, body) = app
        .call(
            Method::PUT,
            "/api/categories/not-an-id",
            Some(&token),
            Some(json!({ "name": "Anything" })),
        )
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Category not found");
}
