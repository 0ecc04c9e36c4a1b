// tests/http_auth.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{TestApp, assert_error};

#[tokio::test]
async fn register_returns_token_and_user() {
    let app = TestApp::new();

    let (status, body) = app
        .call(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "alice",
                "email": "Alice@Example.com",
                "password": "secret123",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["success"], json!(true));
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["expiresIn"], json!(3600));
    assert_eq!(body["user"]["username"], json!("alice"));
    assert_eq!(body["user"]["email"], json!("alice@example.com"));
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn register_requires_every_field() {
    let app = TestApp::new();

    let (status, body) = app
        .call(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": "alice", "password": "secret123" })),
        )
        .await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Please provide username, email and password",
    );
}

#[tokio::test]
async fn duplicate_email_is_a_bad_request() {
    let app = TestApp::new();
    app.register("alice").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "alice2",
                "email": "alice@example.com",
                "password": "secret123",
            })),
        )
        .await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Email or username already exists",
    );
}

#[tokio::test]
async fn login_accepts_registered_credentials() {
    let app = TestApp::new();
    app.register("bob").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "bob@example.com", "password": "secret123" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], json!("bob"));
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email_alike() {
    let app = TestApp::new();
    app.register("bob").await;

    for payload in [
        json!({ "email": "bob@example.com", "password": "wrong-one" }),
        json!({ "email": "nobody@example.com", "password": "secret123" }),
    ] {
        let (status, body) = app
            .call(Method::POST, "/api/auth/login", None, Some(payload))
            .await;
        assert_error(status, &body, StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
}

#[tokio::test]
async fn profile_needs_a_valid_token() {
    let app = TestApp::new();
    let (token, user_id) = app.register("carol").await;

    let (status, body) = app.get("/api/auth/me").await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "Not authorized, no token");

    let (status, body) = app
        .call(Method::GET, "/api/auth/me", Some("garbage"), None)
        .await;
    assert_error(
        status,
        &body,
        StatusCode::UNAUTHORIZED,
        "Not authorized, token failed",
    );

    let (status, body) = app
        .call(Method::GET, "/api/auth/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["user"]["id"], json!(user_id));
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));

    let (status, body) = app.get("/api/nothing-here").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Route not found");
}
