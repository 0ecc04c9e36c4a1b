// tests/support/helpers.rs
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    response::Response,
};
use inkpost::{
    application::services::{ApplicationServices, Ports, Repositories},
    domain::post::PostOwnershipPolicy,
    infrastructure::{
        repositories::InMemoryStore, security::BiscuitTokenManager, storage::LocalImageStore,
        util::RegexSlugGenerator,
    },
    presentation::http::{
        routes::{RouterConfig, build_router_with_rate_limiter},
        state::HttpState,
    },
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::util::ServiceExt as _;

use super::mocks::{PlainPasswordHasher, TickingClock};

pub const TEST_KEY_HEX: &str = "c2b7e4a1f0d9e8c7b6a5f4e3d2c1b0a99887766554433221100ffeeddccbbaa9";

/// A router over in-memory repositories plus the directory uploads land in.
pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(PostOwnershipPolicy::Open)
    }

    pub fn with_policy(policy: PostOwnershipPolicy) -> Self {
        let uploads = tempfile::tempdir().expect("upload dir");
        let store = InMemoryStore::new();

        let repos = Repositories {
            posts: Arc::new(store.posts()),
            categories: Arc::new(store.categories()),
            users: Arc::new(store.users()),
        };
        let token_manager = BiscuitTokenManager::new(TEST_KEY_HEX, Duration::from_secs(3600))
            .expect("token manager");
        let ports = Ports {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(token_manager),
            image_store: Arc::new(LocalImageStore::new(uploads.path())),
            clock: Arc::new(TickingClock::default()),
            slugger: Arc::new(RegexSlugGenerator),
        };

        let services = Arc::new(ApplicationServices::new(repos, ports, policy));
        let config = RouterConfig {
            upload_dir: uploads.path().to_path_buf(),
            ..RouterConfig::default()
        };
        let router = build_router_with_rate_limiter(HttpState { services }, config, false);

        Self { router, uploads }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router call")
    }

    /// Sends a JSON request and returns the status plus the parsed body.
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        read_json(self.send(request).await).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None, None).await
    }

    /// Registers `username` and returns its bearer token and user id.
    pub async fn register(&self, username: &str) -> (String, String) {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "secret123",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        (
            body["token"].as_str().expect("token").to_string(),
            body["user"]["id"].as_str().expect("user id").to_string(),
        )
    }

    pub async fn create_category(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/categories",
                Some(token),
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "category failed: {body}");
        body["data"]["id"].as_str().expect("category id").to_string()
    }

    pub async fn create_post(&self, token: &str, title: &str, category: &str) -> Value {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/posts",
                Some(token),
                Some(json!({
                    "title": title,
                    "content": format!("Body of {title}"),
                    "category": category,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "post failed: {body}");
        body["data"].clone()
    }
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("expected json, got {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

/// Asserts the `{ success: false, error }` envelope.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, expected: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(expected));
}
