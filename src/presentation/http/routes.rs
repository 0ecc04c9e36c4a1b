// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::infrastructure::storage::UPLOADS_ROUTE;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, categories, posts},
    error::HttpError,
    middleware::rate_limit::auth_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post, put},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

/// Room for multipart framing and the text fields around an image.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Router settings that come from configuration.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".into()],
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl From<&AppConfig> for RouterConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            upload_dir: config.upload_dir().to_path_buf(),
            max_upload_bytes: config.max_upload_bytes(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, config: RouterConfig) -> Router {
    build_router_with_rate_limiter(state, config, true)
}

/// The limiter keys on the client IP, so callers without connect info
/// (in-process tests) turn it off.
pub fn build_router_with_rate_limiter(
    state: HttpState,
    config: RouterConfig,
    rate_limit: bool,
) -> Router {
    let mut credential_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));
    let limiter = if rate_limit {
        auth_rate_limit_layer()
    } else {
        None
    };
    if let Some(layer) = limiter {
        credential_routes = credential_routes.layer(layer);
    }
    let auth_routes = credential_routes.route("/me", get(auth::profile));

    let category_routes = Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/{id}", put(categories::rename_category));

    let post_routes = Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/search", get(posts::search_posts))
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/{id}/comments", post(posts::add_comment))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            config.max_upload_bytes + FORM_OVERHEAD_BYTES,
        ));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/auth", auth_routes)
        .nest("/api/categories", category_routes)
        .nest("/api/posts", post_routes)
        .nest_service(UPLOADS_ROUTE, ServeDir::new(&config.upload_dir))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .layer(Extension(state))
}

async fn not_found() -> HttpError {
    HttpError::new(StatusCode::NOT_FOUND, "Route not found")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
