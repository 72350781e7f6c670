// ============================================================================
// FLAT-FILE SOCIAL MEDIA API
// ============================================================================

// - Users keyed by email, posts keyed by UUID
// - One JSON file as the whole database
// - Serialised read-modify-write with atomic file replacement
// - JSON error bodies
// - Structured logging

pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;

pub use config::AppConfig;
pub use states::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode, header},
    routing::get,
};
use routes::{health, method_not_supported, not_found, post, user};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";

/// Build the application router around an already constructed state.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // `/users/` and `/posts/` carry an empty key and behave like the bare
    // collection paths.
    let users = get(user::get_user_without_email)
        .post(user::create_user)
        .fallback(method_not_supported);
    let posts = get(post::get_posts_without_email)
        .post(post::create_post)
        .fallback(method_not_supported);

    Router::new()
        .route("/", get(health::sample_user))
        .route("/err", get(health::sample_error))
        .route("/health", get(health::health_check))
        .route("/users", users.clone())
        .route("/users/", users)
        .route(
            "/users/{email}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user)
                .fallback(method_not_supported),
        )
        .route("/posts", posts.clone())
        .route("/posts/", posts)
        .route(
            "/posts/{id}",
            get(post::get_posts)
                .delete(post::delete_post)
                .fallback(method_not_supported),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOWED_METHODS),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                ))
                .layer(cors),
        )
}
