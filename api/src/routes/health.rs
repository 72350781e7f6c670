use crate::{dto::HealthResponse, errors::ApiError, models::User};
use axum::Json;
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().timestamp(),
    })
}

/// GET /
/// Diagnostic: echoes a sample user payload.
pub async fn sample_user() -> Json<User> {
    Json(User {
        created_at: Utc::now(),
        email: "test@example.com".into(),
        password: String::new(),
        name: String::new(),
        age: 0,
    })
}

/// GET /err
/// Diagnostic: always fails with a 500.
pub async fn sample_error() -> ApiError {
    ApiError::Internal("server error".into())
}
