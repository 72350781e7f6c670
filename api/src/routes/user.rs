use crate::{
    AppState,
    dto::JsonBody,
    errors::ApiError,
    models::{NewUser, User, UserUpdate},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// POST /users
/// Body: { "email": "...", "password": "...", "name": "...", "age": 20 }
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> Result<StatusCode, ApiError> {
    state.db.create_user(payload).await?;

    Ok(StatusCode::CREATED)
}

/// GET /users/{email}
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.db.get_user(&email).await?;

    Ok(Json(user))
}

/// GET /users
/// No email in the path, so this looks up the empty key and reports it
/// missing.
pub async fn get_user_without_email(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    get_user(State(state), Path(String::new())).await
}

/// PUT /users/{email}
/// Body: { "password": "...", "name": "...", "age": 21 }
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    JsonBody(payload): JsonBody<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    let user = state.db.update_user(&email, payload).await?;

    Ok(Json(user))
}

/// DELETE /users/{email}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_user(&email).await?;

    Ok(Json(json!({})))
}
