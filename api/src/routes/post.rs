use crate::{AppState, dto::CreatePostRequest, dto::JsonBody, errors::ApiError, models::Post};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// POST /posts
/// Body: { "userEmail": "...", "text": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .db
        .create_post(&payload.user_email, &payload.text)
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /posts/{email}
/// Every post written by that user, unordered.
pub async fn get_posts(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.db.get_posts(&email).await?;

    Ok(Json(posts))
}

/// GET /posts
pub async fn get_posts_without_email(
    State(state): State<AppState>,
) -> Result<Json<Vec<Post>>, ApiError> {
    get_posts(State(state), Path(String::new())).await
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_post(&id).await?;

    Ok(Json(json!({})))
}
