pub mod health;
pub mod post;
pub mod user;

use crate::errors::ApiError;

/// Method fallback for the resource routes.
pub async fn method_not_supported() -> ApiError {
    ApiError::MethodNotSupported
}

/// Router-wide fallback for paths nothing matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
