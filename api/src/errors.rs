use crate::db::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DbError),
    #[error("{0}")]
    BadRequest(String),
    #[error("method not supported")]
    MethodNotSupported,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Every store failure is the caller's 400, including I/O and a
            // corrupt file.
            ApiError::Database(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotSupported | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert our custom errors to HTTP responses
///
/// Every error becomes `{"error": "<message>"}` with the status from
/// [`ApiError::status`].
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!("{}", message);
        } else {
            warn!("{}", message);
        }

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_are_bad_requests() {
        let errors = [
            DbError::Validation("email can't be empty".into()),
            DbError::Conflict("User already exists".into()),
            DbError::NotFound("User doesn't exist".into()),
            DbError::Io {
                path: "db.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        ];
        for err in errors {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn message_passes_through_unchanged() {
        let err = ApiError::from(DbError::Conflict("User already exists".into()));
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(ApiError::MethodNotSupported.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("server error".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
