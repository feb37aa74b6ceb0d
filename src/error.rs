use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid {0} ID. ID must be a positive number.")]
    InvalidId(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Search term is required")]
    MissingSearchTerm,

    #[error("{0}")]
    InvalidJson(String),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_)
            | ApiError::Validation(_)
            | ApiError::MissingSearchTerm
            | ApiError::InvalidJson(_)
            | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Persistence details stay in the logs
        let message = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error while handling request");
                "Database error occurred".to_string()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "Internal error while handling request");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
