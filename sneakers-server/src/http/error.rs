//! API error type with IntoResponse
//!
//! Error bodies are plain text. Database failures expose the driver's raw
//! message to the caller; this leaks internal detail and is a known issue.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::FavoriteIdError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Undecodable request body (400)
    #[error("{0}")]
    BadRequest(String),

    /// Non-integer favorite id in the path (400)
    #[error(transparent)]
    InvalidFavoriteId(#[from] FavoriteIdError),

    /// Query or row decode failure (500, logged)
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidFavoriteId(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }
        (status, self.to_string()).into_response()
    }
}
