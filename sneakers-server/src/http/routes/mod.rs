//! Route handlers organized by resource

pub mod favorites;
pub mod items;

use axum::http::StatusCode;

/// Unmatched paths
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
