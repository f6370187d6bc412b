//! Favorites endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::db::repos::FavoriteRepo;
use crate::http::error::ApiError;
use crate::http::extractors::FavoriteId;
use crate::http::server::AppState;
use crate::models::{CreateFavoriteRequest, FavoriteItem};

/// GET /favorites - favorites joined with their catalog items
async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavoriteItem>>, ApiError> {
    let favorites = FavoriteRepo::new(&state.pool).list().await?;
    Ok(Json(favorites))
}

/// POST /favorites - add a favorite for an item
///
/// Takes the raw body so a missing or odd Content-Type still decodes.
async fn create_favorite(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req = CreateFavoriteRequest::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    FavoriteRepo::new(&state.pool).create(req.item_id).await?;
    tracing::debug!(item_id = req.item_id, "favorite created");

    Ok(StatusCode::CREATED)
}

/// DELETE /favorites/{favoriteId} - remove a favorite
async fn delete_favorite(
    State(state): State<Arc<AppState>>,
    FavoriteId(id): FavoriteId,
) -> Result<StatusCode, ApiError> {
    let removed = FavoriteRepo::new(&state.pool).delete(id).await?;
    tracing::debug!(id, removed, "favorite deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Favorites routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route("/favorites/{favoriteId}", delete(delete_favorite))
}
