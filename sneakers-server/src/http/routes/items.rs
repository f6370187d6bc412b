//! Catalog endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::db::repos::SneakerRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ItemsParams, Sneaker};

/// GET /items?title=..&sortBy=.. - search and sort the catalog
///
/// Raw pairs rather than a struct so a repeated key is not a 400.
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Sneaker>>, ApiError> {
    let params = ItemsParams::from_pairs(pairs);
    let items = SneakerRepo::new(&state.pool).list(&params).await?;
    Ok(Json(items))
}

/// Items routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items", get(list_items))
}
