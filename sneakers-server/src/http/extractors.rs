//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{parse_favorite_id, FavoriteIdError};

/// Extract the `{favoriteId}` path segment as an integer.
///
/// Any failure, including a path that cannot be decoded at all, becomes
/// the fixed "Invalid favorite ID" 400.
pub struct FavoriteId(pub i32);

impl<S> FromRequestParts<S> for FavoriteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidFavoriteId(FavoriteIdError))?;

        Ok(Self(parse_favorite_id(&raw)?))
    }
}
