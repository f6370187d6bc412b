//! Favorite request parsing

use serde::Deserialize;

/// Body of `POST /favorites`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateFavoriteRequest {
    pub item_id: i32,
}

impl CreateFavoriteRequest {
    /// Decode the first JSON value in the body, whatever the declared
    /// content type. Anything after that value is left unread.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(body);
        Self::deserialize(&mut de)
    }
}

/// Path segment that is not an integer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid favorite ID")]
pub struct FavoriteIdError;

/// Parse the `{favoriteId}` path segment.
///
/// Accepts an optional leading sign; negative ids are passed through to
/// the store and simply match nothing.
pub fn parse_favorite_id(raw: &str) -> Result<i32, FavoriteIdError> {
    raw.parse::<i32>().map_err(|_| FavoriteIdError)
}
