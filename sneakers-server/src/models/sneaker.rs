//! Catalog rows and the favorites join

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Catalog item, as stored in `sneakers`.
///
/// Decoded by column position, matching `SELECT *` on
/// `sneakers(id, title, price, imageUrl, isFavorite, favoriteId, isAdded)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sneaker {
    pub id: i32,
    pub title: String,
    /// Smallest currency unit
    pub price: i32,
    pub image_url: String,
    pub is_favorite: bool,
    pub favorite_id: Option<i32>,
    pub is_added: bool,
}

impl<'r> FromRow<'r, PgRow> for Sneaker {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            title: row.try_get(1)?,
            price: row.try_get(2)?,
            image_url: row.try_get(3)?,
            is_favorite: row.try_get(4)?,
            favorite_id: row.try_get(5)?,
            is_added: row.try_get(6)?,
        })
    }
}

/// One favorite joined with its catalog item.
///
/// `id` is the favorite's own id; `favorite_id` is the catalog column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteItem {
    pub id: i32,
    pub item_id: i32,
    pub title: String,
    pub price: i32,
    pub image_url: String,
    pub is_favorite: bool,
    pub favorite_id: Option<i32>,
    pub is_added: bool,
}

impl<'r> FromRow<'r, PgRow> for FavoriteItem {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            item_id: row.try_get(1)?,
            title: row.try_get(2)?,
            price: row.try_get(3)?,
            image_url: row.try_get(4)?,
            is_favorite: row.try_get(5)?,
            favorite_id: row.try_get(6)?,
            is_added: row.try_get(7)?,
        })
    }
}
