//! Favorite repository
//!
//! - list: INNER JOIN with the catalog (orphans drop out silently)
//! - create: plain INSERT, the store assigns the id
//! - delete: plain DELETE, zero rows affected is still success

use sqlx::PgPool;

use super::DbError;
use crate::models::FavoriteItem;

const LIST_FAVORITES: &str = r#"
    SELECT f.id, f.item_id, s.title, s.price, s.imageUrl, s.isFavorite, s.favoriteId, s.isAdded
    FROM favorite f
    INNER JOIN sneakers s ON f.item_id = s.id
"#;

/// Favorite repository
pub struct FavoriteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every favorite that still has a catalog item, with the item's details.
    pub async fn list(&self) -> Result<Vec<FavoriteItem>, DbError> {
        let rows = sqlx::query_as::<_, FavoriteItem>(LIST_FAVORITES)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a favorite for `item_id`. No existence check; a foreign key,
    /// if the store has one, is the only guard.
    pub async fn create(&self, item_id: i32) -> Result<(), DbError> {
        sqlx::query("INSERT INTO favorite (item_id) VALUES ($1)")
            .bind(item_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Delete the favorite with `id`. Returns the number of rows removed,
    /// which callers are free to ignore.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM favorite WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
