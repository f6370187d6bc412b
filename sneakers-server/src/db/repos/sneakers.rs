//! Catalog repository (read-only)

use sqlx::PgPool;

use super::DbError;
use crate::models::{ItemsParams, Sneaker};

/// Sneaker catalog repository
pub struct SneakerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SneakerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search and sort the catalog.
    ///
    /// The title filter is bound; the sort text is not (see
    /// [`ItemsParams::to_query`]).
    pub async fn list(&self, params: &ItemsParams) -> Result<Vec<Sneaker>, DbError> {
        let query = params.to_query();
        tracing::debug!(sql = %query.sql, "listing items");

        let mut select = sqlx::query_as::<_, Sneaker>(&query.sql);
        if let Some(pattern) = query.title_pattern {
            select = select.bind(pattern);
        }

        Ok(select.fetch_all(self.pool).await?)
    }
}
