//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. Errors carry the driver's own message untouched.

pub mod favorites;
pub mod sneakers;

pub use favorites::FavoriteRepo;
pub use sneakers::SneakerRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
