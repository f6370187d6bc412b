//! Wire and row types shared by the repositories and the routes

pub mod favorite;
pub mod items;
pub mod sneaker;

pub use favorite::{parse_favorite_id, CreateFavoriteRequest, FavoriteIdError};
pub use items::{ItemsParams, ItemsQuery};
pub use sneaker::{FavoriteItem, Sneaker};
