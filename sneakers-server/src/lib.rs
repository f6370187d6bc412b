//! sneakers-server: HTTP API over the sneakers catalog
//!
//! Serves the favorites list (joined with catalog details), favorite
//! creation and deletion, and catalog search/sort, backed by PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbConfig};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
