//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS, OPTIONS answered without routing
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error bodies

pub mod cors;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
