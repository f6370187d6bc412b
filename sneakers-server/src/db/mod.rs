//! Database layer - connection pool and repositories
//!
//! - One pool per process, opened and pinged at startup
//! - Every statement is a single parameterized query, no transactions
//! - Rows are decoded positionally so column-name case folding is irrelevant

pub mod pool;
pub mod repos;

pub use pool::{create_pool, DbConfig};
pub use repos::*;
