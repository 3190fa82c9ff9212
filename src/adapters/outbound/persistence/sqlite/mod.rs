//! SQLite-backed storage
//!
//! A single store implements the `ProductRepository`, `ReviewRepository`
//! and `AnalyticsRepository` ports on top of one connection pool.

mod schema;
mod store;

pub use store::SqliteStore;
