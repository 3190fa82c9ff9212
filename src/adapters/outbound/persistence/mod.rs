//! Persistence adapters (outbound)
//!
//! This module contains adapters that store analyzed products, their
//! trust scores and the reviews behind them.

pub mod sqlite;

pub use sqlite::SqliteStore;
