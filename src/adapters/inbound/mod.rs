//! Inbound adapters - Entry points that drive the application
pub mod rest;
