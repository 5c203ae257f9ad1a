//! Minimart - a minimal in-memory catalog REST API
//!
//! Minimart serves two seeded collections over HTTP:
//! - List and get-by-id endpoints backed by an immutable in-memory store
//! - Acknowledge-only create endpoints
//! - Interactive OpenAPI documentation at `/api-docs`

pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
