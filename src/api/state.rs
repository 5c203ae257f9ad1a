//! API server state

use std::sync::Arc;

use crate::store::Catalog;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// The seeded catalog backing every endpoint
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
