// src/state.rs
use sqlx::PgPool;

use crate::images::ImageStore;

/// Shared application state, constructed once at startup and injected into
/// every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db_pool: PgPool, images: ImageStore) -> Self {
        Self { db_pool, images }
    }
}
