pub mod orders;
pub mod products;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::handlers::panel::render_panel;
use crate::handlers::upload::upload_image;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(orders::routes())
}

/// Assemble the full HTTP surface: procedure routes under /api, the upload
/// endpoint, static serving of saved images, the panel and the probes.
pub fn build_app(state: AppState, upload_dir: &Path) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route("/", get(|| async { "Storefront API" }))
        .route("/health", get(health_check))
        .route("/upload", post(upload_image))
        .route("/panel", get(render_panel))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
