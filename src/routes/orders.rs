use axum::{routing::get, Router};

use crate::handlers::order::{create_order, delete_order, get_order, get_orders, update_order};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(get_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}
