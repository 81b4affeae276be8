// src/handlers/order.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dtos::order::{
    CreateOrderRequest, OrderCreatedResponse, OrderItemResponse, OrderListResponse, OrderResponse,
    UpdateOrderRequest,
};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::order::Order;
use crate::state::AppState;

pub async fn create_order(
    State(AppState { db_pool, .. }): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), AppError> {
    req.validate()?;

    sqlx::query("INSERT INTO orders (product_id, quantity) VALUES ($1, $2)")
        .bind(req.product_id)
        .bind(req.quantity)
        .execute(&db_pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error() {
                if db.code().as_deref() == Some("23503") {
                    return AppError::validation("Referenced product does not exist");
                }
            }
            AppError::db(e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse { success: true }),
    ))
}

pub async fn get_orders(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<OrderListResponse>, AppError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, product_id, quantity, created_at FROM orders ORDER BY id",
    )
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(OrderListResponse {
        success: true,
        orders: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

pub async fn get_order(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<OrderItemResponse>, AppError> {
    // Not-found iff the lookup returns zero rows
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, product_id, quantity, created_at FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    Ok(Json(OrderItemResponse {
        success: true,
        order: OrderResponse::from(order),
    }))
}

pub async fn update_order(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    sqlx::query("UPDATE orders SET quantity = COALESCE($1, quantity) WHERE id = $2")
        .bind(req.quantity)
        .bind(id)
        .execute(&db_pool)
        .await?;

    Ok(Json(MessageResponse::ok("Order updated successfully")))
}

pub async fn delete_order(
    Path(id): Path<i64>,
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Order not found"));
    }

    Ok(Json(MessageResponse::ok("Order deleted successfully")))
}
