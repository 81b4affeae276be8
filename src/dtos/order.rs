// src/dtos/order.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::order::Order;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: i64,
    pub quantity: i32,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub quantity: Option<i32>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.quantity {
            None => Err(AppError::validation("No fields provided to update")),
            Some(q) if q < 1 => Err(AppError::validation("Quantity must be at least 1")),
            Some(_) => Ok(()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            product_id: order.product_id,
            quantity: order.quantity,
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<OrderResponse>,
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub success: bool,
    pub order: OrderResponse,
}

/// order.create reports nothing but the outcome flag.
#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub success: bool,
}
