// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::dtos::product::{
    CreateProductRequest, DeleteAllParams, ProductItemResponse, ProductListResponse,
    ProductResponse, UpdateProductRequest,
};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    payload.validate()?;

    // Materialize the remote image before touching the database; a product
    // row never references an image that was not persisted.
    let image_url = match &payload.image_url {
        Some(url) => Some(state.images.save_remote(url).await.map_err(|e| {
            error!(%url, error = %e, "Failed to save product image");
            AppError::from(e)
        })?),
        None => None,
    };

    sqlx::query("INSERT INTO products (name, price, image_url) VALUES ($1, $2, $3)")
        .bind(payload.name.trim())
        .bind(payload.price)
        .bind(image_url)
        .execute(&state.db_pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Product added successfully")),
    ))
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    match sqlx::query_as::<_, Product>(
        "SELECT id, name, price, image_url, created_at FROM products ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await
    {
        Ok(products) => Ok(Json(ProductListResponse {
            success: true,
            products: products.into_iter().map(ProductResponse::from).collect(),
        })),
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /products/:id - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductItemResponse>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, image_url, created_at FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductItemResponse {
        success: true,
        product: ProductResponse::from(product),
    }))
}

// PUT /products/:id - Partial update of the supplied fields
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    // Check the target exists before running the image side effect
    sqlx::query_scalar::<_, i64>("SELECT id FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let image_url = match &payload.image_url {
        Some(url) => Some(state.images.save_remote(url).await.map_err(|e| {
            error!(%url, error = %e, "Failed to save product image");
            AppError::from(e)
        })?),
        None => None,
    };

    sqlx::query(
        "UPDATE products SET
         name = COALESCE($1, name),
         price = COALESCE($2, price),
         image_url = COALESCE($3, image_url)
         WHERE id = $4",
    )
    .bind(payload.name.as_deref().map(str::trim))
    .bind(payload.price)
    .bind(image_url)
    .bind(id)
    .execute(&state.db_pool)
    .await?;

    Ok(Json(MessageResponse::ok("Product updated successfully")))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error() {
                // restrict policy: referenced products stay
                if db.code().as_deref() == Some("23503") {
                    return AppError::conflict("Product has existing orders");
                }
            }
            AppError::db(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(MessageResponse::ok("Product deleted successfully")))
}

// DELETE /products?confirm=true - Destructive and unscoped, so the flag is mandatory
#[instrument(skip(state))]
pub async fn delete_all_products(
    Query(params): Query<DeleteAllParams>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if params.confirm != Some(true) {
        return Err(AppError::validation(
            "Deleting all products requires confirm=true",
        ));
    }

    sqlx::query("DELETE FROM products")
        .execute(&state.db_pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error() {
                if db.code().as_deref() == Some("23503") {
                    return AppError::conflict("Products with existing orders cannot be deleted");
                }
            }
            AppError::db(e)
        })?;

    Ok(Json(MessageResponse::ok("All products deleted successfully")))
}
