// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::Product;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    /// Boundary checks, run before any side effect.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if self.price < 1.0 {
            return Err(AppError::validation("Price must be at least 1"));
        }
        if let Some(url) = &self.image_url {
            validate_image_url(url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_none() && self.price.is_none() && self.image_url.is_none() {
            return Err(AppError::validation("No fields provided to update"));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name is required"));
            }
        }
        if let Some(price) = self.price {
            if price < 1.0 {
                return Err(AppError::validation("Price must be at least 1"));
            }
        }
        if let Some(url) = &self.image_url {
            validate_image_url(url)?;
        }
        Ok(())
    }
}

fn validate_image_url(url: &str) -> Result<(), AppError> {
    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|_| AppError::validation("Image URL must be a valid URL"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            created_at: product.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<ProductResponse>,
}

#[derive(Serialize)]
pub struct ProductItemResponse {
    pub success: bool,
    pub product: ProductResponse,
}

/// Query parameters of the unscoped delete; the flag is mandatory.
#[derive(Debug, Deserialize)]
pub struct DeleteAllParams {
    pub confirm: Option<bool>,
}
