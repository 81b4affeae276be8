// src/handlers/upload.rs
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::error;

use crate::dtos::upload::UploadResponse;
use crate::error::AppError;
use crate::state::AppState;

// POST /upload - Multipart upload of a single `image` field
pub async fn upload_image(
    State(AppState { images, .. }): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!(error = %e, "Malformed multipart request");
        AppError::validation("Malformed multipart request")
    })? {
        if field.name() != Some("image") {
            continue;
        }

        // content type must be captured before bytes() consumes the field
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read uploaded file");
            AppError::validation("Failed to read uploaded file")
        })?;

        let image_url = images.save_bytes(&bytes, &content_type).await?;

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            image_url,
        }));
    }

    Err(AppError::validation("No file uploaded"))
}
