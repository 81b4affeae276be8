pub mod order;
pub mod product;
pub mod upload;

use serde::Serialize;

/// Envelope for mutations that only report an outcome message.
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
