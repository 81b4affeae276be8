use chrono::{DateTime, Utc};
use sqlx::FromRow;

// product_id is a nullable reference at the storage layer; inserts are
// still checked against products via the foreign key.
#[derive(Debug, FromRow)]
pub struct Order {
    pub id: i64,
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}
