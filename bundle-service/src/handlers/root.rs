use axum::{response::IntoResponse, Json};
use serde_json::json;

pub const BRAND: &str = "Moniqué";

pub async fn read_root() -> impl IntoResponse {
    Json(json!({
        "brand": BRAND,
        "message": format!("Welcome to {} API", BRAND),
    }))
}
