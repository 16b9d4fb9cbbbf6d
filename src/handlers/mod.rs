pub mod items;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Welcome to the Item Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "GET /items": "List items (skip, limit, name, min_price, max_price, in_stock)",
                "GET /items/{id}": "Get an item by ID",
                "POST /items": "Create a new item",
                "PUT /items/{id}": "Replace an item",
                "PATCH /items/{id}": "Partially update an item",
                "DELETE /items/{id}": "Delete an item by ID",
                "GET /health": "Liveness check",
            },
        })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "item-store-service" })))
}
