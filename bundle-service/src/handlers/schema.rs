use crate::models::{Bundle, BundleItem, Product, User};
use axum::{response::IntoResponse, Json};
use serde_json::json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(User, Product, BundleItem, Bundle)))]
pub struct SchemaDoc;

/// `GET /schema`. Declared entity shapes for external data viewers, keyed by
/// collection name.
pub async fn get_schema() -> impl IntoResponse {
    let schemas = SchemaDoc::openapi()
        .components
        .map(|components| components.schemas)
        .unwrap_or_default();

    Json(json!({
        "collections": {
            (User::COLLECTION): "User",
            (Product::COLLECTION): "Product",
            (Bundle::COLLECTION): "Bundle",
        },
        "schemas": schemas,
    }))
}
