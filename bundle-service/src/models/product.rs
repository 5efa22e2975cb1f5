use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_in_stock() -> bool {
    true
}

/// Stored in the `product` collection. Declared for external tooling through
/// `/schema`; the service itself never reads or writes products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    pub title: String,

    pub description: Option<String>,

    /// Price in dollars.
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(minimum = 0.0)]
    pub price: f64,

    pub category: String,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    pub image: Option<String>,
}

impl Product {
    pub const COLLECTION: &'static str = "product";
}
