use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_qty() -> i64 {
    1
}

/// A line of a bundle. Products are referenced by display title only; nothing
/// checks that a product with that title exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BundleItem {
    #[schema(example = "Everyday Denim")]
    pub product_title: String,

    #[serde(default = "default_qty")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(minimum = 1)]
    pub qty: i64,
}

impl BundleItem {
    pub fn new(product_title: impl Into<String>, qty: i64) -> Self {
        Self {
            product_title: product_title.into(),
            qty,
        }
    }
}

/// Stored in the `bundle` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Bundle {
    #[schema(example = "Essentials Bundle")]
    pub name: String,

    pub tagline: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<BundleItem>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(minimum = 0.0, example = 129.0)]
    pub price: f64,

    #[serde(default)]
    pub highlight: bool,

    /// Image URL or asset path.
    pub image: Option<String>,
}

impl Bundle {
    pub const COLLECTION: &'static str = "bundle";
}
