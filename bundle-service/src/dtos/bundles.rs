//! Public bundle shape and the coercion from raw stored records.
//!
//! Stored records are not trusted to match [`crate::models::Bundle`]: they may
//! predate the schema or come from other writers. Each output field has its
//! own default policy, and only an unusable `price` is an error.

use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// Bundle as listed by `GET /bundles`. Items are not part of the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleSummary {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub highlight: bool,
    pub image: Option<String>,
}

impl TryFrom<&Document> for BundleSummary {
    type Error = AppError;

    fn try_from(record: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            name: text(record, "name"),
            tagline: text(record, "tagline"),
            description: text(record, "description"),
            price: price(record)?,
            highlight: truthy(record.get("highlight")),
            image: text(record, "image"),
        })
    }
}

/// Strings pass through; anything else reads as absent.
fn text(record: &Document, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Bson::String(value)) => Some(value.clone()),
        _ => None,
    }
}

/// Absent prices read as 0. Numbers, booleans and numeric strings convert;
/// every other value is rejected, as is anything that is not finite.
fn price(record: &Document) -> Result<f64, AppError> {
    let id = record
        .get("_id")
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    let value = match record.get("price") {
        None => 0.0,
        Some(Bson::Double(value)) => *value,
        Some(Bson::Int32(value)) => f64::from(*value),
        Some(Bson::Int64(value)) => *value as f64,
        Some(Bson::Boolean(value)) => {
            if *value {
                1.0
            } else {
                0.0
            }
        }
        Some(Bson::String(raw)) => raw.trim().parse::<f64>().map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "bundle {} has non-numeric price {:?}: {}",
                id,
                raw,
                e
            ))
        })?,
        Some(other) => {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "bundle {} has price of unsupported type {:?}",
                id,
                other.element_type()
            )))
        }
    };

    // JSON has no NaN or infinity.
    if !value.is_finite() {
        return Err(AppError::InternalError(anyhow::anyhow!(
            "bundle {} has non-finite price {}",
            id,
            value
        )));
    }

    Ok(value)
}

fn truthy(value: Option<&Bson>) -> bool {
    match value {
        None | Some(Bson::Null) | Some(Bson::Undefined) => false,
        Some(Bson::Boolean(flag)) => *flag,
        Some(Bson::Int32(n)) => *n != 0,
        Some(Bson::Int64(n)) => *n != 0,
        Some(Bson::Double(n)) => *n != 0.0,
        Some(Bson::String(s)) => !s.is_empty(),
        Some(Bson::Array(items)) => !items.is_empty(),
        Some(Bson::Document(doc)) => !doc.is_empty(),
        Some(_) => true,
    }
}
