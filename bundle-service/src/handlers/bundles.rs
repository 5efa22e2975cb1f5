use crate::dtos::BundleSummary;
use crate::models::Bundle;
use crate::startup::AppState;
use axum::{extract::State, Json};
use mongodb::bson::doc;
use service_core::error::AppError;

/// `GET /bundles`. A record whose price cannot be read fails the whole request.
pub async fn list_bundles(
    State(state): State<AppState>,
) -> Result<Json<Vec<BundleSummary>>, AppError> {
    let records = state
        .store
        .get_documents(Bundle::COLLECTION, doc! {})
        .await?;

    let bundles = records
        .iter()
        .map(BundleSummary::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(bundles))
}
