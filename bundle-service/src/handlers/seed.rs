use crate::dtos::SeedResponse;
use crate::services::seed_bundles;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let outcome = seed_bundles(state.store.as_ref()).await?;
    Ok(Json(SeedResponse::from(outcome)))
}
