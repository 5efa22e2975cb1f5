use crate::services::{diagnose, DiagnosticsReport};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// `GET /test`. Always 200; store problems are reported in the body.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(diagnose(state.store.as_ref(), &state.config.database).await)
}
