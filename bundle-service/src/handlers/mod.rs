pub mod bundles;
pub mod diagnostics;
pub mod health;
pub mod metrics;
pub mod root;
pub mod schema;
pub mod seed;

use axum::http::Uri;
use service_core::error::AppError;

pub use bundles::list_bundles;
pub use diagnostics::test_database;
pub use health::health_check;
pub use metrics::metrics_endpoint;
pub use root::read_root;
pub use schema::get_schema;
pub use seed::seed;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
