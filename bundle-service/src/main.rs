use bundle_service::config::BundleConfig;
use bundle_service::services::init_metrics;
use bundle_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BundleConfig::load()?;

    init_tracing(
        "bundle-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    // Must be installed before any request is recorded
    init_metrics()?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
