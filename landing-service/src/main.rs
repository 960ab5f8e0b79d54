use landing_service::config::LandingConfig;
use landing_service::services::init_metrics;
use landing_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("landing-service", "info", otlp_endpoint.as_deref());

    // Must run before any metric is recorded.
    init_metrics()?;

    let config = LandingConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
