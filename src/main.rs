use anyhow::Result;
use city_explorer::{GatewayConfig, VERSION, web};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::load()?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    tracing::info!("Starting city-explorer v{}", VERSION);
    config.warn_missing_credentials();

    web::run(&config).await
}
