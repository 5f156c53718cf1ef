pub mod api;
pub mod config;
pub mod extraction;
pub mod nutrition;
pub mod ocr;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize logging, read configuration, and run the server until Ctrl-C.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cfg = Arc::new(config::AppConfig::from_env());
    if cfg.nutrition_api_key.is_empty() {
        tracing::warn!("NUTRITION_API_KEY is not set; nutrition lookups will fail");
    }

    let mut server = match api::server::start_server(cfg).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
}
