//! HTTP server lifecycle — bind, spawn, graceful shutdown.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. The handle owns a oneshot sender; dropping or calling
//! [`ApiServer::shutdown`] stops the server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::api::types::ApiContext;
use crate::config::AppConfig;
use crate::nutrition::NutritionClient;
use crate::ocr;

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Start the API server with collaborators built from `config`.
pub async fn start_server(config: Arc<AppConfig>) -> Result<ApiServer, String> {
    let nutrition = Arc::new(NutritionClient::new(
        &config.nutrition_api_url,
        &config.nutrition_api_key,
    ));
    let engine = ocr::default_engine(&config.tessdata_dir)
        .map_err(|e| format!("OCR engine setup failed: {e}"))?;

    let ctx = ApiContext::new(config.clone(), nutrition, engine);
    start_server_with_ctx(config, ctx).await
}

/// Start the API server from a pre-built [`ApiContext`].
///
/// Factored out of [`start_server`] so tests can inject a mock OCR engine.
pub async fn start_server_with_ctx(
    config: Arc<AppConfig>,
    ctx: ApiContext,
) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(config.bind_addr, config.port))
        .await
        .map_err(|e| format!("Failed to bind API server: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%addr, "API server binding");

    let app = api_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}
