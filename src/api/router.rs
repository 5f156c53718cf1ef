//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. CORS is permissive: the backend serves
//! browser frontends on other origins and carries no credentials.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
/// The body limit leaves headroom above the configured upload ceiling so the
/// upload handler gets to answer oversized files with its own 413 body.
pub fn api_router(ctx: ApiContext) -> Router {
    let body_limit = ctx.config.max_upload_bytes + 64 * 1024;

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/nutrition", get(endpoints::nutrition::lookup))
        .route("/prescription/upload", post(endpoints::prescription::upload))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", routes)
}
