use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::GatewayConfig;

/// Full application: routes, CORS and request tracing
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: &GatewayConfig) -> Result<()> {
    let state = Arc::new(AppState::from_config(config)?);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on port {}", config.server.port);

    axum::serve(listener, app(state))
        .await
        .context("HTTP server stopped unexpectedly")
}
