use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::SunSeekerError;
use crate::api::{self, AppState};
use crate::config::{ServerConfig, SunSeekerConfig};

/// Search requests are a zip code and a temperature
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Build the full application: the JSON API under `/api`, and in production
/// the client bundle for every other path.
pub fn app(server: &ServerConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().nest("/api", api::router(state));

    if server.production {
        // Unknown paths are client-side routes and get the app shell.
        let index = format!("{}/index.html", server.static_dir);
        app = app.fallback_service(ServeDir::new(&server.static_dir).fallback(ServeFile::new(index)));
    }

    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Request handler panicked: {detail}");

    SunSeekerError::unexpected("Internal server error").into_response()
}

pub async fn run(config: &SunSeekerConfig, state: AppState) -> Result<()> {
    let app = app(&config.server, state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Web server running at {}", config.server.public_url());
    if config.server.production {
        tracing::info!("Serving client bundle from {}", config.server.static_dir);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
