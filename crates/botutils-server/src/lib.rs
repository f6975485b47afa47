//! # botutils-server
//!
//! HTTP surface of the relative-time computation.
//!
//! ## Routes
//!
//! - `GET /relative-time` — whole units between a civil date and now
//! - `GET /openapi.json` — OpenAPI document for the above
//! - `GET /scalar` — rendered API reference (when docs are enabled)
//! - `GET /` — redirect to `/scalar` (when docs are enabled)
//! - `GET /health` — liveness probe

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use relative_time::Clock;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod openapi;
pub mod web;

pub use config::ServerConfig;

/// State shared by all handlers. Read-only.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

pub fn build_router(config: &ServerConfig, clock: Arc<dyn Clock>) -> Router {
    let mut router = Router::new()
        .route("/health", get(web::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/relative-time", get(api::relative_time))
        .route("/relative-time/", get(api::relative_time));

    if config.enable_docs {
        router = router
            .route("/", get(web::redirect_to_docs))
            .route("/scalar", get(web::serve_docs));
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { clock })
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Bind `config.bind_addr` and serve until `shutdown` resolves.
pub async fn serve<F>(
    config: ServerConfig,
    clock: Arc<dyn Clock>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(docs = config.enable_docs, "routes ready");
    serve_listener(listener, build_router(&config, clock), shutdown).await
}
