use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_to_domain, add_to_sketch, create_domain, create_sketch, delete_domain, delete_sketch,
    health_check, list_domains, list_sketches, query_sketch, save, AppState,
};
use crate::config::Config;
use crate::manager::Manager;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Sketches
        .route("/sketches", get(list_sketches))
        .route("/sketches", post(create_sketch))
        .route("/sketches/:name/:kind", delete(delete_sketch))
        .route("/sketches/:name/:kind/values", post(add_to_sketch))
        .route("/sketches/:name/:kind/query", post(query_sketch))
        // Domains
        .route("/domains", get(list_domains))
        .route("/domains", post(create_domain))
        .route("/domains/:name", delete(delete_domain))
        .route("/domains/:name/values", post(add_to_domain))
        // Checkpoint
        .route("/save", post(save))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Run the HTTP server over an already-opened manager.
pub async fn run_server(
    config: &Config,
    manager: Arc<Manager>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { manager });
    let router = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
