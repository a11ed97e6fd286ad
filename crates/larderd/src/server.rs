//! HTTP server for larderd

use crate::routes;
use anyhow::Result;
use axum::Router;
use larder_common::{Catalog, RecipeStore};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub catalog: Catalog,
    pub store: RecipeStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, store: RecipeStore) -> Self {
        Self {
            catalog,
            store,
            start_time: Instant::now(),
        }
    }
}

/// Build the full router. Separate from `run` so tests can drive it
/// in-process.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::recipe_routes())
        .merge(routes::ingredient_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, listen_addr: &str) -> Result<()> {
    let app = app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
