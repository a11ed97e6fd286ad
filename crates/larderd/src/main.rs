//! Larder daemon - recipe discovery backend.
//!
//! Serves ingredient search/normalization and recipe matching over HTTP.
//! The ingredient catalog is compiled in; recipes load from a bundled JSON
//! file at startup.

use anyhow::Result;
use larder_common::{Catalog, RecipeStore};
use larderd::{config::LarderConfig, config::CONFIG_PATH, server};
use std::path::Path;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("larderd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = LarderConfig::load_or_default(Path::new(CONFIG_PATH));

    let catalog = Catalog::builtin();
    info!(
        "Ingredient catalog ready: {} entries in {} categories",
        catalog.len(),
        catalog.categories().len()
    );

    let store = match RecipeStore::load(Path::new(&config.recipes_path)) {
        Ok(store) => {
            info!("Loaded {} recipes from {}", store.len(), config.recipes_path);
            store
        }
        Err(e) => {
            warn!(
                "Could not load recipes from {} ({}), starting with empty store",
                config.recipes_path, e
            );
            RecipeStore::default()
        }
    };

    server::run(server::AppState::new(catalog, store), &config.listen_addr).await
}
