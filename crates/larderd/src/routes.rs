//! API routes for larderd

use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use larder_common::{
    cultures, rank_recipes, CatalogEntry, IngredientEntry, MatchEngine, MatchType, RecipeMatch,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Recipe Routes
// ============================================================================

pub fn recipe_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/recipes", get(find_recipes))
}

#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    /// Comma-separated ingredient list
    pub ingredients: Option<String>,
    /// Optional culture filter ("all" disables filtering)
    pub culture: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub matches: Vec<RecipeMatch>,
    pub cultures: Vec<String>,
    pub total_matches: usize,
    pub full_matches: usize,
    pub partial_matches: usize,
}

async fn find_recipes(
    State(state): State<AppStateArc>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<RecipeResponse>, (StatusCode, String)> {
    let raw = query.ingredients.unwrap_or_default();
    let user_ingredients: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if user_ingredients.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "ingredients parameter is required".to_string(),
        ));
    }

    info!(
        "Matching {} user ingredients (culture: {})",
        user_ingredients.len(),
        query.culture.as_deref().unwrap_or("all")
    );

    let matches = rank_recipes(
        &state.catalog,
        state.store.recipes(),
        &user_ingredients,
        query.culture.as_deref(),
    );

    let full_matches = matches
        .iter()
        .filter(|m| m.match_type == MatchType::Full)
        .count();

    Ok(Json(RecipeResponse {
        total_matches: matches.len(),
        full_matches,
        partial_matches: matches.len() - full_matches,
        cultures: cultures(state.store.recipes()),
        matches,
    }))
}

// ============================================================================
// Ingredient Routes
// ============================================================================

pub fn ingredient_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/ingredients/search", get(search_ingredients))
        .route("/v1/ingredients/normalize", get(normalize_ingredient))
        .route("/v1/ingredients/categories/:name", get(category_entries))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    /// Cap on returned suggestions; the engine itself never truncates
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub entries: Vec<CatalogEntry>,
    pub total: usize,
}

async fn search_ingredients(
    State(state): State<AppStateArc>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let q = query.q.unwrap_or_default();
    let engine = MatchEngine::new(&state.catalog);

    let mut entries: Vec<CatalogEntry> = engine.search(&q).into_iter().cloned().collect();
    let total = entries.len();
    if let Some(limit) = query.limit {
        entries.truncate(limit);
    }

    Json(SearchResponse {
        query: q.trim().to_lowercase(),
        entries,
        total,
    })
}

#[derive(Debug, Deserialize)]
pub struct NormalizeQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub input: String,
    pub canonical: String,
    /// False when the name fell back to itself (no catalog hit)
    pub recognized: bool,
}

async fn normalize_ingredient(
    State(state): State<AppStateArc>,
    Query(query): Query<NormalizeQuery>,
) -> Json<NormalizeResponse> {
    let name = query.name.unwrap_or_default();
    let engine = MatchEngine::new(&state.catalog);

    let canonical = engine.normalize(&name);
    let recognized = !engine.search(&name).is_empty();

    Json(NormalizeResponse {
        input: name,
        canonical,
        recognized,
    })
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub entries: Vec<IngredientEntry>,
}

async fn category_entries(
    State(state): State<AppStateArc>,
    Path(name): Path<String>,
) -> Json<CategoryResponse> {
    let entries = state.catalog.entries_in_category(&name).to_vec();

    Json(CategoryResponse {
        category: name,
        entries,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog_entries: usize,
    pub recipes_loaded: usize,
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog_entries: state.catalog.len(),
        recipes_loaded: state.store.len(),
    })
}
