//! HTTP surface tests for larderd, driven in-process through tower.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use larder_common::{Catalog, Recipe, RecipeStore};
use larderd::server::{app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn recipe(name: &str, culture: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        name: name.to_string(),
        culture: culture.to_string(),
        servings: 2,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["cook".to_string()],
        notes: None,
        calories: None,
        nutrition: None,
        image: None,
        source: None,
    }
}

fn test_app(recipes: Vec<Recipe>) -> axum::Router {
    let state = AppState::new(Catalog::builtin(), RecipeStore::from_recipes(recipes));
    app(Arc::new(state))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_catalog_and_store_sizes() {
    let app = test_app(vec![recipe("Toast", "British", &["2 slices bread"])]);
    let (status, body) = get(app, "/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog_entries"], 62);
    assert_eq!(body["recipes_loaded"], 1);
}

#[tokio::test]
async fn ingredient_search_returns_catalog_hits() {
    let app = test_app(vec![]);
    let (status, body) = get(app, "/v1/ingredients/search?q=ched").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "ched");
    let entries = body["entries"].as_array().unwrap();
    assert!(entries.iter().any(|e| e["name"] == "cheddar cheese"));
}

#[tokio::test]
async fn ingredient_search_limit_truncates_but_total_does_not() {
    let app = test_app(vec![]);
    let (_, body) = get(app, "/v1/ingredients/search?q=cream&limit=1").await;

    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert!(body["total"].as_u64().unwrap() >= 3);
    assert_eq!(body["entries"][0]["name"], "cream cheese");
}

#[tokio::test]
async fn ingredient_search_blank_query_is_empty_not_error() {
    let app = test_app(vec![]);
    let (status, body) = get(app, "/v1/ingredients/search?q=%20%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn normalize_route_reports_recognition() {
    let app = test_app(vec![]);
    let (_, body) = get(app.clone(), "/v1/ingredients/normalize?name=CHICKEN%20BREAST").await;
    assert_eq!(body["canonical"], "chicken breast");
    assert_eq!(body["recognized"], true);

    let (_, body) = get(app, "/v1/ingredients/normalize?name=moon%20dust").await;
    assert_eq!(body["canonical"], "moon dust");
    assert_eq!(body["recognized"], false);
}

#[tokio::test]
async fn category_route_is_case_insensitive() {
    let app = test_app(vec![]);
    let (status, body) = get(app.clone(), "/v1/ingredients/categories/cheese").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 10);

    let (_, unknown) = get(app, "/v1/ingredients/categories/starships").await;
    assert!(unknown["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn recipes_route_requires_ingredients() {
    let app = test_app(vec![]);
    let (status, _) = get(app.clone(), "/v1/recipes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app, "/v1/recipes?ingredients=%20,%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recipes_route_ranks_and_counts() {
    let app = test_app(vec![
        recipe("Tomato Salad", "Italian", &["2 tomatoes", "1 onion"]),
        recipe("Root Stew", "Irish", &["1 turnip", "1 parsnip", "1 rutabaga"]),
    ]);
    let (status, body) = get(app, "/v1/recipes?ingredients=tomato,onion").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["full_matches"], 1);
    assert_eq!(body["partial_matches"], 0);
    assert_eq!(body["matches"][0]["recipe"]["name"], "Tomato Salad");
    assert_eq!(body["matches"][0]["match_type"], "full");
    // Cultures come from the unfiltered store
    assert_eq!(
        body["cultures"],
        serde_json::json!(["Irish", "Italian"])
    );
}

#[tokio::test]
async fn recipes_route_culture_filter() {
    let app = test_app(vec![
        recipe("Tacos", "Mexican", &["2 tomatoes", "1 onion"]),
        recipe("Bruschetta", "Italian", &["2 tomatoes", "1 onion"]),
    ]);
    let (_, body) = get(app, "/v1/recipes?ingredients=tomato,onion&culture=italian").await;

    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["matches"][0]["recipe"]["name"], "Bruschetta");
}
