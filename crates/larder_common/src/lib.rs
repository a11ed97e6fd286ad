//! Shared library for larder.
//!
//! Holds the ingredient reference catalog, the matching engine built on top
//! of it, the recipe data model, and the recipe ranking logic used by the
//! daemon and the CLI.

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod ranker;
pub mod recipe;

pub use catalog::{Catalog, CatalogEntry, IngredientCategory, IngredientEntry};
pub use error::LarderError;
pub use matcher::MatchEngine;
pub use ranker::{cultures, rank_recipes, MatchType, RecipeMatch};
pub use recipe::{Recipe, RecipeStore};
