//! Recipe ranking against a user's ingredient list.
//!
//! A recipe ingredient line counts as matched when any user ingredient
//! matches it through the engine. The matched fraction becomes a
//! percentage and a coarse label: >= 80% full, >= 30% partial, below that
//! the recipe is excluded from results entirely.

use crate::catalog::Catalog;
use crate::matcher::MatchEngine;
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Percentage at or above which a recipe counts as a full match.
const FULL_MATCH_PERCENT: f32 = 80.0;

/// Percentage below which a recipe is dropped from results.
const MIN_MATCH_PERCENT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Full,
    Partial,
}

/// One ranked recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub match_type: MatchType,
    /// Quantity-stripped ingredient lines the user does not have
    pub missing_ingredients: Vec<String>,
    pub match_percentage: f32,
}

/// Rank recipes by how well their ingredient lists match the user's.
///
/// `culture` filters case-insensitively when present; `None` or `"all"`
/// keeps every recipe. Results are sorted full before partial, then by
/// percentage descending; ties keep input order (the sort is stable).
pub fn rank_recipes(
    catalog: &Catalog,
    recipes: &[Recipe],
    user_ingredients: &[String],
    culture: Option<&str>,
) -> Vec<RecipeMatch> {
    let engine = MatchEngine::new(catalog);

    let mut matches: Vec<RecipeMatch> = recipes
        .iter()
        .filter(|r| culture_matches(r, culture))
        .filter_map(|recipe| score_recipe(&engine, recipe, user_ingredients))
        .collect();

    matches.sort_by(|a, b| match (a.match_type, b.match_type) {
        (MatchType::Full, MatchType::Partial) => Ordering::Less,
        (MatchType::Partial, MatchType::Full) => Ordering::Greater,
        _ => b
            .match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal),
    });

    matches
}

/// Sorted unique culture names across the whole recipe set (for the
/// caller's filter dropdown; computed over the unfiltered set).
pub fn cultures(recipes: &[Recipe]) -> Vec<String> {
    let mut cultures: Vec<String> = recipes.iter().map(|r| r.culture.clone()).collect();
    cultures.sort();
    cultures.dedup();
    cultures
}

fn culture_matches(recipe: &Recipe, culture: Option<&str>) -> bool {
    match culture {
        Some(c) if !c.eq_ignore_ascii_case("all") => recipe.culture.eq_ignore_ascii_case(c),
        _ => true,
    }
}

fn score_recipe(
    engine: &MatchEngine<'_>,
    recipe: &Recipe,
    user_ingredients: &[String],
) -> Option<RecipeMatch> {
    if recipe.ingredients.is_empty() {
        return None;
    }

    let mut matched = 0usize;
    let mut missing: Vec<String> = Vec::new();

    for line in &recipe.ingredients {
        if user_ingredients.iter().any(|user| engine.matches(user, line)) {
            matched += 1;
        } else {
            let main = strip_quantity(line);
            if !missing.contains(&main) {
                missing.push(main);
            }
        }
    }

    let match_percentage = matched as f32 / recipe.ingredients.len() as f32 * 100.0;

    if match_percentage < MIN_MATCH_PERCENT {
        return None;
    }

    let match_type = if match_percentage >= FULL_MATCH_PERCENT {
        MatchType::Full
    } else {
        MatchType::Partial
    };

    Some(RecipeMatch {
        recipe: recipe.clone(),
        match_type,
        missing_ingredients: missing,
        match_percentage,
    })
}

/// Drop the leading quantity token from an ingredient line
/// ("2 chicken breasts" -> "chicken breasts"). Falls back to the whole
/// line when stripping would leave nothing.
fn strip_quantity(line: &str) -> String {
    let line = line.trim().to_lowercase();
    let rest = line.split_once(' ').map(|(_, rest)| rest.trim()).unwrap_or("");

    if rest.is_empty() {
        line
    } else {
        rest.to_string()
    }
}
