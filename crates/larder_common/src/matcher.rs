//! Ingredient matching engine.
//!
//! Decides whether a user-supplied ingredient name ("ched", "tomato")
//! refers to the same real-world ingredient as a recipe-supplied line
//! ("2 cups shredded cheddar cheese"). Built on cheap case-insensitive
//! substring containment against the catalog, not fuzzy matching: the
//! catalog is small and curated, and downstream match counts depend on the
//! exact substring semantics.
//!
//! All three operations are total. Unknown names normalize to themselves,
//! blank queries yield empty results, and no input can fail.

use crate::catalog::{Catalog, CatalogEntry, IngredientEntry};

/// Stateless matching engine over a borrowed catalog.
///
/// Pure compute: safe to construct per call site and to invoke from any
/// number of threads concurrently.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> MatchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Free-text search over the catalog.
    ///
    /// Trims and lowercases the query; a blank query yields no results.
    /// Otherwise returns every entry whose canonical name, variation, or
    /// synonym contains the query as a substring, in catalog-definition
    /// order. No relevance ranking and no result cap: callers that want a
    /// bounded suggestion list truncate themselves.
    pub fn search(&self, query: &str) -> Vec<&'a CatalogEntry> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return Vec::new();
        }

        self.catalog
            .all_entries()
            .iter()
            .filter(|e| entry_contains(&e.ingredient, &query))
            .collect()
    }

    /// Map an arbitrary ingredient phrase to its best-guess canonical name.
    ///
    /// First search hit wins, in catalog order. This is a deliberate
    /// simple tie-break, not a relevance guarantee: a generic query like
    /// "cheese" resolves to whichever entry is defined first. Unknown
    /// names normalize to their trimmed lowercase form, so normalization
    /// never fails.
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim().to_lowercase();

        match self.search(&name).first() {
            Some(hit) => hit.ingredient.name.clone(),
            None => name,
        }
    }

    /// Symmetric predicate: do two ingredient phrases refer to the same
    /// underlying ingredient?
    ///
    /// True when the normalized forms are equal, when one normalized form
    /// contains the other ("chicken" vs "chicken breast"), or when the
    /// search results for both normalized forms share an entry with the
    /// same canonical name ("parmesan" vs "parmigiano reggiano"). Each
    /// check is commutative in its arguments, so the predicate is
    /// symmetric by construction. Two empty strings normalize to
    /// themselves and compare equal, so `matches("", "")` is true.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        let norm_a = self.normalize(a);
        let norm_b = self.normalize(b);

        if norm_a == norm_b {
            return true;
        }

        if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
            return true;
        }

        // Both sides may have resolved to different canonical names whose
        // catalog hits still overlap through variations/synonyms.
        let hits_a = self.search(&norm_a);
        let hits_b = self.search(&norm_b);

        hits_a
            .iter()
            .any(|ea| hits_b.iter().any(|eb| ea.ingredient.name == eb.ingredient.name))
    }
}

/// Case-insensitive substring test against name, variations, and synonyms.
/// Expects `query` to be lowercase already.
fn entry_contains(entry: &IngredientEntry, query: &str) -> bool {
    entry.name.to_lowercase().contains(query)
        || entry.variations.iter().any(|v| v.to_lowercase().contains(query))
        || entry.synonyms.iter().any(|s| s.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IngredientCategory;

    fn builtin() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_search_blank_query() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
    }

    #[test]
    fn test_search_prefix_fragment() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        let hits = engine.search("ched");
        assert!(hits.iter().any(|e| e.ingredient.name == "cheddar cheese"));
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        // "cream" hits cream cheese (Cheese) before heavy/sour cream (Dairy)
        let hits = engine.search("cream");
        assert_eq!(hits[0].ingredient.name, "cream cheese");
        assert!(hits.len() >= 3);
    }

    #[test]
    fn test_search_matches_synonyms() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        // "capsicum" appears only among bell pepper's synonyms
        let hits = engine.search("capsicum");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ingredient.name, "bell pepper");
    }

    #[test]
    fn test_normalize_known_variant() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        assert_eq!(engine.normalize("cheddar"), "cheddar cheese");
        assert_eq!(engine.normalize("CHICKEN BREAST"), "chicken breast");
        assert_eq!(engine.normalize("tomatoes"), "tomato");
    }

    #[test]
    fn test_normalize_unknown_is_identity() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        assert_eq!(engine.normalize("xyz123"), "xyz123");
        assert_eq!(engine.normalize("  Dragonfruit Syrup  "), "dragonfruit syrup");
        assert_eq!(engine.normalize(""), "");
    }

    #[test]
    fn test_matches_variant_pairs() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        assert!(engine.matches("cheddar", "cheddar cheese"));
        assert!(engine.matches("chicken", "chicken breast"));
        assert!(engine.matches("tomato", "tomatoes"));
        assert!(engine.matches("mozzarella", "fresh mozzarella"));
        assert!(engine.matches("parmesan", "parmigiano reggiano"));
    }

    #[test]
    fn test_matches_unrelated_pair() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        assert!(!engine.matches("salt", "chicken breast"));
        assert!(!engine.matches("rice", "strawberry"));
    }

    #[test]
    fn test_matches_is_symmetric() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        for (a, b) in [
            ("cheddar", "cheddar cheese"),
            ("salt", "chicken breast"),
            ("parmesan", "parmigiano reggiano"),
            ("", "onion"),
        ] {
            assert_eq!(engine.matches(a, b), engine.matches(b, a), "pair ({a:?}, {b:?})");
        }
    }

    #[test]
    fn test_matches_empty_pair() {
        let catalog = builtin();
        let engine = MatchEngine::new(&catalog);
        // Both sides normalize to "" and compare equal. Odd but accepted.
        assert!(engine.matches("", ""));
    }

    #[test]
    fn test_engine_with_substitute_catalog() {
        let catalog = Catalog::new(vec![IngredientCategory {
            name: "Test".to_string(),
            entries: vec![IngredientEntry {
                name: "widget".to_string(),
                variations: vec!["widgets".to_string()],
                synonyms: vec!["gizmo".to_string()],
                category: "test".to_string(),
            }],
        }]);
        let engine = MatchEngine::new(&catalog);
        assert_eq!(engine.normalize("gizmo"), "widget");
        assert!(engine.matches("widgets", "gizmo"));
        assert!(!engine.matches("sprocket", "gizmo"));
    }
}
