//! Ingredient reference catalog.
//!
//! A static, hand-curated table mapping canonical ingredient identities to
//! their known spelling variants and synonyms, grouped into categories.
//! Constructed once at startup and never mutated; the engine borrows it so
//! tests can substitute a smaller catalog.

use serde::{Deserialize, Serialize};

/// One canonical ingredient identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Preferred display/reference name, e.g. "cheddar cheese"
    pub name: String,
    /// Alternate surface forms of the same ingredient
    pub variations: Vec<String>,
    /// Alternate strings that should resolve to this entry
    pub synonyms: Vec<String>,
    /// Lowercase category tag, e.g. "cheese"
    pub category: String,
}

/// A named grouping of ingredient entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCategory {
    /// Human-facing name, e.g. "Herbs & Spices"
    pub name: String,
    pub entries: Vec<IngredientEntry>,
}

/// Flat-view entry: an ingredient annotated with its owning category's
/// display name, so category-agnostic lookups are a single scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub ingredient: IngredientEntry,
    pub category_name: String,
}

/// The full reference catalog: ordered categories plus a derived flat view.
///
/// Read-only after construction. All accessors are deterministic and
/// side-effect-free, so the catalog can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<IngredientCategory>,
    flat: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, computing the flat view in definition order
    /// (category order, then within-category order).
    pub fn new(categories: Vec<IngredientCategory>) -> Self {
        let flat = categories
            .iter()
            .flat_map(|cat| {
                cat.entries.iter().map(|entry| CatalogEntry {
                    ingredient: entry.clone(),
                    category_name: cat.name.clone(),
                })
            })
            .collect();

        Self { categories, flat }
    }

    /// The builtin hand-curated catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_categories())
    }

    /// All entries in catalog-definition order.
    pub fn all_entries(&self) -> &[CatalogEntry] {
        &self.flat
    }

    /// Entries of one category, looked up by display name
    /// (case-insensitive exact match). Unknown category yields an empty
    /// slice, not an error.
    pub fn entries_in_category(&self, name: &str) -> &[IngredientEntry] {
        self.categories
            .iter()
            .find(|cat| cat.name.eq_ignore_ascii_case(name))
            .map(|cat| cat.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> &[IngredientCategory] {
        &self.categories
    }

    /// Total entry count across all categories.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

fn entry(
    name: &str,
    variations: &[&str],
    synonyms: &[&str],
    category: &str,
) -> IngredientEntry {
    IngredientEntry {
        name: name.to_string(),
        variations: variations.iter().map(|s| s.to_string()).collect(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
    }
}

fn category(name: &str, entries: Vec<IngredientEntry>) -> IngredientCategory {
    IngredientCategory {
        name: name.to_string(),
        entries,
    }
}

/// The builtin reference data: 8 categories, 62 entries.
pub fn builtin_categories() -> Vec<IngredientCategory> {
    vec![
        category(
            "Cheese",
            vec![
                entry(
                    "cheddar cheese",
                    &["cheddar", "sharp cheddar", "mild cheddar", "white cheddar", "yellow cheddar"],
                    &["cheddar", "cheddar cheese", "sharp cheddar", "mild cheddar"],
                    "cheese",
                ),
                entry(
                    "mozzarella cheese",
                    &["mozzarella", "fresh mozzarella", "buffalo mozzarella", "low-moisture mozzarella"],
                    &["mozzarella", "mozzarella cheese", "fresh mozzarella"],
                    "cheese",
                ),
                entry(
                    "parmesan cheese",
                    &["parmesan", "parmigiano reggiano", "grated parmesan", "parmesan cheese"],
                    &["parmesan", "parmigiano", "parmigiano reggiano"],
                    "cheese",
                ),
                entry(
                    "cream cheese",
                    &["cream cheese", "philadelphia", "soft cheese"],
                    &["cream cheese", "philadelphia", "soft cheese"],
                    "cheese",
                ),
                entry(
                    "feta cheese",
                    &["feta", "feta cheese", "crumbled feta"],
                    &["feta", "feta cheese"],
                    "cheese",
                ),
                entry(
                    "blue cheese",
                    &["blue cheese", "gorgonzola", "roquefort", "stilton"],
                    &["blue cheese", "gorgonzola", "roquefort", "stilton"],
                    "cheese",
                ),
                entry(
                    "swiss cheese",
                    &["swiss", "swiss cheese", "emmental", "gruyere"],
                    &["swiss", "emmental", "gruyere"],
                    "cheese",
                ),
                entry(
                    "provolone cheese",
                    &["provolone", "provolone cheese"],
                    &["provolone"],
                    "cheese",
                ),
                entry(
                    "cottage cheese",
                    &["cottage cheese", "curd cheese"],
                    &["cottage cheese", "curd cheese"],
                    "cheese",
                ),
                entry(
                    "ricotta cheese",
                    &["ricotta", "ricotta cheese"],
                    &["ricotta"],
                    "cheese",
                ),
            ],
        ),
        category(
            "Meat",
            vec![
                entry(
                    "chicken breast",
                    &["chicken", "chicken breast", "boneless chicken breast", "skinless chicken breast"],
                    &["chicken", "chicken breast", "poultry"],
                    "meat",
                ),
                entry(
                    "ground beef",
                    &["beef", "ground beef", "hamburger meat", "minced beef"],
                    &["beef", "ground beef", "hamburger meat"],
                    "meat",
                ),
                entry(
                    "pork chops",
                    &["pork", "pork chops", "pork loin", "pork tenderloin"],
                    &["pork", "pork chops", "pork loin"],
                    "meat",
                ),
                entry(
                    "salmon",
                    &["salmon", "salmon fillet", "fresh salmon", "wild salmon"],
                    &["salmon", "fish"],
                    "meat",
                ),
                entry(
                    "shrimp",
                    &["shrimp", "prawns", "jumbo shrimp", "medium shrimp"],
                    &["shrimp", "prawns", "seafood"],
                    "meat",
                ),
                entry(
                    "bacon",
                    &["bacon", "streaky bacon", "back bacon", "turkey bacon"],
                    &["bacon", "pork belly"],
                    "meat",
                ),
                entry(
                    "sausage",
                    &["sausage", "italian sausage", "breakfast sausage", "chorizo"],
                    &["sausage", "chorizo", "italian sausage"],
                    "meat",
                ),
            ],
        ),
        category(
            "Vegetables",
            vec![
                entry(
                    "onion",
                    &["onion", "yellow onion", "white onion", "red onion", "sweet onion"],
                    &["onion", "yellow onion", "white onion", "red onion"],
                    "vegetables",
                ),
                entry(
                    "garlic",
                    &["garlic", "garlic cloves", "minced garlic", "garlic powder"],
                    &["garlic", "garlic cloves"],
                    "vegetables",
                ),
                entry(
                    "tomato",
                    &["tomato", "tomatoes", "roma tomato", "cherry tomato", "beefsteak tomato"],
                    &["tomato", "tomatoes"],
                    "vegetables",
                ),
                entry(
                    "bell pepper",
                    &["bell pepper", "bell peppers", "green bell pepper", "red bell pepper", "yellow bell pepper"],
                    &["bell pepper", "bell peppers", "capsicum"],
                    "vegetables",
                ),
                entry(
                    "carrot",
                    &["carrot", "carrots", "baby carrots"],
                    &["carrot", "carrots"],
                    "vegetables",
                ),
                entry(
                    "potato",
                    &["potato", "potatoes", "russet potato", "red potato", "yukon gold potato"],
                    &["potato", "potatoes"],
                    "vegetables",
                ),
                entry(
                    "spinach",
                    &["spinach", "fresh spinach", "baby spinach", "frozen spinach"],
                    &["spinach", "leafy greens"],
                    "vegetables",
                ),
                entry(
                    "lettuce",
                    &["lettuce", "romaine lettuce", "iceberg lettuce", "butter lettuce"],
                    &["lettuce", "romaine", "iceberg"],
                    "vegetables",
                ),
                entry(
                    "cucumber",
                    &["cucumber", "cucumbers", "english cucumber"],
                    &["cucumber", "cucumbers"],
                    "vegetables",
                ),
                entry(
                    "avocado",
                    &["avocado", "avocados", "ripe avocado"],
                    &["avocado", "avocados"],
                    "vegetables",
                ),
                entry(
                    "mushroom",
                    &["mushroom", "mushrooms", "button mushrooms", "portobello mushrooms"],
                    &["mushroom", "mushrooms"],
                    "vegetables",
                ),
                entry(
                    "broccoli",
                    &["broccoli", "fresh broccoli", "frozen broccoli"],
                    &["broccoli"],
                    "vegetables",
                ),
                entry(
                    "cauliflower",
                    &["cauliflower", "fresh cauliflower"],
                    &["cauliflower"],
                    "vegetables",
                ),
            ],
        ),
        category(
            "Dairy",
            vec![
                entry(
                    "milk",
                    &["milk", "whole milk", "skim milk", "2% milk", "almond milk", "soy milk"],
                    &["milk", "dairy milk"],
                    "dairy",
                ),
                entry(
                    "eggs",
                    &["egg", "eggs", "large eggs", "extra large eggs"],
                    &["egg", "eggs"],
                    "dairy",
                ),
                entry(
                    "butter",
                    &["butter", "unsalted butter", "salted butter", "margarine"],
                    &["butter", "unsalted butter"],
                    "dairy",
                ),
                entry(
                    "yogurt",
                    &["yogurt", "yogurt", "greek yogurt", "plain yogurt", "vanilla yogurt"],
                    &["yogurt", "yogurt"],
                    "dairy",
                ),
                entry(
                    "heavy cream",
                    &["heavy cream", "whipping cream", "double cream"],
                    &["heavy cream", "whipping cream"],
                    "dairy",
                ),
                entry(
                    "sour cream",
                    &["sour cream", "light sour cream"],
                    &["sour cream"],
                    "dairy",
                ),
            ],
        ),
        category(
            "Grains",
            vec![
                entry(
                    "rice",
                    &["rice", "white rice", "brown rice", "basmati rice", "jasmine rice"],
                    &["rice", "white rice", "brown rice"],
                    "grains",
                ),
                entry(
                    "pasta",
                    &["pasta", "spaghetti", "penne", "fettuccine", "linguine"],
                    &["pasta", "spaghetti", "penne"],
                    "grains",
                ),
                entry(
                    "bread",
                    &["bread", "white bread", "whole wheat bread", "sourdough bread"],
                    &["bread", "white bread", "whole wheat bread"],
                    "grains",
                ),
                entry(
                    "flour",
                    &["flour", "all-purpose flour", "bread flour", "cake flour"],
                    &["flour", "all-purpose flour"],
                    "grains",
                ),
                entry(
                    "quinoa",
                    &["quinoa", "white quinoa", "red quinoa"],
                    &["quinoa"],
                    "grains",
                ),
                entry(
                    "oats",
                    &["oats", "rolled oats", "steel cut oats", "quick oats"],
                    &["oats", "rolled oats"],
                    "grains",
                ),
            ],
        ),
        category(
            "Fruits",
            vec![
                entry(
                    "lemon",
                    &["lemon", "lemons", "fresh lemon", "lemon juice"],
                    &["lemon", "lemons"],
                    "fruits",
                ),
                entry(
                    "lime",
                    &["lime", "limes", "fresh lime", "lime juice"],
                    &["lime", "limes"],
                    "fruits",
                ),
                entry(
                    "apple",
                    &["apple", "apples", "granny smith apple", "red delicious apple"],
                    &["apple", "apples"],
                    "fruits",
                ),
                entry(
                    "banana",
                    &["banana", "bananas", "ripe banana"],
                    &["banana", "bananas"],
                    "fruits",
                ),
                entry(
                    "orange",
                    &["orange", "oranges", "navel orange"],
                    &["orange", "oranges"],
                    "fruits",
                ),
                entry(
                    "strawberry",
                    &["strawberry", "strawberries", "fresh strawberries"],
                    &["strawberry", "strawberries"],
                    "fruits",
                ),
            ],
        ),
        category(
            "Herbs & Spices",
            vec![
                entry("basil", &["basil", "fresh basil", "dried basil"], &["basil"], "herbs"),
                entry("oregano", &["oregano", "fresh oregano", "dried oregano"], &["oregano"], "herbs"),
                entry("thyme", &["thyme", "fresh thyme", "dried thyme"], &["thyme"], "herbs"),
                entry("rosemary", &["rosemary", "fresh rosemary", "dried rosemary"], &["rosemary"], "herbs"),
                entry("parsley", &["parsley", "fresh parsley", "dried parsley"], &["parsley"], "herbs"),
                entry("cilantro", &["cilantro", "fresh cilantro", "coriander"], &["cilantro", "coriander"], "herbs"),
                entry("salt", &["salt", "table salt", "kosher salt", "sea salt"], &["salt", "table salt"], "herbs"),
                entry(
                    "black pepper",
                    &["black pepper", "pepper", "ground black pepper"],
                    &["black pepper", "pepper"],
                    "herbs",
                ),
            ],
        ),
        category(
            "Oils & Condiments",
            vec![
                entry(
                    "olive oil",
                    &["olive oil", "extra virgin olive oil", "light olive oil"],
                    &["olive oil", "extra virgin olive oil"],
                    "oils",
                ),
                entry(
                    "vegetable oil",
                    &["vegetable oil", "canola oil", "corn oil"],
                    &["vegetable oil", "canola oil"],
                    "oils",
                ),
                entry(
                    "ketchup",
                    &["ketchup", "tomato ketchup"],
                    &["ketchup", "tomato ketchup"],
                    "condiments",
                ),
                entry(
                    "mustard",
                    &["mustard", "dijon mustard", "yellow mustard"],
                    &["mustard", "dijon mustard"],
                    "condiments",
                ),
                entry(
                    "mayonnaise",
                    &["mayonnaise", "mayo", "light mayonnaise"],
                    &["mayonnaise", "mayo"],
                    "condiments",
                ),
                entry(
                    "soy sauce",
                    &["soy sauce", "light soy sauce", "dark soy sauce"],
                    &["soy sauce"],
                    "condiments",
                ),
            ],
        ),
    ]
}
