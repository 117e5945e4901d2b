//! # Search
//!
//! Text search and facet filters over the recipe catalog and the grocery catalog.
//! A filter value of `"All"` (or no value) matches every recipe.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::catalog::{GroceryItem, ALL};
use crate::recipe::Recipe;

/// Facet filters for recipe search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilters {
    pub category: Option<String>,
    pub region: Option<String>,
    pub diet_type: Option<String>,
    pub spice_level: Option<String>,
}

fn facet_matches(filter: &Option<String>, value: Option<&str>) -> bool {
    match filter.as_deref() {
        None | Some(ALL) => true,
        Some(wanted) => value == Some(wanted),
    }
}

impl RecipeFilters {
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_diet_type(mut self, diet_type: &str) -> Self {
        self.diet_type = Some(diet_type.to_string());
        self
    }

    pub fn with_spice_level(mut self, spice_level: &str) -> Self {
        self.spice_level = Some(spice_level.to_string());
        self
    }

    /// Whether a recipe passes every facet
    pub fn matches(&self, recipe: &Recipe) -> bool {
        facet_matches(&self.category, Some(recipe.category.as_str()))
            && facet_matches(&self.region, recipe.region.as_deref())
            && facet_matches(&self.diet_type, recipe.diet_type.map(|d| d.as_str()))
            && facet_matches(&self.spice_level, recipe.spice_level.map(|s| s.as_str()))
    }
}

/// Case-insensitive match against name, description, ingredient records and tags.
/// Only the empty query matches everything; whitespace is searched for literally.
pub fn recipe_matches_query(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    recipe.name.to_lowercase().contains(&query)
        || recipe.description.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&query))
        || recipe
            .tags
            .iter()
            .flatten()
            .any(|t| t.to_lowercase().contains(&query))
}

/// Highest rating first, ties broken by name
pub fn by_rating_then_name(a: &Arc<Recipe>, b: &Arc<Recipe>) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}

/// Filter and sort recipes
pub fn search_recipes(
    recipes: &[Arc<Recipe>],
    query: &str,
    filters: &RecipeFilters,
) -> Vec<Arc<Recipe>> {
    let mut found: Vec<Arc<Recipe>> = recipes
        .iter()
        .filter(|r| recipe_matches_query(r, query) && filters.matches(r))
        .cloned()
        .collect();
    found.sort_by(by_rating_then_name);
    log::debug!("Recipe search {:?} matched {} recipes", query, found.len());
    found
}

/// Filter grocery items by text and category, keeping catalog order
pub fn search_grocery_items<'a>(
    items: &'a [GroceryItem],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a GroceryItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            query.is_empty()
                || item.name.to_lowercase().contains(&query)
                || item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .filter(|item| match category {
            None | Some(ALL) => true,
            Some(wanted) => item.category == wanted,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_grocery_items, seed_recipes};
    use crate::categories::PULSES;
    use crate::recipe::test_support::recipe;
    use crate::recipe::{DietType, SpiceLevel};

    #[test]
    fn test_query_matches_ingredients_and_tags() {
        let mut r = recipe(1, "Dal Tadka", 4, &["Toor dal - 200g"]);
        r.tags = Some(vec!["comfort-food".to_string()]);

        assert!(recipe_matches_query(&r, "TOOR"));
        assert!(recipe_matches_query(&r, "comfort"));
        assert!(recipe_matches_query(&r, "tadka"));
        assert!(recipe_matches_query(&r, ""));
        assert!(recipe_matches_query(&r, " dal"));
        assert!(!recipe_matches_query(&r, "  "));
        assert!(!recipe_matches_query(&r, "paneer"));
    }

    #[test]
    fn test_all_and_missing_fields() {
        let r = recipe(1, "Mystery", 4, &[]);
        let filters = RecipeFilters::default().with_region(ALL);
        assert!(filters.matches(&r));

        // A recipe without a region does not match a concrete region
        let filters = RecipeFilters::default().with_region("Bengali");
        assert!(!filters.matches(&r));
    }

    #[test]
    fn test_facets() {
        let mut r = recipe(1, "Chettinad", 4, &[]);
        r.diet_type = Some(DietType::NonVegetarian);
        r.spice_level = Some(SpiceLevel::ExtraHot);

        assert!(RecipeFilters::default()
            .with_diet_type("Non-Vegetarian")
            .with_spice_level("Extra Hot")
            .matches(&r));
        assert!(!RecipeFilters::default().with_diet_type("Vegetarian").matches(&r));
        assert!(!RecipeFilters::default().with_category("Dessert").matches(&r));
    }

    #[test]
    fn test_sorted_by_rating_then_name() {
        let mut a = recipe(1, "Upma", 4, &[]);
        a.rating = 4.2;
        let mut b = recipe(2, "Poha", 4, &[]);
        b.rating = 4.8;
        let mut c = recipe(3, "Idli", 4, &[]);
        c.rating = 4.2;
        let recipes = vec![Arc::new(a), Arc::new(b), Arc::new(c)];

        let found = search_recipes(&recipes, "", &RecipeFilters::default());
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Poha", "Idli", "Upma"]);
    }

    #[test]
    fn test_catalog_search() {
        let recipes = seed_recipes();
        let found = search_recipes(
            &recipes,
            "paneer",
            &RecipeFilters::default().with_category("Main Course"),
        );
        assert!(!found.is_empty());
        assert!(found.iter().all(|r| r.category == "Main Course"));
    }

    #[test]
    fn test_grocery_search() {
        let items = seed_grocery_items();
        let found = search_grocery_items(&items, "dal", Some(PULSES));
        assert_eq!(found.len(), 3);

        let found = search_grocery_items(&items, "aromatic", None);
        assert_eq!(found[0].name, "Basmati Rice");

        assert_eq!(search_grocery_items(&items, "", Some(ALL)).len(), items.len());
        assert!(search_grocery_items(&items, "   ", None).is_empty());
    }
}
