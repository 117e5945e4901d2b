//! # Grocery Categories
//!
//! Best-effort mapping from an ingredient name to a grocery store category.
//! The lowercased name is checked against an ordered keyword table and the first
//! keyword contained in it decides the category, so `"Butter Chicken"` lands in
//! Meat & Seafood because `chicken` precedes `butter`.

pub const VEGETABLES: &str = "Vegetables";
pub const MEAT_AND_SEAFOOD: &str = "Meat & Seafood";
pub const DAIRY: &str = "Dairy & Alternatives";
pub const GRAINS: &str = "Grains & Cereals";
pub const PULSES: &str = "Pulses & Lentils";
pub const OILS: &str = "Oils & Fats";
pub const SPICES: &str = "Spices & Seasonings";
pub const NUTS: &str = "Nuts & Dry Fruits";
pub const PANTRY: &str = "Pantry Essentials";
pub const OTHER: &str = "Other";

/// Keyword table, order significant
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("onions", VEGETABLES),
    ("tomatoes", VEGETABLES),
    ("potatoes", VEGETABLES),
    ("chicken", MEAT_AND_SEAFOOD),
    ("fish", MEAT_AND_SEAFOOD),
    ("mutton", MEAT_AND_SEAFOOD),
    ("paneer", DAIRY),
    ("cream", DAIRY),
    ("yogurt", DAIRY),
    ("rice", GRAINS),
    ("wheat", GRAINS),
    ("flour", GRAINS),
    ("lentils", PULSES),
    ("dal", PULSES),
    ("oil", OILS),
    ("ghee", OILS),
    ("butter", OILS),
    ("spices", SPICES),
    ("salt", SPICES),
    ("turmeric", SPICES),
];

/// Categories offered when filtering the grocery catalog and shopping list
pub const GROCERY_CATEGORIES: &[&str] = &[
    GRAINS, PULSES, VEGETABLES, SPICES, DAIRY, OILS, PANTRY, NUTS,
];

/// Categorize an ingredient by name, defaulting to [`OTHER`]
pub fn category_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|&&(keyword, _)| lower.contains(keyword))
        .map_or(OTHER, |&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(category_for("Fresh Onions"), VEGETABLES);
        assert_eq!(category_for("onions"), VEGETABLES);
        assert_eq!(category_for("TOMATOES"), VEGETABLES);
    }

    #[test]
    fn test_first_keyword_wins() {
        assert_eq!(category_for("Butter Chicken"), MEAT_AND_SEAFOOD);
        assert_eq!(category_for("Rice flour"), GRAINS);
        assert_eq!(category_for("Heavy Cream"), DAIRY);
    }

    #[test]
    fn test_substring_matching() {
        // "dal" is a keyword, so every dal variety is a pulse
        assert_eq!(category_for("Urad dal"), PULSES);
        assert_eq!(category_for("Mustard oil"), OILS);
        assert_eq!(category_for("Turmeric Powder"), SPICES);
        assert_eq!(category_for("Wheat flour"), GRAINS);
    }

    #[test]
    fn test_default_other() {
        assert_eq!(category_for("Curry leaves"), OTHER);
        assert_eq!(category_for("Coconut milk"), OTHER);
        assert_eq!(category_for(""), OTHER);
    }

    #[test]
    fn test_singular_forms_do_not_match() {
        // Keywords are plural, matching the catalog wording
        assert_eq!(category_for("Onion"), OTHER);
        assert_eq!(category_for("Potato masala"), OTHER);
    }
}
