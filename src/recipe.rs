//! # Recipe Model
//!
//! Recipes are immutable once created and shared by reference (`Arc<Recipe>`) between
//! the catalog, favorites, the meal plan and suggestion lists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ingredient_model::Ingredient;
use crate::ingredient_parser::parse_ingredients;
use crate::scaling::scale_ingredient_lines;

/// Recipe difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Diet classification of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
    Jain,
}

/// Spice level of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpiceLevel {
    Mild,
    Medium,
    Spicy,
    #[serde(rename = "Extra Hot")]
    ExtraHot,
}

/// Display-only nutrition figures per serving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A recipe from the catalog or the recipe generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Free text such as "45 min" or "30-45 min"
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub rating: f64,
    /// Records formatted as `"<Name> - <Number><Unit>"`
    pub ingredients: Vec<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<DietType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<SpiceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Recipe {
    /// Parsed view of the ingredient records
    pub fn parsed_ingredients(&self) -> Vec<Ingredient> {
        parse_ingredients(&self.ingredients)
    }

    /// Ingredient records re-rendered for `target_servings`
    pub fn scaled_ingredients(&self, target_servings: u32) -> Vec<String> {
        scale_ingredient_lines(&self.ingredients, target_servings, self.servings)
    }

    /// Leading minutes of the cook time ("45 min" -> 45, "1-2 hours" -> 1)
    pub fn cook_minutes(&self) -> Option<u32> {
        let digits: String = self
            .cook_time
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a form value, unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Vegetarian,
        DietType::NonVegetarian,
        DietType::Vegan,
        DietType::Jain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Jain => "Jain",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 4] = [
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Spicy,
        SpiceLevel::ExtraHot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Spicy => "Spicy",
            SpiceLevel::ExtraHot => "Extra Hot",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::recipe;
    use super::*;

    #[test]
    fn test_cook_minutes() {
        let mut r = recipe(1, "Poha", 2, &[]);
        assert_eq!(r.cook_minutes(), Some(30));
        r.cook_time = "1-2 hours".to_string();
        assert_eq!(r.cook_minutes(), Some(1));
        r.cook_time = "quick".to_string();
        assert_eq!(r.cook_minutes(), None);
    }

    #[test]
    fn test_scaled_ingredients() {
        let r = recipe(1, "Idli", 2, &["Rice - 300g", "Salt - to taste"]);
        assert_eq!(
            r.scaled_ingredients(4),
            vec!["Rice - 600g".to_string(), "Salt - to taste".to_string()]
        );
    }

    #[test]
    fn test_serde_uses_camel_case_field_names() {
        let mut r = recipe(7, "Rajma", 4, &["Kidney beans - 250g"]);
        r.diet_type = Some(DietType::NonVegetarian);
        r.spice_level = Some(SpiceLevel::ExtraHot);

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["cookTime"], "30 min");
        assert_eq!(json["dietType"], "Non-Vegetarian");
        assert_eq!(json["spiceLevel"], "Extra Hot");
        assert!(json.get("tags").is_none());

        let back: Recipe = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_enum_parse() {
        assert_eq!(Difficulty::parse("Hard"), Some(Difficulty::Hard));
        assert_eq!(DietType::parse("Non-Vegetarian"), Some(DietType::NonVegetarian));
        assert_eq!(SpiceLevel::parse("Extra Hot"), Some(SpiceLevel::ExtraHot));
        assert_eq!(SpiceLevel::parse("All"), None);
    }
}
