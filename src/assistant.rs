//! # Recipe Assistant
//!
//! Rule-based stand-ins for the "AI" features: preference-based suggestions, a weekly
//! meal-plan generator, ingredient-driven suggestions with a chat reply, quick preset
//! filters and a template recipe generator.
//!
//! Randomness always comes from a caller-supplied [`Rng`] so results can be reproduced
//! with a seeded generator. The async entry points only add a configurable pause
//! before answering.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::ALL;
use crate::localization::t_args;
use crate::meal_plan::{Day, DayMeals, MealPlan};
use crate::profile::Preferences;
use crate::recipe::{DietType, Difficulty, Nutrition, Recipe, SpiceLevel};

/// Upper bound on every suggestion list
pub const MAX_SUGGESTIONS: usize = 6;

pub const GENERATED_CATEGORY: &str = "AI Generated";

const GENERATED_NAMES: &[&str] = &[
    "AI-Crafted Spiced Curry",
    "Fusion Delight Bowl",
    "Smart Chef's Special",
    "AI-Inspired Traditional Dish",
    "Modern Spice Symphony",
    "Intelligent Flavor Fusion",
];

const GENERATED_BASE_INGREDIENTS: &[&str] =
    &["onions", "tomatoes", "ginger-garlic paste", "spices", "oil"];

const GENERATED_STEPS: &[&str] = &[
    "Heat oil in a pan and add whole spices for tempering",
    "Add chopped onions and sauté until golden brown",
    "Add ginger-garlic paste and cook for 2 minutes",
    "Add tomatoes and cook until they break down",
    "Add your main ingredients and mix well",
    "Add spices according to your preference",
    "Cook covered for the recommended time",
    "Garnish with fresh herbs and serve hot",
];

const COMFORT_CLASSICS: &[&str] = &["Dal Makhani", "Butter Chicken", "Kheer", "Rajma"];
const PARTY_CLASSICS: &[&str] = &["Biryani", "Paneer Tikka Masala", "Gulab Jamun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Suggestions plus the chat lines that go with them
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub suggestions: Vec<Arc<Recipe>>,
    pub messages: Vec<ChatMessage>,
}

/// Preset filters offered as one-tap buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickSuggestion {
    Quick,
    Healthy,
    Comfort,
    Party,
}

/// Inputs of the recipe generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorForm {
    /// Comma separated
    pub ingredients: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub cook_time: String,
    pub diet_type: Option<DietType>,
    pub spice_level: Option<SpiceLevel>,
    pub servings: u32,
    pub occasion: String,
}

impl GeneratorForm {
    /// Form defaults, seeded with the user's diet and spice preferences
    pub fn for_preferences(preferences: &Preferences) -> Self {
        Self {
            ingredients: String::new(),
            cuisine: "North Indian".to_string(),
            difficulty: Difficulty::Medium,
            cook_time: "30-45 min".to_string(),
            diet_type: DietType::parse(&preferences.diet_type),
            spice_level: SpiceLevel::parse(&preferences.spice_level),
            servings: 4,
            occasion: "Everyday".to_string(),
        }
    }
}

fn preference_allows(preference: &str, value: Option<&str>) -> bool {
    preference == ALL || value.map_or(true, |value| value == preference)
}

/// Whether a recipe fits the diet and spice preferences, and the cuisine preference
/// when `check_cuisine` is set. A preference of "All" or a recipe without the field
/// always passes.
pub fn matches_preferences(recipe: &Recipe, preferences: &Preferences, check_cuisine: bool) -> bool {
    preference_allows(&preferences.diet_type, recipe.diet_type.map(|d| d.as_str()))
        && preference_allows(&preferences.spice_level, recipe.spice_level.map(|s| s.as_str()))
        && (!check_cuisine
            || preference_allows(&preferences.cuisine_preference, recipe.region.as_deref()))
}

/// Random picks among the recipes matching every preference
pub fn preference_suggestions<R: Rng + ?Sized>(
    recipes: &[Arc<Recipe>],
    preferences: &Preferences,
    rng: &mut R,
) -> Vec<Arc<Recipe>> {
    let mut matching: Vec<Arc<Recipe>> = recipes
        .iter()
        .filter(|r| matches_preferences(r, preferences, true))
        .cloned()
        .collect();
    matching.shuffle(rng);
    matching.truncate(MAX_SUGGESTIONS);
    debug!(count = matching.len(), "Generated preference suggestions");
    matching
}

/// Fill all 21 slots from the recipes matching the diet and spice preferences.
///
/// Breakfast is drawn from breakfast dishes and quick recipes, lunch and dinner from
/// main courses. An empty pool falls back to any matching recipe; with no matching
/// recipe at all the slot stays empty.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    recipes: &[Arc<Recipe>],
    preferences: &Preferences,
    rng: &mut R,
) -> MealPlan {
    let matching: Vec<&Arc<Recipe>> = recipes
        .iter()
        .filter(|r| matches_preferences(r, preferences, false))
        .collect();
    let breakfasts: Vec<&Arc<Recipe>> = matching
        .iter()
        .copied()
        .filter(|r| {
            r.category == "Breakfast" || r.cook_time.contains("15") || r.cook_time.contains("20")
        })
        .collect();
    let mains: Vec<&Arc<Recipe>> = matching
        .iter()
        .copied()
        .filter(|r| r.category == "Main Course")
        .collect();

    let mut pick = |pool: &[&Arc<Recipe>]| -> Option<Arc<Recipe>> {
        let choice = match pool.choose(&mut *rng) {
            Some(recipe) => Some(*recipe),
            None => matching.choose(&mut *rng).copied(),
        };
        choice.map(Arc::clone)
    };

    let mut plan = MealPlan::new();
    for day in Day::ALL {
        let meals = DayMeals {
            breakfast: pick(&breakfasts),
            lunch: pick(&mains),
            dinner: pick(&mains),
        };
        plan.set_day(day, meals);
    }

    info!(
        candidates = matching.len(),
        filled = plan.filled_count(),
        "Generated meal plan"
    );
    plan
}

/// Lowercased, trimmed, non-empty terms of a comma separated ingredient list
pub fn ingredient_terms(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

fn uses_any_term(recipe: &Recipe, terms: &[String]) -> bool {
    let name = recipe.name.to_lowercase();
    terms.iter().any(|term| {
        name.contains(term.as_str())
            || recipe
                .ingredients
                .iter()
                .any(|record| record.to_lowercase().contains(term.as_str()))
    })
}

/// Best-rated recipes that use any of the listed ingredients and fit the preferences
pub fn suggest_for_ingredients(
    recipes: &[Arc<Recipe>],
    ingredients: &str,
    preferences: &Preferences,
) -> AssistantReply {
    let terms = ingredient_terms(ingredients);

    let mut suggestions: Vec<Arc<Recipe>> = recipes
        .iter()
        .filter(|r| terms.is_empty() || uses_any_term(r, &terms))
        .filter(|r| matches_preferences(r, preferences, true))
        .cloned()
        .collect();
    // Stable: equal ratings keep catalog order
    suggestions.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    suggestions.truncate(MAX_SUGGESTIONS);

    let reply = if terms.is_empty() {
        t_args(
            "assistant-preferences-reply",
            &[
                ("dietType", preferences.diet_type.as_str()),
                ("cuisine", preferences.cuisine_preference.as_str()),
                ("spiceLevel", preferences.spice_level.as_str()),
            ],
        )
    } else {
        let count = suggestions.len().to_string();
        t_args(
            "assistant-ingredients-reply",
            &[
                ("ingredients", ingredients.trim()),
                ("count", count.as_str()),
                ("dietType", preferences.diet_type.as_str()),
                ("spiceLevel", preferences.spice_level.as_str()),
            ],
        )
    };

    info!(terms = terms.len(), found = suggestions.len(), "Assistant answered");
    AssistantReply {
        suggestions,
        messages: vec![ChatMessage::assistant(reply)],
    }
}

/// [`suggest_for_ingredients`] after a pause
pub async fn ask_assistant(
    recipes: &[Arc<Recipe>],
    ingredients: &str,
    preferences: &Preferences,
    delay: Duration,
) -> AssistantReply {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    suggest_for_ingredients(recipes, ingredients, preferences)
}

impl QuickSuggestion {
    pub const ALL: [QuickSuggestion; 4] = [
        QuickSuggestion::Quick,
        QuickSuggestion::Healthy,
        QuickSuggestion::Comfort,
        QuickSuggestion::Party,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickSuggestion::Quick => "quick",
            QuickSuggestion::Healthy => "healthy",
            QuickSuggestion::Comfort => "comfort",
            QuickSuggestion::Party => "party",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == value)
    }

    /// Button label
    pub fn label(&self) -> String {
        t_args(&format!("quick-suggestion-{}", self.as_str()), &[])
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            QuickSuggestion::Quick => {
                recipe.cook_minutes().is_some_and(|m| m <= 30)
                    || recipe.difficulty == Difficulty::Easy
            }
            QuickSuggestion::Healthy => recipe.nutrition.is_some_and(|n| n.calories < 300),
            QuickSuggestion::Comfort => {
                recipe.has_tag("comfort-food") || COMFORT_CLASSICS.contains(&recipe.name.as_str())
            }
            QuickSuggestion::Party => {
                recipe.has_tag("festive")
                    || recipe.servings >= 6
                    || PARTY_CLASSICS.contains(&recipe.name.as_str())
            }
        }
    }
}

/// First matching recipes in catalog order, with the request and reply chat lines
pub fn quick_suggestions(recipes: &[Arc<Recipe>], kind: QuickSuggestion) -> AssistantReply {
    let suggestions: Vec<Arc<Recipe>> = recipes
        .iter()
        .filter(|r| kind.matches(r))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();

    let query = kind.label().to_lowercase();
    let messages = vec![
        ChatMessage::user(t_args("quick-suggestion-request", &[("query", query.as_str())])),
        ChatMessage::assistant(t_args("quick-suggestion-reply", &[("query", query.as_str())])),
    ];

    debug!(kind = kind.as_str(), found = suggestions.len(), "Quick suggestions");
    AssistantReply {
        suggestions,
        messages,
    }
}

/// Build a recipe from the form. Names, rating and nutrition are randomised.
pub fn generate_recipe<R: Rng + ?Sized>(form: &GeneratorForm, id: u64, rng: &mut R) -> Recipe {
    let name = GENERATED_NAMES
        .choose(rng)
        .copied()
        .unwrap_or(GENERATED_NAMES[0]);

    let mut ingredients: Vec<String> = form
        .ingredients
        .split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect();
    ingredients.extend(GENERATED_BASE_INGREDIENTS.iter().map(|i| i.to_string()));

    let nutrition = Nutrition {
        calories: 250 + rng.gen_range(0..100),
        protein: 15 + rng.gen_range(0..10),
        carbs: 30 + rng.gen_range(0..20),
        fat: 8 + rng.gen_range(0..8),
    };

    Recipe {
        id,
        name: name.to_string(),
        description: format!(
            "A delicious {} dish crafted by AI using your specified ingredients and preferences. Perfect for {} occasions.",
            form.cuisine,
            form.occasion.to_lowercase()
        ),
        cook_time: form.cook_time.clone(),
        servings: form.servings,
        difficulty: form.difficulty,
        rating: 4.5 + rng.gen::<f64>() * 0.5,
        ingredients,
        category: GENERATED_CATEGORY.to_string(),
        image: Some("🤖".to_string()),
        instructions: Some(GENERATED_STEPS.iter().map(|s| s.to_string()).collect()),
        nutrition: Some(nutrition),
        region: Some(form.cuisine.clone()),
        diet_type: form.diet_type,
        spice_level: form.spice_level,
        tags: Some(
            ["ai-generated", "custom", "personalized"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        ),
    }
}

/// [`generate_recipe`] after a pause, with an id taken from the current time
pub async fn generate_recipe_after<R: Rng + ?Sized>(
    form: &GeneratorForm,
    delay: Duration,
    rng: &mut R,
) -> Recipe {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let id = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let recipe = generate_recipe(form, id, rng);
    info!(id = recipe.id, name = %recipe.name, "Generated recipe");
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_recipes;
    use crate::meal_plan::MealType;
    use crate::recipe::test_support::recipe;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prefs(diet: &str, spice: &str, cuisine: &str) -> Preferences {
        Preferences {
            diet_type: diet.to_string(),
            spice_level: spice.to_string(),
            cuisine_preference: cuisine.to_string(),
            ..Preferences::default()
        }
    }

    #[test]
    fn test_preferences_all_and_missing_fields() {
        let mut r = recipe(1, "Chicken Chettinad", 4, &[]);
        r.diet_type = Some(DietType::NonVegetarian);

        assert!(!matches_preferences(&r, &prefs("Vegetarian", ALL, ALL), true));
        assert!(matches_preferences(&r, &prefs(ALL, ALL, ALL), true));
        // No spice level or region on the recipe
        assert!(matches_preferences(&r, &prefs("Non-Vegetarian", "Mild", "Bengali"), true));
    }

    #[test]
    fn test_cuisine_only_checked_when_asked() {
        let mut r = recipe(1, "Sambar", 4, &[]);
        r.region = Some("South Indian".to_string());
        let p = prefs(ALL, ALL, "North Indian");
        assert!(!matches_preferences(&r, &p, true));
        assert!(matches_preferences(&r, &p, false));
    }

    #[test]
    fn test_seeded_suggestions_are_reproducible() {
        let recipes = seed_recipes();
        let p = prefs(ALL, ALL, ALL);
        let a = preference_suggestions(&recipes, &p, &mut StdRng::seed_from_u64(7));
        let b = preference_suggestions(&recipes, &p, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_meal_plan_fills_every_slot() {
        let recipes = seed_recipes();
        let plan = generate_meal_plan(
            &recipes,
            &prefs("Vegetarian", ALL, ALL),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(plan.filled_count(), 21);
        for (_, meal, slot) in plan.slots() {
            let r = slot.unwrap();
            assert_ne!(r.diet_type, Some(DietType::NonVegetarian));
            if meal != MealType::Breakfast {
                assert_eq!(r.category, "Main Course");
            }
        }
    }

    #[test]
    fn test_meal_plan_falls_back_and_empties() {
        let mut dessert = recipe(1, "Kheer", 4, &[]);
        dessert.category = "Dessert".to_string();
        dessert.cook_time = "45 min".to_string();
        let recipes = vec![Arc::new(dessert)];

        let plan = generate_meal_plan(&recipes, &prefs(ALL, ALL, ALL), &mut StdRng::seed_from_u64(3));
        assert_eq!(plan.filled_count(), 21);

        let plan = generate_meal_plan(&[], &prefs(ALL, ALL, ALL), &mut StdRng::seed_from_u64(3));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_ingredient_suggestions() {
        let recipes = seed_recipes();
        let reply = suggest_for_ingredients(&recipes, "Paneer, ", &prefs(ALL, ALL, ALL));
        assert!(!reply.suggestions.is_empty());
        assert!(reply
            .suggestions
            .iter()
            .all(|r| r.ingredients.iter().any(|i| i.to_lowercase().contains("paneer"))
                || r.name.to_lowercase().contains("paneer")));
        assert!(reply.suggestions.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert!(reply.messages[0].text.contains("(Paneer,)"));
        assert_eq!(reply.messages[0].role, ChatRole::Assistant);
    }

    #[test]
    fn test_equal_ratings_keep_catalog_order() {
        let mut upma = recipe(1, "Upma", 2, &["Onions - 50g"]);
        upma.rating = 4.5;
        let mut poha = recipe(2, "Poha", 2, &["Onions - 40g"]);
        poha.rating = 4.5;
        let mut pakora = recipe(3, "Onion Pakora", 4, &["Onions - 200g"]);
        pakora.rating = 4.7;
        let recipes = vec![Arc::new(upma), Arc::new(poha), Arc::new(pakora)];

        let reply = suggest_for_ingredients(&recipes, "onions", &prefs(ALL, ALL, ALL));
        let names: Vec<&str> = reply.suggestions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Onion Pakora", "Upma", "Poha"]);
    }

    #[test]
    fn test_empty_ingredients_use_preferences_message() {
        let recipes = seed_recipes();
        let reply = suggest_for_ingredients(&recipes, "  ", &prefs("Vegetarian", "Mild", ALL));
        assert_eq!(
            reply.messages[0].text,
            "Based on your preferences for Vegetarian All cuisine with Mild spice level, here are my top recommendations!"
        );
        assert!(reply.suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_quick_presets() {
        let mut slow = recipe(1, "Dal Makhani", 4, &[]);
        slow.cook_time = "2 hours".to_string();
        slow.difficulty = Difficulty::Hard;
        let mut feast = recipe(2, "Thali", 8, &[]);
        feast.cook_time = "45 min".to_string();
        feast.difficulty = Difficulty::Medium;
        feast.nutrition = Some(Nutrition { calories: 650, protein: 20, carbs: 90, fat: 25 });

        assert!(QuickSuggestion::Quick.matches(&slow));
        assert!(!QuickSuggestion::Quick.matches(&feast));
        assert!(QuickSuggestion::Comfort.matches(&slow));
        assert!(QuickSuggestion::Party.matches(&feast));
        assert!(!QuickSuggestion::Healthy.matches(&feast));
        assert!(!QuickSuggestion::Healthy.matches(&slow));
    }

    #[test]
    fn test_quick_suggestion_messages() {
        let reply = quick_suggestions(&seed_recipes(), QuickSuggestion::Comfort);
        assert_eq!(reply.messages[0].text, "Show me comfort food classics");
        assert_eq!(reply.messages[0].role, ChatRole::User);
        assert!(reply.suggestions.iter().any(|r| r.name == "Butter Chicken"));
        assert_eq!(QuickSuggestion::parse("party"), Some(QuickSuggestion::Party));
    }

    #[test]
    fn test_generated_recipe() {
        let mut form = GeneratorForm::for_preferences(&Preferences::default());
        form.ingredients = "paneer, peas,".to_string();
        form.occasion = "Festival".to_string();

        let r = generate_recipe(&form, 42, &mut StdRng::seed_from_u64(9));
        assert_eq!(r.id, 42);
        assert!(GENERATED_NAMES.contains(&r.name.as_str()));
        assert_eq!(r.ingredients.len(), 7);
        assert_eq!(r.ingredients[0], "paneer");
        assert_eq!(r.category, GENERATED_CATEGORY);
        assert_eq!(r.diet_type, Some(DietType::Vegetarian));
        assert!(r.description.ends_with("Perfect for festival occasions."));
        assert!((4.5..5.0).contains(&r.rating));
        let n = r.nutrition.unwrap();
        assert!((250..350).contains(&n.calories));
        assert!(r.has_tag("ai-generated"));
    }

    #[tokio::test]
    async fn test_async_entry_points_without_delay() {
        let recipes = seed_recipes();
        let reply = ask_assistant(&recipes, "rice", &prefs(ALL, ALL, ALL), Duration::ZERO).await;
        assert!(!reply.suggestions.is_empty());

        let form = GeneratorForm::for_preferences(&Preferences::default());
        let mut rng = StdRng::seed_from_u64(5);
        let r = generate_recipe_after(&form, Duration::ZERO, &mut rng).await;
        assert!(r.id > 0);
    }
}
