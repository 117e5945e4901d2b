//! # Seed Catalog
//!
//! Static recipe and grocery data bundled with the app, plus the shopping-list
//! templates. Recipes are generated from compact dish tables; per-recipe numbers
//! (cook time, servings, difficulty, rating, nutrition) are derived from the dish's
//! position in the catalog so the data is stable across runs.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::categories::{DAIRY, GRAINS, MEAT_AND_SEAFOOD, NUTS, OILS, PANTRY, PULSES, SPICES, VEGETABLES};
use crate::recipe::{DietType, Difficulty, Nutrition, Recipe, SpiceLevel};
use crate::scaling::round_to_tenth;

/// Filter value that matches everything
pub const ALL: &str = "All";

pub const RECIPE_CATEGORIES: &[&str] = &[
    ALL, "Main Course", "Breakfast", "Snacks", "Street Food", "Dessert", "Bread",
];

pub const RECIPE_REGIONS: &[&str] = &[
    ALL,
    "North Indian",
    "South Indian",
    "Bengali",
    "Gujarati",
    "Punjabi",
    "Maharashtrian",
    "Pan-Indian",
    "Tamil",
];

pub const RECIPE_DIET_TYPES: &[&str] = &[ALL, "Vegetarian", "Non-Vegetarian", "Vegan", "Jain"];

pub const RECIPE_SPICE_LEVELS: &[&str] = &[ALL, "Mild", "Medium", "Spicy", "Extra Hot"];

/// A grocery product from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_per_100g: Option<GroceryNutrition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroceryNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// One line of a shopping-list template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateItem {
    pub name: &'static str,
    pub quantity: &'static str,
    pub category: &'static str,
}

struct Dish {
    name: &'static str,
    region: &'static str,
    diet: DietType,
    spice: SpiceLevel,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    emoji: &'static str,
}

struct Section {
    category: &'static str,
    dishes: &'static [Dish],
}

const BREAKFAST: &[Dish] = &[
    Dish {
        name: "Plain Idli",
        region: "South Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Rice - 300g", "Urad dal - 100g", "Salt - 5g", "Water - 500ml"],
        steps: &[
            "Soak rice and dal separately for 6 hours",
            "Grind to smooth batter",
            "Ferment overnight in warm place",
            "Steam in idli plates for 12 minutes",
        ],
        emoji: "⚪",
    },
    Dish {
        name: "Masala Dosa",
        region: "South Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &["Dosa batter - 500g", "Potatoes - 400g", "Onions - 100g", "Mustard seeds - 5g"],
        steps: &[
            "Prepare potato masala with spices",
            "Heat tawa and spread batter thin",
            "Add masala filling",
            "Fold and serve with chutney",
        ],
        emoji: "🥞",
    },
    Dish {
        name: "Upma",
        region: "South Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Rava - 200g", "Onions - 100g", "Green chilies - 10g", "Curry leaves - 5g"],
        steps: &[
            "Roast rava until light golden",
            "Sauté onions and spices",
            "Add water and bring to boil",
            "Add rava slowly while stirring",
        ],
        emoji: "🍚",
    },
    Dish {
        name: "Aloo Paratha",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &["Wheat flour - 300g", "Potatoes - 400g", "Green chilies - 15g", "Ghee - 60g"],
        steps: &[
            "Boil and mash potatoes with spices",
            "Make dough with flour",
            "Stuff paratha with potato filling",
            "Cook on tawa with ghee",
        ],
        emoji: "🫓",
    },
    Dish {
        name: "Poha",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Flattened rice - 300g", "Onions - 100g", "Peanuts - 50g", "Curry leaves - 10g"],
        steps: &[
            "Wash and drain poha",
            "Sauté onions and peanuts",
            "Add poha and spices",
            "Cook for 5 minutes",
        ],
        emoji: "🍚",
    },
];

const MAIN_COURSE: &[Dish] = &[
    Dish {
        name: "Butter Chicken",
        region: "North Indian",
        diet: DietType::NonVegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &[
            "Chicken - 600g",
            "Tomatoes - 400g",
            "Heavy cream - 200ml",
            "Butter - 50g",
            "Garam masala - 10g",
        ],
        steps: &[
            "Marinate chicken with yogurt and spices",
            "Cook chicken in tandoor until charred",
            "Prepare rich tomato gravy with cream",
            "Add cooked chicken and simmer",
            "Finish with butter and cream",
        ],
        emoji: "🍗",
    },
    Dish {
        name: "Paneer Butter Masala",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &["Paneer - 400g", "Tomatoes - 300g", "Cashews - 50g", "Cream - 150ml", "Butter - 40g"],
        steps: &[
            "Fry paneer cubes until golden",
            "Make smooth tomato-cashew gravy",
            "Add cream and spices",
            "Add paneer and simmer gently",
        ],
        emoji: "🧀",
    },
    Dish {
        name: "Dal Makhani",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &[
            "Black dal - 300g",
            "Kidney beans - 100g",
            "Cream - 150ml",
            "Butter - 60g",
            "Tomatoes - 200g",
        ],
        steps: &[
            "Soak dal and rajma overnight",
            "Pressure cook until very soft",
            "Add tomato puree and spices",
            "Simmer for 2 hours with cream",
            "Finish with butter",
        ],
        emoji: "🍲",
    },
    Dish {
        name: "Palak Paneer",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Spinach - 500g", "Paneer - 300g", "Onions - 150g", "Ginger-garlic - 20g", "Cream - 100ml"],
        steps: &[
            "Blanch spinach and make puree",
            "Fry paneer cubes lightly",
            "Cook onion-ginger-garlic base",
            "Add spinach puree and spices",
        ],
        emoji: "🥬",
    },
    Dish {
        name: "Sambar",
        region: "South Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &[
            "Toor dal - 200g",
            "Tamarind - 30g",
            "Sambar powder - 20g",
            "Mixed vegetables - 300g",
            "Curry leaves - 10g",
        ],
        steps: &[
            "Cook toor dal until mushy",
            "Extract tamarind water",
            "Cook vegetables in tamarind water",
            "Add cooked dal and sambar powder",
            "Temper with mustard seeds and curry leaves",
        ],
        emoji: "🍲",
    },
    Dish {
        name: "Chicken Chettinad",
        region: "Tamil",
        diet: DietType::NonVegetarian,
        spice: SpiceLevel::ExtraHot,
        ingredients: &[
            "Chicken - 600g",
            "Chettinad masala - 30g",
            "Coconut - 100g",
            "Onions - 200g",
            "Curry leaves - 15g",
        ],
        steps: &[
            "Roast and grind chettinad spices",
            "Marinate chicken with spice paste",
            "Cook chicken until tender",
            "Add coconut and simmer",
        ],
        emoji: "🍗",
    },
    Dish {
        name: "Fish Curry Bengali",
        region: "Bengali",
        diet: DietType::NonVegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &[
            "Fish - 500g",
            "Mustard oil - 50ml",
            "Turmeric - 5g",
            "Green chilies - 15g",
            "Nigella seeds - 5g",
        ],
        steps: &[
            "Marinate fish with turmeric and salt",
            "Fry fish lightly in mustard oil",
            "Make light curry with onions",
            "Add fish and green chilies",
            "Simmer gently until cooked",
        ],
        emoji: "🐟",
    },
    Dish {
        name: "Rajma",
        region: "Punjabi",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &[
            "Kidney beans - 300g",
            "Onions - 200g",
            "Tomatoes - 200g",
            "Ginger-garlic - 25g",
            "Cream - 50ml",
        ],
        steps: &[
            "Soak rajma overnight and cook",
            "Make onion-tomato base",
            "Add cooked rajma with spices",
            "Simmer until thick gravy",
            "Finish with cream",
        ],
        emoji: "🫘",
    },
];

const SNACKS: &[Dish] = &[
    Dish {
        name: "Samosa",
        region: "Pan-Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &["Flour - 300g", "Potatoes - 400g", "Peas - 100g", "Cumin seeds - 5g", "Oil - 500ml"],
        steps: &[
            "Make crispy dough with flour",
            "Prepare spiced potato filling",
            "Shape into triangular samosas",
            "Deep fry until golden brown",
        ],
        emoji: "🥟",
    },
    Dish {
        name: "Dhokla",
        region: "Gujarati",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &[
            "Gram flour - 300g",
            "Yogurt - 150g",
            "Ginger paste - 15g",
            "Eno - 5g",
            "Mustard seeds - 5g",
        ],
        steps: &[
            "Mix gram flour with yogurt",
            "Add ginger paste and spices",
            "Add eno and steam for 15 minutes",
            "Pour tempering over steamed dhokla",
        ],
        emoji: "🟡",
    },
    Dish {
        name: "Vada",
        region: "South Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Medium,
        ingredients: &["Urad dal - 300g", "Onions - 100g", "Green chilies - 15g", "Curry leaves - 10g", "Oil - 500ml"],
        steps: &[
            "Soak urad dal for 4 hours",
            "Grind to fluffy batter",
            "Shape into donuts and deep fry",
        ],
        emoji: "🍩",
    },
];

const STREET_FOOD: &[Dish] = &[Dish {
    name: "Pani Puri",
    region: "Pan-Indian",
    diet: DietType::Vegetarian,
    spice: SpiceLevel::Spicy,
    ingredients: &[
        "Puris - 30 pieces",
        "Tamarind water - 300ml",
        "Mint chutney - 100g",
        "Potatoes - 200g",
        "Chickpeas - 150g",
    ],
    steps: &[
        "Prepare spiced tamarind water",
        "Make mint-coriander chutney",
        "Fill puris with potato and chickpeas",
        "Serve immediately with flavored water",
    ],
    emoji: "🫧",
}];

const DESSERTS: &[Dish] = &[
    Dish {
        name: "Gulab Jamun",
        region: "Pan-Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Milk powder - 200g", "Flour - 50g", "Ghee - 30g", "Sugar - 400g", "Cardamom - 5g"],
        steps: &[
            "Mix milk powder with flour and ghee",
            "Shape into small balls",
            "Deep fry until golden brown",
            "Soak in warm sugar syrup",
        ],
        emoji: "🍮",
    },
    Dish {
        name: "Kheer",
        region: "Pan-Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Rice - 100g", "Milk - 1000ml", "Sugar - 150g", "Cardamom - 5g", "Almonds - 30g"],
        steps: &[
            "Cook rice in milk until soft",
            "Simmer until milk reduces by half",
            "Add sugar and cardamom",
            "Garnish with chopped almonds",
        ],
        emoji: "🍚",
    },
];

const BREAD: &[Dish] = &[
    Dish {
        name: "Naan",
        region: "North Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Flour - 400g", "Yogurt - 100g", "Yeast - 5g", "Sugar - 10g", "Ghee - 50g"],
        steps: &[
            "Mix flour with yogurt and yeast",
            "Knead soft dough and let rise",
            "Cook in tandoor or tawa",
            "Brush with ghee and serve hot",
        ],
        emoji: "🫓",
    },
    Dish {
        name: "Roti",
        region: "Pan-Indian",
        diet: DietType::Vegetarian,
        spice: SpiceLevel::Mild,
        ingredients: &["Wheat flour - 300g", "Water - 200ml", "Salt - 5g", "Oil - 20ml"],
        steps: &[
            "Mix flour with water and salt",
            "Knead into smooth dough",
            "Roll thin circles and cook on tawa",
        ],
        emoji: "🫓",
    },
];

const SECTIONS: &[Section] = &[
    Section { category: "Breakfast", dishes: BREAKFAST },
    Section { category: "Main Course", dishes: MAIN_COURSE },
    Section { category: "Snacks", dishes: SNACKS },
    Section { category: "Street Food", dishes: STREET_FOOD },
    Section { category: "Dessert", dishes: DESSERTS },
    Section { category: "Bread", dishes: BREAD },
];

const SHOPPING_TEMPLATES: &[(&str, &[TemplateItem])] = &[
    (
        "Weekly Essentials",
        &[
            TemplateItem { name: "Basmati Rice", quantity: "2 kg", category: GRAINS },
            TemplateItem { name: "Wheat Flour", quantity: "5 kg", category: GRAINS },
            TemplateItem { name: "Toor Dal", quantity: "1 kg", category: PULSES },
            TemplateItem { name: "Onions", quantity: "2 kg", category: VEGETABLES },
            TemplateItem { name: "Tomatoes", quantity: "1 kg", category: VEGETABLES },
            TemplateItem { name: "Potatoes", quantity: "2 kg", category: VEGETABLES },
            TemplateItem { name: "Milk", quantity: "2 liters", category: DAIRY },
            TemplateItem { name: "Cooking Oil", quantity: "1 liter", category: OILS },
        ],
    ),
    (
        "Spice Refill",
        &[
            TemplateItem { name: "Turmeric Powder", quantity: "200g", category: SPICES },
            TemplateItem { name: "Red Chili Powder", quantity: "200g", category: SPICES },
            TemplateItem { name: "Cumin Powder", quantity: "100g", category: SPICES },
            TemplateItem { name: "Coriander Powder", quantity: "200g", category: SPICES },
            TemplateItem { name: "Garam Masala", quantity: "100g", category: SPICES },
            TemplateItem { name: "Mustard Seeds", quantity: "100g", category: SPICES },
        ],
    ),
    (
        "Party Shopping",
        &[
            TemplateItem { name: "Paneer", quantity: "500g", category: DAIRY },
            TemplateItem { name: "Chicken", quantity: "1 kg", category: MEAT_AND_SEAFOOD },
            TemplateItem { name: "Basmati Rice", quantity: "2 kg", category: GRAINS },
            TemplateItem { name: "Heavy Cream", quantity: "200ml", category: DAIRY },
            TemplateItem { name: "Cashews", quantity: "200g", category: NUTS },
            TemplateItem { name: "Saffron", quantity: "1g", category: SPICES },
        ],
    ),
];

/// Build the catalog recipes, ids starting at 1
pub fn seed_recipes() -> Vec<Arc<Recipe>> {
    SECTIONS
        .iter()
        .flat_map(|section| section.dishes.iter().map(move |dish| (section.category, dish)))
        .enumerate()
        .map(|(index, (category, dish))| Arc::new(build_recipe(index, category, dish)))
        .collect()
}

fn build_recipe(index: usize, category: &str, dish: &Dish) -> Recipe {
    let i = index as u32;
    Recipe {
        id: u64::from(i) + 1,
        name: dish.name.to_string(),
        description: format!(
            "Authentic {} prepared with traditional methods and aromatic spices",
            dish.name.to_lowercase()
        ),
        cook_time: format!("{} min", 20 + (i % 8) * 10),
        servings: 2 + i % 4,
        difficulty: Difficulty::ALL[index % 3],
        rating: round_to_tenth(3.8 + f64::from(i % 12) / 10.0),
        ingredients: dish.ingredients.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
        image: Some(dish.emoji.to_string()),
        instructions: Some(dish.steps.iter().map(|s| s.to_string()).collect()),
        nutrition: Some(Nutrition {
            calories: 150 + i * 2,
            protein: 8 + i % 15,
            carbs: 20 + i % 20,
            fat: 5 + i % 10,
        }),
        region: Some(dish.region.to_string()),
        diet_type: Some(dish.diet),
        spice_level: Some(dish.spice),
        tags: Some(vec!["authentic".to_string(), "traditional".to_string()]),
    }
}

/// Look up a shopping-list template by name
pub fn shopping_template(name: &str) -> Option<&'static [TemplateItem]> {
    SHOPPING_TEMPLATES
        .iter()
        .find(|(template, _)| *template == name)
        .map(|&(_, items)| items)
}

/// Names of the available templates
pub fn shopping_template_names() -> Vec<&'static str> {
    SHOPPING_TEMPLATES.iter().map(|&(name, _)| name).collect()
}

#[allow(clippy::too_many_arguments)]
fn grocery(
    id: u64,
    name: &str,
    category: &str,
    unit: &str,
    price: f64,
    description: &str,
    nutrition: (f64, f64, f64, f64, f64),
    tags: &[&str],
    alternatives: &[&str],
) -> GroceryItem {
    let (calories, protein, carbs, fat, fiber) = nutrition;
    GroceryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        unit: unit.to_string(),
        price: Some(price),
        brand: None,
        description: Some(description.to_string()),
        nutrition_per_100g: Some(GroceryNutrition {
            calories,
            protein,
            carbs,
            fat,
            fiber: Some(fiber),
        }),
        tags: Some(tags.iter().map(|s| s.to_string()).collect()),
        alternatives: Some(alternatives.iter().map(|s| s.to_string()).collect()),
    }
}

/// The grocery catalog
pub fn seed_grocery_items() -> Vec<GroceryItem> {
    vec![
        grocery(1, "Basmati Rice", GRAINS, "kg", 120.0,
            "Premium long-grain aromatic rice", (365.0, 7.1, 78.0, 0.9, 1.3),
            &["premium", "aromatic", "long-grain"], &["Jasmine Rice", "Regular Rice"]),
        grocery(2, "Brown Rice", GRAINS, "kg", 80.0,
            "Whole grain rice with bran layer", (370.0, 7.9, 77.0, 2.9, 3.5),
            &["whole-grain", "healthy"], &["Basmati Rice"]),
        grocery(3, "Wheat Flour (Atta)", GRAINS, "kg", 45.0,
            "Whole wheat flour for rotis and parathas", (340.0, 13.2, 72.0, 2.5, 10.7),
            &["staple", "whole-wheat"], &["Multigrain Atta"]),
        grocery(4, "Semolina (Suji/Rava)", GRAINS, "kg", 55.0,
            "Coarse wheat for upma and rava idli", (360.0, 12.7, 73.0, 1.1, 3.9),
            &["breakfast"], &["Broken Wheat"]),
        grocery(5, "Toor Dal (Pigeon Peas)", PULSES, "kg", 120.0,
            "Yellow split pigeon peas for sambar and dal", (343.0, 22.0, 63.0, 1.5, 15.0),
            &["protein", "staple"], &["Moong Dal"]),
        grocery(6, "Masoor Dal (Red Lentils)", PULSES, "kg", 110.0,
            "Red split lentils, quick cooking", (352.0, 24.6, 63.0, 1.1, 10.7),
            &["quick-cooking", "protein"], &["Toor Dal"]),
        grocery(7, "Urad Dal (Black Gram)", PULSES, "kg", 130.0,
            "Split black gram for idli, dosa and vada batter", (341.0, 25.0, 59.0, 1.6, 18.0),
            &["batter", "protein"], &["Moong Dal"]),
        grocery(8, "Onions", VEGETABLES, "kg", 40.0,
            "Red onions, the base of most gravies", (40.0, 1.1, 9.3, 0.1, 1.7),
            &["fresh", "staple"], &["Shallots"]),
        grocery(9, "Tomatoes", VEGETABLES, "kg", 30.0,
            "Ripe tomatoes for gravies and chutneys", (18.0, 0.9, 3.9, 0.2, 1.2),
            &["fresh"], &["Tomato Puree"]),
        grocery(10, "Turmeric Powder", SPICES, "200g", 60.0,
            "Ground turmeric with deep colour", (312.0, 9.7, 67.0, 3.3, 22.7),
            &["essential"], &[]),
        grocery(11, "Paneer", DAIRY, "200g", 90.0,
            "Fresh cottage cheese block", (265.0, 18.3, 1.2, 20.8, 0.0),
            &["fresh", "protein"], &["Tofu"]),
        grocery(12, "Ghee", OILS, "500ml", 350.0,
            "Clarified butter for tempering and sweets", (900.0, 0.0, 0.0, 100.0, 0.0),
            &["traditional"], &["Butter", "Coconut Oil"]),
        grocery(13, "Cashews", NUTS, "250g", 250.0,
            "Whole cashews for gravies and sweets", (553.0, 18.2, 30.2, 43.9, 3.3),
            &["premium"], &["Almonds"]),
        grocery(14, "Jaggery", PANTRY, "kg", 70.0,
            "Unrefined cane sugar", (383.0, 0.4, 98.0, 0.1, 0.0),
            &["natural-sweetener"], &["Sugar"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recipe_ids_are_unique() {
        let recipes = seed_recipes();
        let ids: HashSet<u64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), recipes.len());
        assert_eq!(recipes[0].id, 1);
    }

    #[test]
    fn test_derived_fields() {
        let recipes = seed_recipes();
        let first = &recipes[0];
        assert_eq!(first.name, "Plain Idli");
        assert_eq!(first.category, "Breakfast");
        assert_eq!(first.cook_time, "20 min");
        assert_eq!(first.servings, 2);
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert_eq!(first.rating, 3.8);

        let twelfth = &recipes[11];
        assert_eq!(twelfth.rating, 4.9);
    }

    #[test]
    fn test_every_ingredient_parses() {
        for recipe in seed_recipes() {
            for ingredient in recipe.parsed_ingredients() {
                assert!(
                    ingredient.has_quantity(),
                    "{} has unparseable ingredient {}",
                    recipe.name,
                    ingredient.name
                );
            }
        }
    }

    #[test]
    fn test_templates() {
        assert_eq!(
            shopping_template_names(),
            vec!["Weekly Essentials", "Spice Refill", "Party Shopping"]
        );
        assert_eq!(shopping_template("Weekly Essentials").unwrap().len(), 8);
        assert!(shopping_template("Midnight Snacks").is_none());
    }

    #[test]
    fn test_grocery_ids_are_unique() {
        let items = seed_grocery_items();
        let ids: HashSet<u64> = items.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), items.len());
    }
}
