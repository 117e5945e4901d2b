//! # Meal Plan Aggregation
//!
//! Turns a week of planned meals into a shopping list. Each recipe's ingredients are
//! scaled from the recipe's own serving count to the requested serving count, then
//! ingredients with the same name are merged.
//!
//! ## Merge rules
//!
//! - Names are compared exactly as parsed (trimmed, case-sensitive).
//! - The first occurrence of a name fixes its unit and category.
//! - A later occurrence with the same unit token is added to the running total.
//! - A later occurrence with a different unit token is discarded. `"Milk - 200ml"`
//!   followed by `"Milk - 1kg"` yields `Milk: 200ml`. Incompatible units are never summed.
//! - Records without a parseable quantity are skipped.
//!
//! Totals are accumulated unrounded and rounded to one decimal place once, when the
//! shopping item is built.

use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::categories::category_for;
use crate::ingredient_model::Quantity;
use crate::ingredient_parser::parse_ingredient;
use crate::meal_plan::{Day, MealPlan};
use crate::scaling::{round_to_tenth, serving_multiplier};
use crate::shopping_list::{IdGenerator, ShoppingItem};

/// Serving count used when the caller does not ask for one
pub const DEFAULT_TARGET_SERVINGS: u32 = 4;

/// Which part of the plan to shop for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListScope {
    /// Only meals planned on today's weekday
    Today,
    /// All seven days
    #[default]
    Week,
}

/// One merged ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    /// Unrounded running total
    pub quantity: Quantity,
    pub category: &'static str,
}

impl ListScope {
    /// Days covered by this scope, in week order
    pub fn days(&self, today: Day) -> Vec<Day> {
        match self {
            ListScope::Today => vec![today],
            ListScope::Week => Day::ALL.to_vec(),
        }
    }

    /// Parse "today" or "week", ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

impl AggregatedIngredient {
    /// Total rounded to one decimal place and glued to the unit, e.g. "600g"
    pub fn formatted_quantity(&self) -> String {
        Quantity::new(round_to_tenth(self.quantity.amount), &self.quantity.unit).to_string()
    }

    /// Build an unchecked shopping item with a fresh id
    pub fn into_item(self, id: u64) -> ShoppingItem {
        ShoppingItem {
            id,
            quantity: self.formatted_quantity(),
            name: self.name,
            category: self.category.to_string(),
            checked: false,
            price: None,
            urgent: None,
        }
    }
}

impl fmt::Display for AggregatedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_quantity())
    }
}

/// Merge the scaled ingredients of every planned meal in scope.
///
/// `today` decides which day the [`ListScope::Today`] scope covers. Output order is
/// the order in which names were first seen (day, then Breakfast/Lunch/Dinner, then
/// recipe order).
pub fn aggregate_meal_plan(
    plan: &MealPlan,
    scope: ListScope,
    target_servings: u32,
    today: Day,
) -> Vec<AggregatedIngredient> {
    let mut merged: Vec<AggregatedIngredient> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for day in scope.days(today) {
        for recipe in plan.day(day).recipes() {
            let multiplier = serving_multiplier(target_servings, recipe.servings);
            debug!(
                "Aggregating {} ({}) on {} with multiplier {}",
                recipe.name, recipe.id, day, multiplier
            );

            for record in &recipe.ingredients {
                let ingredient = parse_ingredient(record);
                let Some(quantity) = ingredient.quantity else {
                    continue;
                };
                let scaled = quantity.amount * multiplier;

                match index_by_name.get(&ingredient.name) {
                    Some(&index) => {
                        let existing = &mut merged[index];
                        if existing.quantity.unit == quantity.unit {
                            existing.quantity.amount += scaled;
                        } else {
                            debug!(
                                "Dropping {:?}: unit {:?} does not match {:?}",
                                record, quantity.unit, existing.quantity.unit
                            );
                        }
                    }
                    None => {
                        index_by_name.insert(ingredient.name.clone(), merged.len());
                        merged.push(AggregatedIngredient {
                            category: category_for(&ingredient.name),
                            quantity: Quantity::new(scaled, &quantity.unit),
                            name: ingredient.name,
                        });
                    }
                }
            }
        }
    }

    merged
}

/// Aggregate the plan into fresh, unchecked shopping items
pub fn shopping_items_from_meal_plan(
    plan: &MealPlan,
    scope: ListScope,
    target_servings: u32,
    today: Day,
    ids: &mut IdGenerator,
) -> Vec<ShoppingItem> {
    let items: Vec<ShoppingItem> = aggregate_meal_plan(plan, scope, target_servings, today)
        .into_iter()
        .map(|ingredient| ingredient.into_item(ids.next_id()))
        .collect();

    info!(
        "Built {} shopping items from meal plan ({:?}, {} servings)",
        items.len(),
        scope,
        target_servings
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{GRAINS, PULSES, VEGETABLES};
    use crate::meal_plan::MealType;
    use crate::recipe::test_support::recipe;
    use std::sync::Arc;

    fn plan_with(entries: &[(Day, MealType, crate::recipe::Recipe)]) -> MealPlan {
        let mut plan = MealPlan::new();
        for (day, meal, r) in entries {
            plan.set(*day, *meal, Some(Arc::new(r.clone())));
        }
        plan
    }

    #[test]
    fn test_end_to_end_week() {
        let idli = recipe(1, "Plain Idli", 2, &["Rice - 300g", "Urad dal - 100g"]);
        let plan = plan_with(&[(Day::Monday, MealType::Breakfast, idli)]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Friday);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].to_string(), "Rice: 600g");
        assert_eq!(merged[0].category, GRAINS);
        assert_eq!(merged[1].to_string(), "Urad dal: 200g");
        assert_eq!(merged[1].category, PULSES);
    }

    #[test]
    fn test_same_name_and_unit_are_summed() {
        let a = recipe(1, "Upma", 4, &["Onions - 100g"]);
        let b = recipe(2, "Poha", 4, &["Onions - 100g"]);
        let plan = plan_with(&[
            (Day::Monday, MealType::Breakfast, a),
            (Day::Tuesday, MealType::Breakfast, b),
        ]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].to_string(), "Onions: 200g");
        assert_eq!(merged[0].category, VEGETABLES);
    }

    #[test]
    fn test_unit_mismatch_keeps_first_entry_only() {
        // Known limitation: the second Milk record is discarded, not converted or summed
        let kheer = recipe(1, "Kheer", 4, &["Milk - 200ml"]);
        let kulfi = recipe(2, "Kulfi", 4, &["Milk - 1kg"]);
        let plan = plan_with(&[
            (Day::Monday, MealType::Dinner, kheer),
            (Day::Tuesday, MealType::Dinner, kulfi),
        ]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].to_string(), "Milk: 200ml");
    }

    #[test]
    fn test_each_recipe_uses_its_own_multiplier() {
        let a = recipe(1, "Dal Tadka", 2, &["Toor dal - 100g"]);
        let b = recipe(2, "Sambar", 8, &["Toor dal - 100g"]);
        let plan = plan_with(&[
            (Day::Monday, MealType::Lunch, a),
            (Day::Monday, MealType::Dinner, b),
        ]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged[0].to_string(), "Toor dal: 250g");
    }

    #[test]
    fn test_total_rounded_once() {
        // 3 x (10g * 4/3) totals 40g, while rounding each share first would give 39.9g
        let r = recipe(1, "Rasam", 3, &["Tamarind - 10g"]);
        let plan = plan_with(&[
            (Day::Monday, MealType::Lunch, r.clone()),
            (Day::Tuesday, MealType::Lunch, r.clone()),
            (Day::Wednesday, MealType::Lunch, r),
        ]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged[0].formatted_quantity(), "40g");
    }

    #[test]
    fn test_today_scope_only_uses_today() {
        let a = recipe(1, "Upma", 4, &["Rava - 200g"]);
        let b = recipe(2, "Poha", 4, &["Flattened rice - 300g"]);
        let plan = plan_with(&[
            (Day::Monday, MealType::Breakfast, a),
            (Day::Tuesday, MealType::Breakfast, b),
        ]);

        let merged = aggregate_meal_plan(&plan, ListScope::Today, 4, Day::Tuesday);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Flattened rice");

        let merged = aggregate_meal_plan(&plan, ListScope::Today, 4, Day::Sunday);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_empty_plan_produces_nothing() {
        let plan = MealPlan::new();
        assert!(aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday).is_empty());
        assert!(aggregate_meal_plan(&plan, ListScope::Today, 4, Day::Monday).is_empty());
    }

    #[test]
    fn test_unparseable_records_are_skipped() {
        let r = recipe(1, "AI Curry", 4, &["onions", "Salt - to taste", "Ghee - 20g"]);
        let plan = plan_with(&[(Day::Monday, MealType::Dinner, r)]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Ghee");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let r = recipe(1, "Mix", 4, &["Onions - 100g", "onions - 50g"]);
        let plan = plan_with(&[(Day::Monday, MealType::Dinner, r)]);

        let merged = aggregate_meal_plan(&plan, ListScope::Week, 4, Day::Monday);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_shopping_items_are_fresh_and_unchecked() {
        let r = recipe(1, "Idli", 4, &["Rice - 300g", "Urad dal - 100g"]);
        let plan = plan_with(&[(Day::Monday, MealType::Breakfast, r)]);

        let mut ids = IdGenerator::new();
        let items = shopping_items_from_meal_plan(&plan, ListScope::Week, 4, Day::Monday, &mut ids);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| !i.checked));
        assert_ne!(items[0].id, items[1].id);
        assert_eq!(items[0].quantity, "300g");
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!(ListScope::parse("today"), Some(ListScope::Today));
        assert_eq!(ListScope::parse("week"), Some(ListScope::Week));
        assert_eq!(ListScope::parse("Today"), Some(ListScope::Today));
        assert_eq!(ListScope::parse("month"), None);
        assert_eq!(ListScope::default(), ListScope::Week);
    }
}
