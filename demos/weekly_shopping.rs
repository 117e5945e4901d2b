//! Plan a few meals from the catalog and print the week's shopping list.
//!
//! Run with `RUST_LOG=debug` to see the aggregation steps.

use anyhow::{anyhow, Result};
use std::sync::Arc;

use cooksy::aggregator::ListScope;
use cooksy::config::AppConfig;
use cooksy::meal_plan::{Day, MealType};
use cooksy::storage::MemoryStore;
use cooksy::store::AppStore;

fn main() -> Result<()> {
    env_logger::init();

    let mut store = AppStore::load(MemoryStore::new(), AppConfig::default())?;

    let plan = [
        (Day::Monday, MealType::Breakfast, "Plain Idli"),
        (Day::Monday, MealType::Dinner, "Sambar"),
        (Day::Wednesday, MealType::Lunch, "Rajma"),
        (Day::Friday, MealType::Dinner, "Butter Chicken"),
        (Day::Sunday, MealType::Breakfast, "Aloo Paratha"),
    ];
    for (day, meal, name) in plan {
        let recipe = store
            .recipes()
            .iter()
            .find(|r| r.name == name)
            .map(Arc::clone)
            .ok_or_else(|| anyhow!("{name} is not in the catalog"))?;
        println!("{day} {meal}: {} (serves {})", recipe.name, recipe.servings);
        store.update_meal_plan(day, meal, Some(recipe))?;
    }

    let list = store.generate_shopping_list_from_meal_plan(ListScope::Week, Some(4))?;
    println!("\nShopping list for 4 servings:");
    for (category, items) in list.grouped_by_category() {
        println!("\n{category}");
        for item in items {
            println!("  {} - {}", item.name, item.quantity);
        }
    }

    let stats = store.shopping_list().stats();
    println!("\n{} items", stats.total_items);
    Ok(())
}
