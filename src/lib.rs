//! # Cooksy
//!
//! Core of a recipe and meal-planning app for Indian home cooking: a recipe catalog,
//! a weekly meal planner, a shopping list that can be generated from the plan with
//! serving-size scaling, and rule-based recipe suggestions.
//!
//! The centre of the crate is the ingredient pipeline:
//! [`ingredient_parser`] splits `"Rice - 300g"` records, [`scaling`] adjusts them to a
//! serving count, [`categories`] files them into grocery aisles and [`aggregator`]
//! merges a whole week into shopping items. [`store::AppStore`] ties everything to
//! persistent storage.

pub mod aggregator;
pub mod assistant;
pub mod auth;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod localization;
pub mod meal_plan;
pub mod measurement_patterns;
pub mod profile;
pub mod recipe;
pub mod scaling;
pub mod search;
pub mod shopping_list;
pub mod storage;
pub mod store;
