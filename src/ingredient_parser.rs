//! # Ingredient Parser
//!
//! This module parses recipe ingredient records into structured ingredient data.
//! Records follow the catalog format `"<Name> - <Number><Unit>"`, for example
//! `"Basmati Rice - 300g"` or `"Curry leaves - 10g"`.
//!
//! ## Features
//!
//! - Split a record into name and quantity text on the `" - "` separator
//! - Extract the first decimal number and the unit token glued to it
//! - Degrade gracefully: records without a separator or without a number keep
//!   their name and carry no quantity, no error is raised
//!
//! ## Usage
//!
//! ```rust
//! use cooksy::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("Basmati Rice - 300g");
//! assert_eq!(parsed.name, "Basmati Rice");
//! assert_eq!(parsed.amount(), Some(300.0));
//! assert_eq!(parsed.unit(), Some("g"));
//! ```

use crate::ingredient_model::{Ingredient, Quantity};
use crate::measurement_patterns::{QUANTITY_REGEX, QUANTITY_SEPARATOR};
use log::trace;

/// Split a record into its name part and quantity part.
///
/// Only the text between the first and second separator counts as the quantity;
/// anything after a second separator is ignored. An empty quantity part is
/// reported as absent.
pub fn split_record(record: &str) -> (&str, Option<&str>) {
    let mut parts = record.split(QUANTITY_SEPARATOR);
    let name = parts.next().unwrap_or(record);
    let quantity = parts.next().filter(|q| !q.is_empty());
    (name, quantity)
}

/// Parse a single ingredient record
///
/// The name is the trimmed text before the separator. When that is empty the whole
/// record is used as the name instead.
///
/// # Examples
///
/// ```rust
/// use cooksy::ingredient_parser::parse_ingredient;
///
/// assert!(parse_ingredient("onions").quantity.is_none());
/// assert!(parse_ingredient("Salt - to taste").quantity.is_none());
/// assert_eq!(parse_ingredient("Eggs - 4 pieces").unit(), Some("pieces"));
/// ```
pub fn parse_ingredient(record: &str) -> Ingredient {
    let (name_part, quantity_part) = split_record(record);

    let trimmed = name_part.trim();
    let name = if trimmed.is_empty() { record } else { trimmed };
    let ingredient = Ingredient::new(name);

    let Some(quantity_text) = quantity_part else {
        trace!("No quantity in ingredient record: {record:?}");
        return ingredient;
    };

    match parse_quantity(quantity_text) {
        Some(quantity) => ingredient.with_quantity(quantity),
        None => {
            trace!("No leading number in quantity text: {quantity_text:?}");
            ingredient
        }
    }
}

/// Parse every record of a recipe, keeping order
pub fn parse_ingredients<S: AsRef<str>>(records: &[S]) -> Vec<Ingredient> {
    records.iter().map(|r| parse_ingredient(r.as_ref())).collect()
}

/// Extract the first `<number><unit>` pair from quantity text
fn parse_quantity(quantity_text: &str) -> Option<Quantity> {
    let captures = QUANTITY_REGEX.captures(quantity_text)?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str();
    Some(Quantity::new(amount, unit))
}
