//! # Ingredient and Quantity Data Model
//!
//! This module defines data structures for representing ingredients as they appear in
//! recipe records, i.e. `"<Name> - <Number><Unit>"` strings such as `"Basmati Rice - 300g"`.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: A named food item with an optional parsed quantity
//! - **Quantity**: A numeric amount and the unit token glued to it (`g`, `ml`, `pieces`, ...)
//!
//! Units are kept as the literal token found in the recipe text. Two quantities are only
//! ever combined when their unit tokens are identical, so no unit table is needed.
//!
//! ## Usage
//!
//! ```rust
//! use cooksy::ingredient_model::{Ingredient, Quantity};
//!
//! let rice = Ingredient::new("Rice").with_quantity(Quantity::new(300.0, "g"));
//! assert_eq!(rice.to_string(), "Rice: 300g");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed ingredient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The trimmed name of the ingredient (e.g., "Onions", "Curry leaves")
    pub name: String,

    /// Parsed quantity, absent when the record had no separator or no leading number
    pub quantity: Option<Quantity>,
}

/// A numeric amount with its unit token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The amount (e.g., 300.0)
    pub amount: f64,

    /// The unit token exactly as written (e.g., "g", "ml", "pieces")
    pub unit: String,
}

impl Ingredient {
    /// Create a new ingredient with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
        }
    }

    /// Add a quantity to this ingredient
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Check if this ingredient has a measurable quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// The amount of the parsed quantity, if any
    pub fn amount(&self) -> Option<f64> {
        self.quantity.as_ref().map(|q| q.amount)
    }

    /// The unit token of the parsed quantity, if any
    pub fn unit(&self) -> Option<&str> {
        self.quantity.as_ref().map(|q| q.unit.as_str())
    }
}

impl Quantity {
    /// Create a quantity from an amount and a unit token
    pub fn new(amount: f64, unit: &str) -> Self {
        Self {
            amount,
            unit: unit.to_string(),
        }
    }

    /// Whether two quantities can be summed (identical unit token, case included)
    pub fn same_unit(&self, other: &Quantity) -> bool {
        self.unit == other.unit
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quantity {
            Some(quantity) => write!(f, "{}: {}", self.name, quantity),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display drops a zero fraction, so 600.0 renders as "600"
        write!(f, "{}{}", self.amount, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_creation() {
        let ingredient = Ingredient::new("Onions").with_quantity(Quantity::new(100.0, "g"));

        assert_eq!(ingredient.name, "Onions");
        assert!(ingredient.has_quantity());
        assert_eq!(ingredient.amount(), Some(100.0));
        assert_eq!(ingredient.unit(), Some("g"));
    }

    #[test]
    fn test_ingredient_without_quantity() {
        let ingredient = Ingredient::new("onions");
        assert!(!ingredient.has_quantity());
        assert_eq!(ingredient.amount(), None);
        assert_eq!(ingredient.to_string(), "onions");
    }

    #[test]
    fn test_quantity_display_has_no_space() {
        assert_eq!(Quantity::new(2.5, "kg").to_string(), "2.5kg");
        assert_eq!(Quantity::new(600.0, "g").to_string(), "600g");
        assert_eq!(Quantity::new(3.0, "pieces").to_string(), "3pieces");
    }

    #[test]
    fn test_same_unit_is_case_sensitive() {
        let a = Quantity::new(1.0, "g");
        assert!(a.same_unit(&Quantity::new(5.0, "g")));
        assert!(!a.same_unit(&Quantity::new(5.0, "G")));
        assert!(!a.same_unit(&Quantity::new(5.0, "kg")));
    }

    #[test]
    fn test_display_formatting() {
        let ingredient = Ingredient::new("Urad dal").with_quantity(Quantity::new(200.0, "g"));
        assert_eq!(format!("{}", ingredient), "Urad dal: 200g");
    }
}
