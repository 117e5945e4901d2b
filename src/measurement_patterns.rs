//! # Measurement Patterns Module
//!
//! This module contains regex patterns and constants used for ingredient quantity detection.

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between the ingredient name and its quantity ("Basmati Rice - 300g")
pub const QUANTITY_SEPARATOR: &str = " - ";

// Decimal number followed by a unit token; the first match anywhere in the quantity text wins.
// Digit and word classes are ASCII only so the captured number always parses as f64.
pub const QUANTITY_PATTERN: &str = r"(?i)([0-9]+(?:\.[0-9]+)?)\s*([0-9A-Za-z_]+|pieces?)";

// Bare number, used by the recipe detail view which keeps whatever text surrounds it
pub const NUMBER_PATTERN: &str = r"([0-9]+(?:\.[0-9]+)?)";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
    pub static ref NUMBER_REGEX: Regex =
        Regex::new(NUMBER_PATTERN).expect("Number pattern should be valid");
}
