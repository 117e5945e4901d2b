//! # Quantity Scaling
//!
//! Serving-count scaling for ingredient quantities. A recipe written for `n` servings
//! is scaled to `target` servings by multiplying every quantity by `target / n` and
//! rounding the result to one decimal place.

use crate::ingredient_model::{Ingredient, Quantity};
use crate::ingredient_parser::split_record;
use crate::measurement_patterns::NUMBER_REGEX;

/// Serving count assumed for recipes that declare zero servings
pub const FALLBACK_RECIPE_SERVINGS: u32 = 4;

/// Ratio of desired servings to the recipe's own serving count.
///
/// A zero `recipe_servings` is treated as [`FALLBACK_RECIPE_SERVINGS`].
pub fn serving_multiplier(target_servings: u32, recipe_servings: u32) -> f64 {
    let source = if recipe_servings == 0 {
        FALLBACK_RECIPE_SERVINGS
    } else {
        recipe_servings
    };
    f64::from(target_servings) / f64::from(source)
}

/// Round to one decimal place, halves rounding up
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Scale a quantity, rounding the scaled amount to one decimal place
pub fn scale_quantity(quantity: &Quantity, multiplier: f64) -> Quantity {
    Quantity {
        amount: round_to_tenth(quantity.amount * multiplier),
        unit: quantity.unit.clone(),
    }
}

/// Scale a parsed ingredient. Ingredients without a quantity are returned unchanged.
pub fn scale_ingredient(ingredient: &Ingredient, multiplier: f64) -> Ingredient {
    Ingredient {
        name: ingredient.name.clone(),
        quantity: ingredient
            .quantity
            .as_ref()
            .map(|q| scale_quantity(q, multiplier)),
    }
}

/// Re-render an ingredient record for display at a different serving count.
///
/// The first number in the quantity text is scaled and whatever text remains around it
/// (trimmed) becomes the unit, so `"Ghee - 2 tbsp"` at multiplier 2 renders as
/// `"Ghee - 4tbsp"`. Records without a quantity or without a number are returned verbatim.
///
/// # Examples
///
/// ```rust
/// use cooksy::scaling::scale_ingredient_line;
///
/// assert_eq!(scale_ingredient_line("Rice - 300g", 2.0), "Rice - 600g");
/// assert_eq!(scale_ingredient_line("spices", 2.0), "spices");
/// ```
pub fn scale_ingredient_line(record: &str, multiplier: f64) -> String {
    let (name, quantity_part) = split_record(record);
    let Some(quantity_text) = quantity_part else {
        return record.to_string();
    };

    let Some(number) = NUMBER_REGEX.find(quantity_text) else {
        return record.to_string();
    };
    let Ok(base) = number.as_str().parse::<f64>() else {
        return record.to_string();
    };

    let unit = format!(
        "{}{}",
        &quantity_text[..number.start()],
        &quantity_text[number.end()..]
    );
    let scaled = round_to_tenth(base * multiplier);
    format!("{name} - {scaled}{}", unit.trim())
}

/// Scale every record of a recipe for display, see [`scale_ingredient_line`]
pub fn scale_ingredient_lines<S: AsRef<str>>(
    records: &[S],
    target_servings: u32,
    recipe_servings: u32,
) -> Vec<String> {
    let multiplier = serving_multiplier(target_servings, recipe_servings);
    records
        .iter()
        .map(|r| scale_ingredient_line(r.as_ref(), multiplier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_parser::parse_ingredient;

    #[test]
    fn test_serving_multiplier() {
        assert_eq!(serving_multiplier(4, 2), 2.0);
        assert_eq!(serving_multiplier(2, 4), 0.5);
        assert_eq!(serving_multiplier(3, 3), 1.0);
    }

    #[test]
    fn test_serving_multiplier_zero_servings_falls_back() {
        assert_eq!(serving_multiplier(8, 0), 2.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(66.666), 66.7);
        assert_eq!(round_to_tenth(600.0), 600.0);
        assert_eq!(round_to_tenth(0.04), 0.0);
    }

    #[test]
    fn test_scale_identity() {
        for record in ["Rice - 300g", "Milk - 1.5l", "Curry leaves - 10g", "Eggs - 4 pieces"] {
            let parsed = parse_ingredient(record);
            let scaled = scale_ingredient(&parsed, 1.0);
            assert_eq!(scaled, parsed, "identity failed for {record}");
        }
    }

    #[test]
    fn test_scale_same_servings_is_noop() {
        let parsed = parse_ingredient("Paneer - 250g");
        let scaled = scale_ingredient(&parsed, serving_multiplier(3, 3));
        assert_eq!(scaled.amount(), Some(250.0));
    }

    #[test]
    fn test_scale_quantity_formats_without_space() {
        let scaled = scale_quantity(&Quantity::new(1.25, "kg"), 2.0);
        assert_eq!(scaled.to_string(), "2.5kg");
    }

    #[test]
    fn test_scale_ingredient_without_quantity() {
        let parsed = parse_ingredient("onions");
        assert_eq!(scale_ingredient(&parsed, 3.0), parsed);
    }

    #[test]
    fn test_scale_ingredient_line() {
        assert_eq!(scale_ingredient_line("Ghee - 2 tbsp", 2.0), "Ghee - 4tbsp");
        assert_eq!(scale_ingredient_line("Milk - 1000ml", 0.5), "Milk - 500ml");
        assert_eq!(scale_ingredient_line("Salt - to taste", 2.0), "Salt - to taste");
        assert_eq!(scale_ingredient_line("oil", 2.0), "oil");
    }

    #[test]
    fn test_scale_ingredient_lines() {
        let lines = scale_ingredient_lines(&["Rice - 300g", "spices"], 6, 3);
        assert_eq!(lines, vec!["Rice - 600g".to_string(), "spices".to_string()]);
    }
}
