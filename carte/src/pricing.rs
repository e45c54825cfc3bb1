//! Price and quality calculations over a single meal.
//!
//! Two distinct aggregations live here. The override-based [`price`] and
//! [`quality`] answer "what does this meal cost at these grades"; the
//! option-summing [`meal_price`] and [`meal_quality`] are the aggregation the
//! selection engine ranks meals by. They are deliberately not unified.

use crate::catalog::{Catalog, Meal, QualityLevel};
use crate::{CarteError, CarteResult};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Caller-supplied per-ingredient quality choices, keyed by ingredient name.
/// Ingredients without an entry default to [`QualityLevel::High`].
pub type QualityOverrides = HashMap<String, QualityLevel>;

/// The quality level used for one ingredient in one request:
/// the caller's override if present, otherwise high.
fn effective_quality(overrides: &QualityOverrides, ingredient: &str) -> QualityLevel {
    overrides
        .get(ingredient)
        .copied()
        .unwrap_or(QualityLevel::High)
}

/// Total price of a meal at the given quality choices, rounded to 2 decimals.
///
/// Per ingredient: the first pricing option matching the effective quality
/// (or 0 if none), plus the quality's flat surcharge, scaled by
/// `quantity / 1000` (quantities are stored in the catalog's base unit).
pub fn price(catalog: &Catalog, meal: &Meal, overrides: &QualityOverrides) -> Decimal {
    let mut total = Decimal::ZERO;

    for ingredient in &meal.ingredients {
        let quality = effective_quality(overrides, &ingredient.name);
        let unit_price = catalog
            .options_for(&ingredient.name)
            .iter()
            .find(|option| option.quality == quality)
            .map(|option| option.price)
            .unwrap_or(Decimal::ZERO);

        total += (unit_price + quality.surcharge()) * ingredient.quantity / Decimal::ONE_THOUSAND;
    }

    total.round_dp(2)
}

/// Mean quality score of a meal at the given quality choices.
///
/// Each ingredient contributes its effective quality's score (10/20/30);
/// the result is the arithmetic mean over all ingredients.
pub fn quality(meal: &Meal, overrides: &QualityOverrides) -> CarteResult<Decimal> {
    if meal.ingredients.is_empty() {
        return Err(CarteError::invalid_meal(format!(
            "meal '{}' has no ingredients",
            meal.name
        )));
    }

    let total: u32 = meal
        .ingredients
        .iter()
        .map(|ingredient| effective_quality(overrides, &ingredient.name).score())
        .sum();

    Ok(Decimal::from(total) / Decimal::from(meal.ingredients.len() as u64))
}

/// Selection-engine price: the sum of every pricing option's price across
/// all of a meal's ingredients, with no quantity scaling and no surcharge.
pub fn meal_price(catalog: &Catalog, meal: &Meal) -> Decimal {
    meal.ingredients
        .iter()
        .flat_map(|ingredient| catalog.options_for(&ingredient.name))
        .map(|option| option.price)
        .sum()
}

/// Selection-engine quality: the sum of every pricing option's quality score
/// across all of a meal's ingredients, divided by the ingredient count.
/// Scales with how many grades each ingredient offers.
pub fn meal_quality(catalog: &Catalog, meal: &Meal) -> CarteResult<Decimal> {
    if meal.ingredients.is_empty() {
        return Err(CarteError::invalid_meal(format!(
            "meal '{}' has no ingredients",
            meal.name
        )));
    }

    let total: u32 = meal
        .ingredients
        .iter()
        .flat_map(|ingredient| catalog.options_for(&ingredient.name))
        .map(|option| option.quality.score())
        .sum();

    Ok(Decimal::from(total) / Decimal::from(meal.ingredients.len() as u64))
}
