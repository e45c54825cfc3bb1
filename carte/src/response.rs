//! Serializable result shapes returned by the engine.
//!
//! These are computed fresh per call and owned by the caller; the transport
//! layer serializes them as-is.

use crate::catalog::{Meal, PricingOption, QualityLevel};
use rust_decimal::Decimal;
use serde::Serialize;

/// A menu entry: id, name and the ingredient names it uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSummary {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl MealSummary {
    pub(crate) fn from_meal(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name.clone(),
            ingredients: ingredient_names(meal),
        }
    }
}

/// One ingredient of a meal with its pricing options resolved from the catalog
#[derive(Debug, Clone, Serialize)]
pub struct IngredientDetails {
    pub name: String,
    pub options: Vec<PricingOption>,
}

/// Full view of a single meal, as served by `getMeal`
#[derive(Debug, Clone, Serialize)]
pub struct MealDetails {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<IngredientDetails>,
}

/// An ingredient with the quality grade the random selection rolled for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenIngredient {
    pub name: String,
    pub quality: QualityLevel,
}

/// A randomly composed meal with its rolled grades, total price and mean score
#[derive(Debug, Clone, Serialize)]
pub struct RandomMeal {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub quality_score: u32,
    pub ingredients: Vec<ChosenIngredient>,
}

/// A meal picked by the budget-constrained selection, with the
/// selection-engine price and quality aggregates
#[derive(Debug, Clone, Serialize)]
pub struct MealSelection {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub quality_score: Decimal,
    pub ingredients: Vec<String>,
}

pub(crate) fn ingredient_names(meal: &Meal) -> Vec<String> {
    meal.ingredients
        .iter()
        .map(|ingredient| ingredient.name.clone())
        .collect()
}
