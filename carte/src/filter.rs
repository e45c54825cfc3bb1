//! Dietary filtering and name search over the menu.

use crate::catalog::{Catalog, Meal};
use crate::response::MealSummary;
use crate::{CarteError, CarteResult};
use std::collections::HashSet;

pub const VEGETARIAN: &str = "vegetarian";
pub const VEGAN: &str = "vegan";

/// Independent dietary flags. Both may be set at once, in which case a meal
/// qualifies when it is entirely vegetarian or entirely vegan (union of the
/// two sets, not an intersection).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DietFilter {
    pub vegetarian: bool,
    pub vegan: bool,
}

impl DietFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn vegetarian() -> Self {
        Self {
            vegetarian: true,
            vegan: false,
        }
    }

    pub fn vegan() -> Self {
        Self {
            vegetarian: false,
            vegan: true,
        }
    }

    pub fn is_unrestricted(self) -> bool {
        !self.vegetarian && !self.vegan
    }
}

/// Whether a meal passes the dietary partition. Membership is tested by
/// ingredient name against the precomputed group sets.
pub(crate) fn meal_qualifies(
    meal: &Meal,
    filter: DietFilter,
    vegetarian: &HashSet<&str>,
    vegan: &HashSet<&str>,
) -> bool {
    if filter.is_unrestricted() {
        return true;
    }

    let all_in = |set: &HashSet<&str>| {
        meal.ingredients
            .iter()
            .all(|ingredient| set.contains(ingredient.name.as_str()))
    };

    (filter.vegetarian && all_in(vegetarian)) || (filter.vegan && all_in(vegan))
}

/// List the menu, optionally restricted to fully vegetarian or fully vegan
/// meals. With no flags set this is the whole catalog in catalog order.
pub fn list_meals(catalog: &Catalog, filter: DietFilter) -> Vec<MealSummary> {
    let vegetarian = catalog.dietary_ingredients(VEGETARIAN);
    let vegan = catalog.dietary_ingredients(VEGAN);

    catalog
        .meals()
        .iter()
        .filter(|meal| meal_qualifies(meal, filter, &vegetarian, &vegan))
        .map(MealSummary::from_meal)
        .collect()
}

/// Case-insensitive substring search on meal names, catalog order preserved.
/// An empty query is rejected rather than matching everything.
pub fn search_meals(catalog: &Catalog, query: &str) -> CarteResult<Vec<MealSummary>> {
    if query.is_empty() {
        return Err(CarteError::invalid_argument("Missing 'query' parameter"));
    }

    let needle = query.to_lowercase();

    Ok(catalog
        .meals()
        .iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .map(MealSummary::from_meal)
        .collect())
}
