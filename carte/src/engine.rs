use crate::catalog::Catalog;
use crate::filter::{self, DietFilter};
use crate::pricing::{self, QualityOverrides};
use crate::response::{IngredientDetails, MealDetails, MealSelection, MealSummary, RandomMeal};
use crate::selection;
use crate::{CarteError, CarteResult};
use rust_decimal::Decimal;
use std::path::Path;

/// The carte menu engine.
///
/// Owns the immutable catalog snapshot and exposes one method per query the
/// transport layer serves. All methods are read-only; results are computed
/// fresh per call and owned by the caller.
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Load the catalog from a JSON file and build an engine over it
    pub fn from_path(path: impl AsRef<Path>) -> CarteResult<Self> {
        Ok(Self::new(Catalog::from_path(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The menu, optionally restricted to fully vegetarian or vegan meals
    pub fn list_meals(&self, diet: DietFilter) -> Vec<MealSummary> {
        filter::list_meals(&self.catalog, diet)
    }

    /// One meal with its ingredients' pricing options resolved
    pub fn get_meal(&self, id: u64) -> CarteResult<MealDetails> {
        let meal = self
            .catalog
            .find_meal(id)
            .ok_or(CarteError::MealNotFound(id))?;

        let ingredients = meal
            .ingredients
            .iter()
            .map(|ingredient| IngredientDetails {
                name: ingredient.name.clone(),
                options: self.catalog.options_for(&ingredient.name).to_vec(),
            })
            .collect();

        Ok(MealDetails {
            id: meal.id,
            name: meal.name.clone(),
            ingredients,
        })
    }

    /// Case-insensitive substring search on meal names
    pub fn search_meals(&self, query: &str) -> CarteResult<Vec<MealSummary>> {
        filter::search_meals(&self.catalog, query)
    }

    /// Total price of a meal at the given per-ingredient quality choices
    pub fn price(&self, meal_id: u64, overrides: &QualityOverrides) -> CarteResult<Decimal> {
        let meal = self
            .catalog
            .find_meal(meal_id)
            .ok_or(CarteError::MealNotFound(meal_id))?;
        Ok(pricing::price(&self.catalog, meal, overrides))
    }

    /// Mean quality score of a meal at the given quality choices
    pub fn quality(&self, meal_id: u64, overrides: &QualityOverrides) -> CarteResult<Decimal> {
        let meal = self
            .catalog
            .find_meal(meal_id)
            .ok_or(CarteError::MealNotFound(meal_id))?;
        pricing::quality(meal, overrides)
    }

    /// A randomly composed meal, optionally price-capped at a budget
    pub fn random_meal(&self, budget: Option<Decimal>) -> CarteResult<RandomMeal> {
        selection::random_meal(&self.catalog, budget, &mut rand::thread_rng())
    }

    /// The highest-quality meal affordable within the budget and diet
    pub fn find_highest(&self, budget: Decimal, diet: DietFilter) -> CarteResult<MealSelection> {
        selection::find_highest(&self.catalog, budget, diet)
    }

    /// Price and quality of one meal, provided the budget covers it
    pub fn find_highest_of_meal(&self, meal_id: u64, budget: Decimal) -> CarteResult<MealSelection> {
        selection::find_highest_of_meal(&self.catalog, meal_id, budget)
    }
}
