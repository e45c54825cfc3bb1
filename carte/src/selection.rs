//! Budget-constrained and randomized meal selection.

use crate::catalog::{Catalog, QualityLevel};
use crate::filter::{self, DietFilter, VEGAN, VEGETARIAN};
use crate::pricing;
use crate::response::{ingredient_names, ChosenIngredient, MealSelection, RandomMeal};
use crate::{CarteError, CarteResult};
use rand::Rng;
use rust_decimal::Decimal;

/// Compose a random meal: one uniformly chosen meal, with an independently
/// uniform quality grade rolled per ingredient.
///
/// Each rolled grade contributes the price of the ingredient's first matching
/// pricing option (0 if it has none). When a budget is given and the total
/// exceeds it, only the reported price is clamped to the budget; the rolled
/// grades are kept as-is. The clamp is a display cap, not a re-selection.
pub fn random_meal(
    catalog: &Catalog,
    budget: Option<Decimal>,
    rng: &mut impl Rng,
) -> CarteResult<RandomMeal> {
    let meals = catalog.meals();
    if meals.is_empty() {
        return Err(CarteError::NoMealFound(
            "The catalog contains no meals".to_string(),
        ));
    }
    let meal = &meals[rng.gen_range(0..meals.len())];

    let mut total_price = Decimal::ZERO;
    let mut total_quality = 0u32;
    let mut ingredients = Vec::with_capacity(meal.ingredients.len());

    for ingredient in &meal.ingredients {
        let quality = QualityLevel::ALL[rng.gen_range(0..QualityLevel::ALL.len())];
        let option_price = catalog
            .options_for(&ingredient.name)
            .iter()
            .find(|option| option.quality == quality)
            .map(|option| option.price)
            .unwrap_or(Decimal::ZERO);

        total_price += option_price;
        total_quality += quality.score();
        ingredients.push(ChosenIngredient {
            name: ingredient.name.clone(),
            quality,
        });
    }

    if let Some(budget) = budget {
        total_price = total_price.min(budget);
    }

    let quality_score = match ingredients.len() as u32 {
        0 => 0,
        count => total_quality / count,
    };

    Ok(RandomMeal {
        id: meal.id,
        name: meal.name.clone(),
        price: total_price.round_dp(2),
        quality_score,
        ingredients,
    })
}

/// The highest-quality meal whose selection-engine price fits the budget,
/// restricted by the dietary partition. Ties keep the first meal encountered.
pub fn find_highest(
    catalog: &Catalog,
    budget: Decimal,
    filter: DietFilter,
) -> CarteResult<MealSelection> {
    let vegetarian = catalog.dietary_ingredients(VEGETARIAN);
    let vegan = catalog.dietary_ingredients(VEGAN);

    let mut best: Option<(Decimal, Decimal, &crate::catalog::Meal)> = None;

    for meal in catalog.meals() {
        let price = pricing::meal_price(catalog, meal);
        if price > budget {
            continue;
        }
        if !filter::meal_qualifies(meal, filter, &vegetarian, &vegan) {
            continue;
        }

        let quality = pricing::meal_quality(catalog, meal)?;
        let improves = best
            .as_ref()
            .map_or(true, |(best_quality, _, _)| quality > *best_quality);
        if improves {
            best = Some((quality, price, meal));
        }
    }

    let (quality, price, meal) = best.ok_or_else(|| {
        CarteError::NoMealFound(
            "No meal found within the specified budget and dietary restrictions".to_string(),
        )
    })?;

    Ok(MealSelection {
        id: meal.id,
        name: meal.name.clone(),
        price,
        quality_score: quality,
        ingredients: ingredient_names(meal),
    })
}

/// Price and quality of one named meal, provided the budget covers its
/// selection-engine price. An unknown id and an insufficient budget are
/// both 404s downstream but carry distinct messages.
pub fn find_highest_of_meal(
    catalog: &Catalog,
    meal_id: u64,
    budget: Decimal,
) -> CarteResult<MealSelection> {
    let meal = catalog
        .find_meal(meal_id)
        .ok_or(CarteError::MealNotFound(meal_id))?;

    let price = pricing::meal_price(catalog, meal);
    if price > budget {
        return Err(CarteError::NoMealFound(
            "The specified budget is not enough to afford the meal".to_string(),
        ));
    }

    let quality = pricing::meal_quality(catalog, meal)?;

    Ok(MealSelection {
        id: meal.id,
        name: meal.name.clone(),
        price,
        quality_score: quality,
        ingredients: ingredient_names(meal),
    })
}
