//! Algebraic properties of the calculators and selection engine over
//! generated catalogs.

use carte::{
    Catalog, DietFilter, Ingredient, Meal, MealIngredient, PricingOption, QualityLevel,
    QualityOverrides,
};
use carte::{filter, pricing, selection};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

fn quality_strategy() -> impl Strategy<Value = QualityLevel> {
    prop_oneof![
        Just(QualityLevel::Low),
        Just(QualityLevel::Medium),
        Just(QualityLevel::High),
    ]
}

prop_compose! {
    fn arb_option()(quality in quality_strategy(), cents in 0i64..500) -> PricingOption {
        PricingOption { quality, price: Decimal::new(cents, 2) }
    }
}

prop_compose! {
    fn arb_ingredient(index: usize)(
        options in proptest::collection::vec(arb_option(), 0..4),
        vegetarian in any::<bool>(),
        vegan in any::<bool>(),
    ) -> Ingredient {
        let mut groups = Vec::new();
        if vegetarian {
            groups.push("vegetarian".to_string());
        }
        if vegan {
            groups.push("vegan".to_string());
        }
        Ingredient { name: format!("ingredient-{index}"), groups, options }
    }
}

prop_compose! {
    fn arb_meal(id: u64, ingredient_count: usize)(
        refs in proptest::collection::vec((0..ingredient_count, 1u32..2000), 1..5),
    ) -> Meal {
        let ingredients = refs
            .into_iter()
            .map(|(index, quantity)| MealIngredient {
                name: format!("ingredient-{index}"),
                quantity: Decimal::from(quantity),
            })
            .collect();
        Meal { id, name: format!("Meal {id}"), ingredients }
    }
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    (1usize..=5, 1usize..=4).prop_flat_map(|(ingredient_count, meal_count)| {
        let ingredients: Vec<_> = (0..ingredient_count).map(arb_ingredient).collect();
        let meals: Vec<_> = (0..meal_count)
            .map(|id| arb_meal(id as u64 + 1, ingredient_count))
            .collect();
        (meals, ingredients)
            .prop_map(|(meals, ingredients)| Catalog::new(meals, ingredients))
    })
}

fn all_at(catalog: &Catalog, level: QualityLevel) -> QualityOverrides {
    catalog
        .ingredients()
        .iter()
        .map(|ingredient| (ingredient.name.clone(), level))
        .collect()
}

proptest! {
    #[test]
    fn price_is_non_negative_and_rounding_idempotent(catalog in arb_catalog()) {
        for meal in catalog.meals() {
            for overrides in [
                QualityOverrides::new(),
                all_at(&catalog, QualityLevel::Low),
                all_at(&catalog, QualityLevel::Medium),
            ] {
                let total = pricing::price(&catalog, meal, &overrides);
                prop_assert!(total >= Decimal::ZERO);
                prop_assert_eq!(total.round_dp(2), total);
            }
        }
    }

    #[test]
    fn quality_stays_within_level_bounds(catalog in arb_catalog()) {
        for meal in catalog.meals() {
            for overrides in [
                QualityOverrides::new(),
                all_at(&catalog, QualityLevel::Low),
                all_at(&catalog, QualityLevel::Medium),
            ] {
                let score = pricing::quality(meal, &overrides).unwrap();
                prop_assert!(score >= Decimal::from(10));
                prop_assert!(score <= Decimal::from(30));
            }
        }
    }

    #[test]
    fn meal_price_is_non_negative(catalog in arb_catalog()) {
        for meal in catalog.meals() {
            prop_assert!(pricing::meal_price(&catalog, meal) >= Decimal::ZERO);
        }
    }

    #[test]
    fn unrestricted_listing_is_the_whole_menu_in_order(catalog in arb_catalog()) {
        let menu = filter::list_meals(&catalog, DietFilter::none());
        prop_assert_eq!(menu.len(), catalog.meals().len());
        for (summary, meal) in menu.iter().zip(catalog.meals()) {
            prop_assert_eq!(summary.id, meal.id);
        }
    }

    #[test]
    fn vegetarian_listing_only_contains_vegetarian_ingredients(catalog in arb_catalog()) {
        let vegetarian = catalog.dietary_ingredients("vegetarian");
        for summary in filter::list_meals(&catalog, DietFilter::vegetarian()) {
            for name in &summary.ingredients {
                prop_assert!(vegetarian.contains(name.as_str()));
            }
        }
    }

    #[test]
    fn search_by_exact_name_finds_the_meal(catalog in arb_catalog()) {
        for meal in catalog.meals() {
            let found = filter::search_meals(&catalog, &meal.name.to_uppercase()).unwrap();
            prop_assert!(found.iter().any(|summary| summary.id == meal.id));
        }
    }

    #[test]
    fn selection_never_exceeds_the_budget(
        catalog in arb_catalog(),
        budget_cents in 0i64..2000,
    ) {
        let budget = Decimal::new(budget_cents, 2);
        if let Ok(best) = selection::find_highest(&catalog, budget, DietFilter::none()) {
            prop_assert!(best.price <= budget);
        }
    }

    #[test]
    fn random_meal_respects_the_reported_budget_cap(
        catalog in arb_catalog(),
        budget_cents in 0i64..2000,
        seed in any::<u64>(),
    ) {
        let budget = Decimal::new(budget_cents, 2);
        let mut rng = StdRng::seed_from_u64(seed);
        let rolled = selection::random_meal(&catalog, Some(budget), &mut rng).unwrap();
        prop_assert!(rolled.price <= budget);
        prop_assert!(!rolled.ingredients.is_empty());
    }
}
