use super::sample_catalog;
use crate::catalog::QualityLevel;
use crate::{Catalog, CarteError};
use std::str::FromStr;

#[test]
fn test_load_sample_catalog() {
    let catalog = sample_catalog();
    assert_eq!(catalog.meals().len(), 5);
    assert_eq!(catalog.ingredients().len(), 6);
}

#[test]
fn test_malformed_catalog_is_data_unavailable() {
    let err = Catalog::from_json("{\"meals\": 42}").unwrap_err();
    assert!(matches!(err, CarteError::DataUnavailable(_)));

    let err = Catalog::from_json("not json at all").unwrap_err();
    assert!(matches!(err, CarteError::DataUnavailable(_)));
}

#[test]
fn test_missing_file_is_data_unavailable() {
    let err = Catalog::from_path("/nonexistent/data.json").unwrap_err();
    assert!(matches!(err, CarteError::DataUnavailable(_)));
}

#[test]
fn test_find_meal_by_id() {
    let catalog = sample_catalog();
    assert_eq!(catalog.find_meal(1).unwrap().name, "Taco");
    assert!(catalog.find_meal(99).is_none());
}

#[test]
fn test_options_resolved_by_ingredient_name() {
    let catalog = sample_catalog();
    let options = catalog.options_for("Beef");
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].quality, QualityLevel::Low);

    // Unknown ingredients resolve to no options, not an error
    assert!(catalog.options_for("Unobtainium").is_empty());
}

#[test]
fn test_dietary_ingredient_sets() {
    let catalog = sample_catalog();

    let vegetarian = catalog.dietary_ingredients("vegetarian");
    assert_eq!(vegetarian.len(), 4);
    assert!(vegetarian.contains("Pasta"));
    assert!(vegetarian.contains("Cheese"));
    assert!(!vegetarian.contains("Beef"));

    let vegan = catalog.dietary_ingredients("vegan");
    assert_eq!(vegan.len(), 3);
    assert!(!vegan.contains("Cheese"));

    assert!(catalog.dietary_ingredients("paleo").is_empty());
}

#[test]
fn test_quality_level_parsing() {
    assert_eq!(QualityLevel::from_str("low").unwrap(), QualityLevel::Low);
    assert_eq!(QualityLevel::from_str("medium").unwrap(), QualityLevel::Medium);
    assert_eq!(QualityLevel::from_str("high").unwrap(), QualityLevel::High);

    let err = QualityLevel::from_str("premium").unwrap_err();
    assert!(matches!(err, CarteError::InvalidArgument(_)));
    assert!(err.to_string().contains("premium"));
}

#[test]
fn test_quality_level_scores_and_surcharges() {
    assert_eq!(QualityLevel::Low.score(), 10);
    assert_eq!(QualityLevel::Medium.score(), 20);
    assert_eq!(QualityLevel::High.score(), 30);

    assert_eq!(QualityLevel::Low.surcharge().to_string(), "0.10");
    assert_eq!(QualityLevel::Medium.surcharge().to_string(), "0.05");
    assert!(QualityLevel::High.surcharge().is_zero());
}
