use crate::{CarteError, CarteResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// One of the three purchasable grades of an ingredient.
///
/// The quality vocabulary is closed: anything other than `low`, `medium` or
/// `high` is rejected at the boundary rather than silently contributing zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Low,
    Medium,
    High,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 3] = [QualityLevel::Low, QualityLevel::Medium, QualityLevel::High];

    /// Numeric score used by the quality calculations
    pub fn score(self) -> u32 {
        match self {
            QualityLevel::Low => 10,
            QualityLevel::Medium => 20,
            QualityLevel::High => 30,
        }
    }

    /// Flat handling fee added to the unit price, independent of quantity
    pub fn surcharge(self) -> Decimal {
        match self {
            QualityLevel::Low => Decimal::new(10, 2),   // 0.10
            QualityLevel::Medium => Decimal::new(5, 2), // 0.05
            QualityLevel::High => Decimal::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Low => "low",
            QualityLevel::Medium => "medium",
            QualityLevel::High => "high",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = CarteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(QualityLevel::Low),
            "medium" => Ok(QualityLevel::Medium),
            "high" => Ok(QualityLevel::High),
            other => Err(CarteError::invalid_argument(format!(
                "Unknown quality level '{}', expected one of: low, medium, high",
                other
            ))),
        }
    }
}

/// A (quality, price) pair attached to an ingredient — one purchasable grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingOption {
    pub quality: QualityLevel,
    /// Price per 1000 units of the catalog's base measure
    pub price: Decimal,
}

/// A catalog-level ingredient with its dietary groups and pricing options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    pub options: Vec<PricingOption>,
}

/// A meal's reference to a catalog ingredient with the quantity it uses.
///
/// Pricing options are not stored here; they are resolved from the catalog
/// by name when a computation needs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealIngredient {
    pub name: String,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<MealIngredient>,
}

/// The immutable menu dataset: all meals and all ingredients.
///
/// Loaded once, read-only for the process lifetime. Every engine operation
/// takes the catalog by reference and derives its result fresh.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    meals: Vec<Meal>,
    ingredients: Vec<Ingredient>,
}

impl Catalog {
    pub fn new(meals: Vec<Meal>, ingredients: Vec<Ingredient>) -> Self {
        Self { meals, ingredients }
    }

    /// Parse a catalog from its JSON form: `{"meals": [...], "ingredients": [...]}`
    pub fn from_json(json: &str) -> CarteResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CarteError::data_unavailable(format!("malformed catalog: {}", e)))
    }

    pub fn from_reader(reader: impl Read) -> CarteResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| CarteError::data_unavailable(format!("malformed catalog: {}", e)))
    }

    /// Load the catalog from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> CarteResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CarteError::data_unavailable(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn find_meal(&self, id: u64) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn find_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.name == name)
    }

    /// Pricing options for the named ingredient, or empty if the meal
    /// references an ingredient the catalog does not know about
    pub fn options_for(&self, name: &str) -> &[PricingOption] {
        self.find_ingredient(name)
            .map(|ingredient| ingredient.options.as_slice())
            .unwrap_or(&[])
    }

    /// Names of all ingredients belonging to a dietary group
    /// (e.g. "vegetarian" or "vegan")
    pub fn dietary_ingredients(&self, group: &str) -> HashSet<&str> {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.groups.iter().any(|g| g == group))
            .map(|ingredient| ingredient.name.as_str())
            .collect()
    }
}
