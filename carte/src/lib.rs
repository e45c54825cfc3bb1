//! # Carte Engine
//!
//! **The menu that computes itself**
//!
//! Carte is a read-oriented catalog engine for restaurant menus: given a
//! static dataset of meals, ingredients and per-quality pricing options, it
//! derives prices, quality scores, dietary-filtered listings and
//! budget-constrained selections.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use carte::{CarteResult, DietFilter, Engine, QualityOverrides};
//!
//! fn main() -> CarteResult<()> {
//!     let engine = Engine::from_path("data.json")?;
//!
//!     // The full menu, then only the vegetarian part of it
//!     let menu = engine.list_meals(DietFilter::none());
//!     let veggie = engine.list_meals(DietFilter::vegetarian());
//!
//!     // Price of meal 1 with every ingredient at its default (high) grade
//!     let price = engine.price(1, &QualityOverrides::new())?;
//!
//!     println!("{} meals ({} vegetarian), meal 1 costs {}", menu.len(), veggie.len(), price);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Catalog
//! The immutable dataset serving all queries, loaded once per process.
//! Meals reference ingredients by name; each ingredient carries its dietary
//! groups and pricing options.
//!
//! ### Quality levels
//! Every ingredient comes in `low`, `medium` or `high` grade, scored
//! 10/20/30. Callers may override the grade per ingredient; unspecified
//! ingredients default to `high`.
//!
//! ### Selections
//! The selection engine ranks meals by an option-summing price/quality
//! aggregate that is intentionally distinct from the override-based
//! calculation (see [`pricing`]).

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod pricing;
pub mod response;
pub mod selection;

pub use catalog::{Catalog, Ingredient, Meal, MealIngredient, PricingOption, QualityLevel};
pub use engine::Engine;
pub use error::CarteError;
pub use filter::DietFilter;
pub use pricing::QualityOverrides;
pub use response::{
    ChosenIngredient, IngredientDetails, MealDetails, MealSelection, MealSummary, RandomMeal,
};

/// Result type for carte operations
pub type CarteResult<T> = Result<T, CarteError>;

#[cfg(test)]
mod tests;
