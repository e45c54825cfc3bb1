use thiserror::Error;

/// Error types for the carte engine.
///
/// Every operation is a pure function over the catalog; the engine never
/// recovers from these internally. The transport layer maps them to status
/// codes (`InvalidArgument` -> 400, `MealNotFound`/`NoMealFound` -> 404,
/// `InvalidMeal`/`DataUnavailable` -> 500).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarteError {
    /// A required parameter is missing or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// No meal with the given id exists in the catalog
    #[error("Meal not found with the specified ID")]
    MealNotFound(u64),

    /// No meal satisfies the budget and dietary constraints.
    /// Carries the human-readable reason so "nothing within budget" and
    /// "this meal is over budget" stay distinct for user messaging.
    #[error("{0}")]
    NoMealFound(String),

    /// The catalog data violates an invariant (e.g. a meal with no ingredients)
    #[error("Invalid meal: {0}")]
    InvalidMeal(String),

    /// The catalog could not be loaded
    #[error("Catalog unavailable: {0}")]
    DataUnavailable(String),
}

impl CarteError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_meal(message: impl Into<String>) -> Self {
        Self::InvalidMeal(message.into())
    }

    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable(message.into())
    }
}
