use carte::{MealDetails, MealSelection, MealSummary, RandomMeal};
use comfy_table::{presets::UTF8_FULL, Cell, Row, Table};

/// Renders engine results for terminal display
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Formatter
    }

    pub fn format_menu(&self, meals: &[MealSummary]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Id"),
            Cell::new("Meal"),
            Cell::new("Ingredients"),
        ]));

        for meal in meals {
            table.add_row(Row::from(vec![
                meal.id.to_string(),
                meal.name.clone(),
                meal.ingredients.join(", "),
            ]));
        }

        table.to_string()
    }

    pub fn format_meal_details(&self, meal: &MealDetails) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Ingredient"),
            Cell::new("Options"),
        ]));

        for ingredient in &meal.ingredients {
            let options = ingredient
                .options
                .iter()
                .map(|option| format!("{} {}", option.quality, option.price))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(Row::from(vec![ingredient.name.clone(), options]));
        }

        format!("{} (id {})\n{}", meal.name, meal.id, table)
    }

    pub fn format_random_meal(&self, meal: &RandomMeal) -> String {
        let grades = meal
            .ingredients
            .iter()
            .map(|ingredient| format!("{} ({})", ingredient.name, ingredient.quality))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} (id {})\n  price: {}\n  quality: {}\n  ingredients: {}",
            meal.name, meal.id, meal.price, meal.quality_score, grades
        )
    }

    pub fn format_selection(&self, selection: &MealSelection) -> String {
        format!(
            "{} (id {})\n  price: {}\n  quality: {}\n  ingredients: {}",
            selection.name,
            selection.id,
            selection.price,
            selection.quality_score,
            selection.ingredients.join(", ")
        )
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
