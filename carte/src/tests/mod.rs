use crate::Catalog;

// Catalog store tests
mod catalog;





/// A small menu with meat, vegetarian-only and vegan ingredients,
/// shared by the unit tests.
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
        "meals": [
            {"id": 1, "name": "Taco", "ingredients": [
                {"name": "Beef", "quantity": 200}
            ]},
            {"id": 2, "name": "Veggie Pasta", "ingredients": [
                {"name": "Pasta", "quantity": 120},
                {"name": "Tomato", "quantity": 80}
            ]},
            {"id": 3, "name": "Vegan Bowl", "ingredients": [
                {"name": "Rice", "quantity": 150},
                {"name": "Tomato", "quantity": 50}
            ]},
            {"id": 4, "name": "Chicken Pasta", "ingredients": [
                {"name": "Pasta", "quantity": 100},
                {"name": "Chicken", "quantity": 150}
            ]},
            {"id": 5, "name": "Cheese Pasta", "ingredients": [
                {"name": "Pasta", "quantity": 100},
                {"name": "Cheese", "quantity": 40}
            ]}
        ],
        "ingredients": [
            {"name": "Beef", "groups": [], "options": [
                {"quality": "low", "price": 1.0},
                {"quality": "high", "price": 2.0}
            ]},
            {"name": "Pasta", "groups": ["vegetarian", "vegan"], "options": [
                {"quality": "low", "price": 0.5},
                {"quality": "medium", "price": 1.0},
                {"quality": "high", "price": 1.5}
            ]},
            {"name": "Tomato", "groups": ["vegetarian", "vegan"], "options": [
                {"quality": "low", "price": 0.2},
                {"quality": "medium", "price": 0.4},
                {"quality": "high", "price": 0.8}
            ]},
            {"name": "Rice", "groups": ["vegetarian", "vegan"], "options": [
                {"quality": "medium", "price": 0.6},
                {"quality": "high", "price": 1.2}
            ]},
            {"name": "Chicken", "groups": [], "options": [
                {"quality": "high", "price": 1.8}
            ]},
            {"name": "Cheese", "groups": ["vegetarian"], "options": [
                {"quality": "low", "price": 0.3},
                {"quality": "high", "price": 0.9}
            ]}
        ]
    }"#,
    )
    .expect("sample catalog parses")
}
