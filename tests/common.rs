//! Common test utilities for building recipes and catalogues.
use recipe_catalogue::prelude::*;

/// Tea: 5 minutes, 3 ingredients -> Easy.
#[allow(dead_code)]
pub fn tea() -> Recipe {
    Recipe::with_ingredients("Tea", 5, ["Tea Leaves", "Sugar", "Water"]).unwrap()
}

/// Coffee: 5 minutes, 3 ingredients -> Easy.
#[allow(dead_code)]
pub fn coffee() -> Recipe {
    Recipe::with_ingredients("Coffee", 5, ["Coffee Powder", "Sugar", "Water"]).unwrap()
}

/// Cake: 50 minutes, 7 ingredients -> Hard.
#[allow(dead_code)]
pub fn cake() -> Recipe {
    Recipe::with_ingredients(
        "Cake",
        50,
        [
            "Sugar",
            "Butter",
            "Eggs",
            "Vanilla Essence",
            "Flour",
            "Baking Powder",
            "Milk",
        ],
    )
    .unwrap()
}

/// Banana Smoothie: 5 minutes, 5 ingredients -> Medium.
#[allow(dead_code)]
pub fn banana_smoothie() -> Recipe {
    Recipe::with_ingredients(
        "Banana Smoothie",
        5,
        ["Bananas", "Milk", "Peanut Butter", "Sugar", "Ice Cubes"],
    )
    .unwrap()
}

/// A catalogue holding Tea, Coffee and Cake, in that order.
#[allow(dead_code)]
pub fn create_breakfast_catalogue() -> RecipeCatalogue {
    let mut catalogue = RecipeCatalogue::new();
    catalogue.add(tea());
    catalogue.add(coffee());
    catalogue.add(cake());
    catalogue
}

/// A catalogue holding all four sample recipes.
#[allow(dead_code)]
pub fn create_full_catalogue() -> RecipeCatalogue {
    let mut catalogue = create_breakfast_catalogue();
    catalogue.add(banana_smoothie());
    catalogue
}

/// Names of the given recipes, for order assertions.
#[allow(dead_code)]
pub fn names(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.name().to_string()).collect()
}
