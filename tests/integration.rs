//! Integration tests for recipe-catalogue
//!
//! End-to-end tests that verify collecting, cataloguing, searching and persisting work together.
//!
mod common;
use common::*;
use recipe_catalogue::data::{sample_batch, sample_catalogue};
use recipe_catalogue::prelude::*;
use tempfile::tempdir;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_walkthrough_difficulties_and_search() {
        let mut catalogue = RecipeCatalogue::new();

        let mut tea = Recipe::new("Tea", 5).unwrap();
        tea.add_ingredients(["Tea Leaves", "Sugar", "Water"]).unwrap();
        assert_eq!(tea.difficulty(), Difficulty::Easy);
        catalogue.add(tea);

        catalogue.add(coffee());

        let cake = cake();
        assert_eq!(cake.ingredients().len(), 7);
        assert_eq!(cake.difficulty(), Difficulty::Hard);
        catalogue.add(cake);

        let sugar = catalogue.search_by_ingredient("Sugar");
        assert_eq!(names(&sugar), ["Tea", "Coffee", "Cake"]);
    }

    #[test]
    fn test_sample_data_matches_walkthrough() {
        let catalogue = sample_catalogue().expect("Sample recipes must be valid");
        assert_eq!(catalogue.len(), sample_batch().len());
        assert_eq!(catalogue, create_full_catalogue());

        assert_eq!(
            names(&catalogue.search_by_ingredient("Water")),
            ["Tea", "Coffee"]
        );
        assert_eq!(
            names(&catalogue.search_by_ingredient("Sugar")),
            ["Tea", "Coffee", "Cake", "Banana Smoothie"]
        );
        assert_eq!(
            names(&catalogue.search_by_ingredient("Bananas")),
            ["Banana Smoothie"]
        );
    }

    #[test]
    fn test_collect_save_reload_and_pick() {
        let dir = tempdir().unwrap();
        let store = FileStore::from_path(dir.path().join("recipes.bin"));

        // First session: nothing on disk yet.
        let mut catalogue = RecipeCatalogue::open(&store).unwrap();
        assert!(catalogue.is_empty());

        let mut batch = BatchCollector::new(sample_batch());
        collect_into(&mut batch, &mut catalogue).unwrap();
        catalogue.save(&store).unwrap();

        // Second session: add one more and save again.
        let mut catalogue = RecipeCatalogue::open(&store).unwrap();
        assert_eq!(catalogue.len(), 4);
        catalogue.add(Recipe::with_ingredients("Porridge", 12, ["Oats", "Milk"]).unwrap());
        catalogue.save(&store).unwrap();

        // Third session: pick an ingredient by number and search.
        let catalogue = RecipeCatalogue::open(&store).unwrap();
        let sorted = catalogue.sorted_ingredients();
        let position = sorted.iter().position(|t| *t == "Milk").unwrap() + 1;
        let milk = catalogue
            .list_by_selection_index(&position.to_string())
            .unwrap();
        assert_eq!(milk, "Milk");
        assert_eq!(
            names(&catalogue.search_by_ingredient(milk)),
            ["Cake", "Banana Smoothie", "Porridge"]
        );
        assert_eq!(
            names(&catalogue.by_difficulty(Difficulty::Intermediate)),
            ["Porridge"]
        );
    }

    #[test]
    fn test_empty_catalogue_from_missing_path() {
        let dir = tempdir().unwrap();
        let written = FileStore::from_path(dir.path().join("empty.bin"));
        RecipeCatalogue::new().save(&written).unwrap();

        let missing = FileStore::from_path(dir.path().join("missing.bin"));
        let catalogue = RecipeCatalogue::open(&missing).expect("Missing path must not fail");
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.to_state(), CatalogueState::default());
    }

    #[test]
    fn test_search_report_rendering() {
        let catalogue = create_full_catalogue();
        let matches = catalogue.search_by_ingredient("Milk");
        let banner = RecipeFormatter::format_search_banner(matches.len(), "milk");
        assert!(banner.contains("2 Recipes found containing Milk"));

        let rendered: Vec<String> = matches
            .iter()
            .map(|recipe| RecipeFormatter::format_recipe(recipe))
            .collect();
        assert!(rendered[0].starts_with("Recipe: Cake"));
        assert!(rendered[1].contains("  - Peanut Butter"));
        assert!(rendered[1].ends_with("Difficulty: Medium"));
    }
}
