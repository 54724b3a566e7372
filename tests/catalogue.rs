//! Tests for the catalogue, its ingredient index and menu selection.
mod common;
use common::*;
use recipe_catalogue::prelude::*;

#[test]
fn test_search_preserves_insertion_order() {
    let catalogue = create_breakfast_catalogue();

    let sugar = catalogue.search_by_ingredient("Sugar");
    assert_eq!(names(&sugar), ["Tea", "Coffee", "Cake"]);

    let water = catalogue.search_by_ingredient("Water");
    assert_eq!(names(&water), ["Tea", "Coffee"]);
}

#[test]
fn test_search_for_absent_ingredient_is_empty() {
    let catalogue = create_breakfast_catalogue();
    assert!(catalogue.search_by_ingredient("Saffron").is_empty());
    assert!(catalogue.search_by_ingredient("sugar").is_empty());
    assert!(RecipeCatalogue::new().search_by_ingredient("Sugar").is_empty());
}

#[test]
fn test_index_is_union_of_ingredients() {
    let catalogue = create_breakfast_catalogue();
    let index = catalogue.index();
    assert_eq!(index.len(), 10);
    for recipe in catalogue.recipes() {
        for ingredient in recipe.ingredients() {
            assert!(index.contains(ingredient), "missing {}", ingredient);
        }
    }
}

#[test]
fn test_index_record_is_idempotent() {
    let mut index = IngredientIndex::new();
    assert!(index.record("Sugar").unwrap());
    assert!(!index.record("Sugar").unwrap());
    assert!(!index.record("  Sugar ").unwrap());
    assert_eq!(index.len(), 1);
    assert!(index.record("sugar").unwrap());
    assert_eq!(index.len(), 2);

    assert!(index.contains(" Sugar "));
    assert!(!index.contains("SUGAR"));
}

#[test]
fn test_index_rejects_blank_tokens() {
    let mut index = IngredientIndex::new();
    for blank in ["", "   ", "\t\n"] {
        assert!(matches!(
            index.record(blank),
            Err(CatalogueError::InvalidArgument(_))
        ));
    }
    assert!(index.is_empty());
    assert!(index.sorted().is_empty());
}

#[test]
fn test_duplicate_names_allowed() {
    let mut catalogue = RecipeCatalogue::new();
    catalogue.add(tea());
    catalogue.add(tea());
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.index().len(), 3);
}

#[test]
fn test_index_find_recipes_delegates_to_catalogue() {
    let catalogue = create_full_catalogue();
    let found = catalogue.index().find_recipes("Milk", &catalogue);
    assert_eq!(names(&found), ["Cake", "Banana Smoothie"]);
}

#[test]
fn test_add_ingredients_through_catalogue_updates_index() {
    let mut catalogue = create_breakfast_catalogue();
    let updated = catalogue.add_ingredients(0, ["Lemon"]).unwrap();
    assert_eq!(updated.difficulty(), Difficulty::Medium);
    assert!(catalogue.index().contains("Lemon"));
    assert_eq!(names(&catalogue.search_by_ingredient("Lemon")), ["Tea"]);

    assert!(matches!(
        catalogue.add_ingredients(9, ["Lemon"]),
        Err(CatalogueError::OutOfRange { .. })
    ));
}

#[test]
fn test_remove_prunes_unused_ingredients() {
    let mut catalogue = create_breakfast_catalogue();
    let removed = catalogue.remove(1).unwrap();
    assert_eq!(removed.name(), "Coffee");
    assert!(!catalogue.index().contains("Coffee Powder"));
    assert!(catalogue.index().contains("Sugar"));
    assert!(catalogue.index().contains("Water"));
    assert_eq!(names(&catalogue.search_by_ingredient("Sugar")), ["Tea", "Cake"]);

    assert!(matches!(
        catalogue.remove(5),
        Err(CatalogueError::OutOfRange { .. })
    ));
}

#[test]
fn test_selection_resolves_one_based() {
    let sorted = ["Milk", "Sugar", "Water"];
    assert_eq!(resolve_selection(2, &sorted).unwrap(), "Sugar");
    assert_eq!(resolve_selection(1, &sorted).unwrap(), "Milk");
    assert_eq!(resolve_selection(3, &sorted).unwrap(), "Water");

    for n in [0, 4, -1] {
        match resolve_selection(n, &sorted) {
            Err(CatalogueError::OutOfRange { index, len }) => {
                assert_eq!(index, n);
                assert_eq!(len, 3);
            }
            other => panic!("Expected OutOfRange for {}, got {:?}", n, other),
        }
    }
}

#[test]
fn test_selection_from_raw_text() {
    let sorted = vec!["Milk".to_string(), "Sugar".to_string(), "Water".to_string()];
    assert_eq!(select_ingredient(" 2 ", &sorted).unwrap(), "Sugar");
    assert!(matches!(
        select_ingredient("two", &sorted),
        Err(CatalogueError::InvalidArgument(_))
    ));
    assert!(matches!(
        select_ingredient("", &sorted),
        Err(CatalogueError::InvalidArgument(_))
    ));
    assert!(matches!(
        select_ingredient("4", &sorted),
        Err(CatalogueError::OutOfRange { .. })
    ));
}

#[test]
fn test_list_by_selection_index_uses_sorted_index() {
    let catalogue = create_breakfast_catalogue();
    let sorted = catalogue.sorted_ingredients();
    assert_eq!(
        sorted,
        [
            "Baking Powder",
            "Butter",
            "Coffee Powder",
            "Eggs",
            "Flour",
            "Milk",
            "Sugar",
            "Tea Leaves",
            "Vanilla Essence",
            "Water",
        ]
    );
    assert_eq!(catalogue.list_by_selection_index("7").unwrap(), "Sugar");
    assert!(matches!(
        catalogue.list_by_selection_index("0"),
        Err(CatalogueError::OutOfRange { index: 0, len: 10 })
    ));
    assert!(matches!(
        RecipeCatalogue::new().list_by_selection_index("1"),
        Err(CatalogueError::OutOfRange { len: 0, .. })
    ));
}

#[test]
fn test_difficulty_reporting() {
    let catalogue = create_full_catalogue();
    assert_eq!(
        names(&catalogue.by_difficulty(Difficulty::Easy)),
        ["Tea", "Coffee"]
    );
    assert_eq!(names(&catalogue.by_difficulty(Difficulty::Hard)), ["Cake"]);
    assert!(catalogue.by_difficulty(Difficulty::Intermediate).is_empty());

    assert_eq!(
        catalogue.difficulty_summary(),
        vec![
            (Difficulty::Easy, 2),
            (Difficulty::Medium, 1),
            (Difficulty::Intermediate, 0),
            (Difficulty::Hard, 1),
        ]
    );
}
