//! # Recipe Catalogue
//!
//! **recipe-catalogue** keeps an ordered collection of recipes, classifies each one by
//! difficulty, and maintains an index of every ingredient in use so recipes can be
//! found by ingredient. Catalogues round-trip through a small, versioned document
//! that can be stored as compact binary or as JSON.
//!
//! ## Core Workflow
//!
//! 1.  **Collect**: An [`InputCollector`](input::InputCollector) (interactive prompts, a
//!     JSON batch, or your own) produces [`RecipeDraft`](recipe::RecipeDraft)s. The
//!     collector owns any retry policy; the core never prompts.
//! 2.  **Validate**: Drafts become [`Recipe`](recipe::Recipe)s through the
//!     [`IntoRecipe`](recipe::IntoRecipe) trait. Blank names, zero cooking times and
//!     blank ingredients are rejected with [`CatalogueError::InvalidArgument`](error::CatalogueError).
//! 3.  **Catalogue**: [`RecipeCatalogue::add`](catalogue::RecipeCatalogue::add) stores the
//!     recipe and records its ingredients in the catalogue's own
//!     [`IngredientIndex`](catalogue::IngredientIndex).
//! 4.  **Query and persist**: Search by ingredient, group by difficulty, and save or
//!     load through a [`PersistenceAdapter`](persistence::PersistenceAdapter).
//!
//! ## Quick Start
//!
//! ```rust
//! use recipe_catalogue::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut catalogue = RecipeCatalogue::new();
//!
//!     let tea = RecipeDraft::new("Tea", 5, ["Tea Leaves", "Sugar", "Water"]).into_recipe()?;
//!     assert_eq!(tea.difficulty(), Difficulty::Easy);
//!     catalogue.add(tea);
//!
//!     let cake = Recipe::with_ingredients(
//!         "Cake",
//!         50,
//!         ["Sugar", "Butter", "Eggs", "Vanilla Essence", "Flour", "Baking Powder", "Milk"],
//!     )?;
//!     assert_eq!(cake.difficulty(), Difficulty::Hard);
//!     catalogue.add(cake);
//!
//!     let with_sugar = catalogue.search_by_ingredient("Sugar");
//!     assert_eq!(with_sugar.len(), 2);
//!
//!     // Menus number the sorted ingredient list from 1.
//!     assert_eq!(catalogue.list_by_selection_index("1")?, "Baking Powder");
//!
//!     let dir = std::env::temp_dir().join("recipe-catalogue-doc");
//!     let store = FileStore::from_path(dir.join("recipes.json"));
//!     catalogue.save(&store)?;
//!     assert_eq!(RecipeCatalogue::open(&store)?, catalogue);
//!     Ok(())
//! }
//! ```

pub mod catalogue;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod persistence;
pub mod prelude;
pub mod recipe;
pub mod report;
