//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! recipe_catalogue crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_catalogue::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = CatalogueConfig::load()?.store();
//! let mut catalogue = RecipeCatalogue::open(&store)?;
//!
//! let batch = RecipeBatch::from_file("path/to/recipes.json")?;
//! collect_into(&mut BatchCollector::new(batch), &mut catalogue)?;
//! catalogue.save(&store)?;
//!
//! for recipe in catalogue.search_by_ingredient("Sugar") {
//!     println!("{}", RecipeFormatter::format_recipe(recipe));
//! }
//! # Ok(())
//! # }
//! ```

// Core model
pub use crate::catalogue::{
    IngredientIndex, RecipeCatalogue, resolve_selection, select_ingredient,
};
pub use crate::recipe::{Difficulty, IntoRecipe, Recipe, RecipeDraft};

// Collaborators
pub use crate::input::{
    BatchCollector, InputCollector, PromptCollector, RecipeBatch, collect_into,
};
pub use crate::persistence::{CatalogueState, FileStore, PersistenceAdapter, StorageFormat};

// Configuration and presentation
pub use crate::config::CatalogueConfig;
pub use crate::report::{RecipeFormatter, title_case};

// Error types
pub use crate::error::{CatalogueError, Result};
