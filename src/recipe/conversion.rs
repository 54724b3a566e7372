use super::definition::Recipe;
use crate::error::{CatalogueError, Result};
use serde::{Deserialize, Serialize};

/// The raw recipe data handed over by an input collaborator.
///
/// A draft is not validated until it is converted with [`IntoRecipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub cooking_time: u32,
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    pub fn new<I, S>(name: impl Into<String>, cooking_time: u32, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cooking_time,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// A trait for collaborator-specific records that can become a validated [`Recipe`].
///
/// This is the seam between whatever produces recipe data (an interactive prompt,
/// a JSON batch, a test harness) and the catalogue, which only accepts `Recipe`s.
///
/// # Example
///
/// ```rust
/// use recipe_catalogue::prelude::*;
///
/// struct CsvRow(String);
///
/// impl IntoRecipe for CsvRow {
///     fn into_recipe(self) -> Result<Recipe> {
///         let mut fields = self.0.split(';');
///         let name = fields.next().unwrap_or_default();
///         let minutes = fields
///             .next()
///             .and_then(|t| t.trim().parse().ok())
///             .ok_or_else(|| CatalogueError::InvalidArgument("bad time".into()))?;
///         Recipe::with_ingredients(name, minutes, fields)
///     }
/// }
///
/// let recipe = CsvRow("Tea;5;Tea Leaves;Sugar;Water".into()).into_recipe().unwrap();
/// assert_eq!(recipe.difficulty(), Difficulty::Easy);
/// ```
pub trait IntoRecipe {
    /// Consumes the record and validates it into a recipe.
    fn into_recipe(self) -> Result<Recipe>;
}

impl IntoRecipe for RecipeDraft {
    fn into_recipe(self) -> Result<Recipe> {
        if self.ingredients.is_empty() {
            return Err(CatalogueError::invalid(format!(
                "recipe '{}' needs at least one ingredient",
                self.name.trim()
            )));
        }
        Recipe::with_ingredients(self.name, self.cooking_time, self.ingredients)
    }
}
