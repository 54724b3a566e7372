use super::difficulty::Difficulty;
use crate::error::{CatalogueError, Result};
use log::debug;
use std::fmt;

/// A named, timed list of ingredients with a derived difficulty rating.
///
/// The difficulty is never set directly. It is recomputed whenever the cooking
/// time or the ingredient list changes, so it always agrees with both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    cooking_time: u32,
    ingredients: Vec<String>,
    difficulty: Difficulty,
}

impl Recipe {
    /// Creates a recipe with no ingredients.
    ///
    /// Fails with [`CatalogueError::InvalidArgument`] when the name is blank or the
    /// cooking time is zero.
    pub fn new(name: impl AsRef<str>, cooking_time: u32) -> Result<Self> {
        let name = validate_name(name.as_ref())?;
        validate_cooking_time(cooking_time)?;
        Ok(Self {
            name,
            cooking_time,
            ingredients: Vec::new(),
            difficulty: Difficulty::classify(cooking_time, 0),
        })
    }

    /// Convenience constructor used by fixtures and the demo walkthrough.
    pub fn with_ingredients<I, S>(
        name: impl AsRef<str>,
        cooking_time: u32,
        ingredients: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recipe = Self::new(name, cooking_time)?;
        recipe.add_ingredients(ingredients)?;
        Ok(recipe)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<()> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Cooking time in minutes.
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn set_cooking_time(&mut self, cooking_time: u32) -> Result<()> {
        validate_cooking_time(cooking_time)?;
        self.cooking_time = cooking_time;
        self.recalculate_difficulty();
        Ok(())
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Appends ingredients in order and recomputes the difficulty.
    ///
    /// Every token is trimmed first. If any token is blank the whole call fails and
    /// the recipe is left as it was. Returns the trimmed tokens that were appended.
    pub fn add_ingredients<I, S>(&mut self, tokens: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trimmed = tokens
            .into_iter()
            .map(|token| normalize_token(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        self.ingredients.extend(trimmed.iter().cloned());
        self.recalculate_difficulty();
        debug!(
            "Recipe '{}' now has {} ingredients ({})",
            self.name,
            self.ingredients.len(),
            self.difficulty
        );
        Ok(trimmed)
    }

    /// Exact, case-sensitive membership test.
    pub fn contains_ingredient(&self, token: &str) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient == token)
    }

    fn recalculate_difficulty(&mut self) {
        self.difficulty = Difficulty::classify(self.cooking_time, self.ingredients.len());
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Cooking Time: {} mins", self.cooking_time)?;
        writeln!(f, "Ingredients: {}", self.ingredients.join(", "))?;
        write!(f, "Difficulty: {}", self.difficulty)
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogueError::invalid("recipe name must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_cooking_time(cooking_time: u32) -> Result<()> {
    if cooking_time == 0 {
        return Err(CatalogueError::invalid(
            "cooking time must be a positive number of minutes",
        ));
    }
    Ok(())
}

/// Trims an ingredient token, rejecting blanks.
pub(crate) fn normalize_token(token: &str) -> Result<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(CatalogueError::invalid("ingredient must not be empty"));
    }
    Ok(trimmed.to_string())
}
