use super::RecipeCatalogue;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::recipe::definition::normalize_token;
use ahash::AHashSet;
use itertools::Itertools;

/// The set of distinct ingredient tokens seen across a catalogue's recipes.
///
/// Tokens are stored exactly as given after trimming and are never blank; matching
/// is case-sensitive.
/// The index holds no recipe references. Lookups that need recipes go back
/// through the owning catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientIndex {
    tokens: AHashSet<String>,
}

impl IngredientIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index as the union of every recipe's ingredients.
    pub fn from_recipes<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        let mut index = Self::new();
        for recipe in recipes {
            for ingredient in recipe.ingredients() {
                index.insert_normalized(ingredient);
            }
        }
        index
    }

    /// Inserts a token. Returns `false` if it was already present.
    ///
    /// Fails with [`InvalidArgument`](crate::error::CatalogueError::InvalidArgument)
    /// when the token is blank.
    pub fn record(&mut self, token: &str) -> Result<bool> {
        let token = normalize_token(token)?;
        Ok(self.tokens.insert(token))
    }

    /// Tokens coming out of a [`Recipe`] are already trimmed and non-blank.
    pub(crate) fn insert_normalized(&mut self, token: &str) -> bool {
        if self.tokens.contains(token) {
            return false;
        }
        self.tokens.insert(token.to_string())
    }

    /// Trims `token` the same way [`record`](Self::record) does before looking it up.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token.trim())
    }

    /// Every known token, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Every known token in alphabetical order. This is the order selection menus use.
    pub fn sorted(&self) -> Vec<&str> {
        self.all().sorted_unstable().collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Recipes in `catalogue` that use `token`, in insertion order.
    pub fn find_recipes<'c>(
        &self,
        token: &str,
        catalogue: &'c RecipeCatalogue,
    ) -> Vec<&'c Recipe> {
        catalogue.search_by_ingredient(token)
    }
}
