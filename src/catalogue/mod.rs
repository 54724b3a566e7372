use crate::error::{CatalogueError, Result};
use crate::persistence::{CatalogueState, PersistenceAdapter, RecipeRecord, SCHEMA_VERSION};
use crate::recipe::{Difficulty, Recipe};
use log::{debug, info, warn};

mod index;
mod selection;

pub use index::IngredientIndex;
pub use selection::{resolve_selection, select_ingredient};

use selection::{parse_selection, selection_position};

/// An ordered collection of recipes together with the index of every ingredient they use.
///
/// Insertion order is preserved and is the order every query reports in. The index is
/// kept fully derived from the live recipes: adding records new tokens, and removing a
/// recipe rebuilds the index from what remains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCatalogue {
    recipes: Vec<Recipe>,
    index: IngredientIndex,
}

impl RecipeCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recipe and records its ingredients. Returns its 0-based position.
    ///
    /// Names are not unique; two recipes may share one.
    pub fn add(&mut self, recipe: Recipe) -> usize {
        for ingredient in recipe.ingredients() {
            self.index.insert_normalized(ingredient);
        }
        debug!(
            "Added recipe '{}' ({} mins, {})",
            recipe.name(),
            recipe.cooking_time(),
            recipe.difficulty()
        );
        self.recipes.push(recipe);
        self.recipes.len() - 1
    }

    /// Appends ingredients to the recipe at `position` and records them in the index.
    pub fn add_ingredients<I, S>(&mut self, position: usize, tokens: I) -> Result<&Recipe>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let len = self.recipes.len();
        let recipe = self
            .recipes
            .get_mut(position)
            .ok_or_else(|| position_out_of_range(position, len))?;
        let added = recipe.add_ingredients(tokens)?;
        for ingredient in &added {
            self.index.insert_normalized(ingredient);
        }
        Ok(&self.recipes[position])
    }

    /// Removes and returns the recipe at `position`, pruning ingredients no other recipe uses.
    pub fn remove(&mut self, position: usize) -> Result<Recipe> {
        if position >= self.recipes.len() {
            return Err(position_out_of_range(position, self.recipes.len()));
        }
        let removed = self.recipes.remove(position);
        self.index = IngredientIndex::from_recipes(&self.recipes);
        debug!("Removed recipe '{}'", removed.name());
        Ok(removed)
    }

    /// Every recipe containing exactly `token`, in insertion order. Empty when none match.
    pub fn search_by_ingredient(&self, token: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.contains_ingredient(token))
            .collect()
    }

    /// Resolves a raw, 1-based menu pick against the sorted ingredient list.
    pub fn list_by_selection_index(&self, raw: &str) -> Result<&str> {
        let sorted = self.index.sorted();
        let position = selection_position(parse_selection(raw)?, sorted.len())?;
        Ok(sorted[position])
    }

    /// The ingredient index in alphabetical order.
    pub fn sorted_ingredients(&self) -> Vec<&str> {
        self.index.sorted()
    }

    /// Recipes of one difficulty class, in insertion order.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.difficulty() == difficulty)
            .collect()
    }

    /// Number of recipes per difficulty class. Every class is present, in table order.
    pub fn difficulty_summary(&self) -> Vec<(Difficulty, usize)> {
        Difficulty::ALL
            .iter()
            .map(|&difficulty| {
                let count = self
                    .recipes
                    .iter()
                    .filter(|recipe| recipe.difficulty() == difficulty)
                    .count();
                (difficulty, count)
            })
            .collect()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, position: usize) -> Option<&Recipe> {
        self.recipes.get(position)
    }

    pub fn index(&self) -> &IngredientIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Snapshot of the catalogue in its persisted form.
    pub fn to_state(&self) -> CatalogueState {
        CatalogueState {
            version: SCHEMA_VERSION,
            recipes: self.recipes.iter().map(RecipeRecord::from).collect(),
            all_ingredients: self
                .sorted_ingredients()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Rebuilds a catalogue from persisted state, validating every record.
    ///
    /// Stored difficulties are not trusted; they are recomputed, and a mismatch is
    /// reported as a warning. The stored ingredient list is likewise only compared
    /// against the index derived from the recipes.
    pub fn from_state(state: CatalogueState) -> Result<Self> {
        if state.version != SCHEMA_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                found: state.version,
                expected: SCHEMA_VERSION,
            });
        }

        let mut catalogue = Self::new();
        for record in state.recipes {
            let recipe =
                Recipe::with_ingredients(&record.name, record.cooking_time, &record.ingredients)?;
            if recipe.difficulty() != record.difficulty {
                warn!(
                    "Stored difficulty {} for '{}' disagrees with computed {}; using computed",
                    record.difficulty,
                    recipe.name(),
                    recipe.difficulty()
                );
            }
            catalogue.add(recipe);
        }

        let stale = state
            .all_ingredients
            .iter()
            .filter(|token| !catalogue.index.contains(token))
            .count();
        if stale > 0 {
            warn!("Dropped {} stored ingredients not used by any recipe", stale);
        }
        Ok(catalogue)
    }

    /// Writes the catalogue through `adapter`.
    pub fn save(&self, adapter: &impl PersistenceAdapter) -> Result<()> {
        adapter.save(&self.to_state())
    }

    /// Replaces the catalogue with the state read through `adapter`.
    ///
    /// A missing resource yields an empty catalogue. Any other failure is returned
    /// and leaves the catalogue exactly as it was.
    pub fn load(&mut self, adapter: &impl PersistenceAdapter) -> Result<()> {
        let loaded = match adapter.load() {
            Ok(state) => Self::from_state(state)?,
            Err(CatalogueError::NotFound(path)) => {
                warn!(
                    "No catalogue at '{}'; starting with an empty one",
                    path.display()
                );
                Self::new()
            }
            Err(e) => return Err(e),
        };
        info!(
            "Loaded {} recipes using {} distinct ingredients",
            loaded.len(),
            loaded.index.len()
        );
        *self = loaded;
        Ok(())
    }

    /// Convenience for `RecipeCatalogue::new()` followed by [`load`](Self::load).
    pub fn open(adapter: &impl PersistenceAdapter) -> Result<Self> {
        let mut catalogue = Self::new();
        catalogue.load(adapter)?;
        Ok(catalogue)
    }
}

fn position_out_of_range(position: usize, len: usize) -> CatalogueError {
    CatalogueError::OutOfRange {
        index: i64::try_from(position).unwrap_or(i64::MAX),
        len,
    }
}
