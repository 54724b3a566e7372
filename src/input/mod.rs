//! Collaborators that produce recipe drafts for the catalogue.
//!
//! The catalogue never prompts or retries. A collector owns that policy and only
//! hands over drafts it considers complete; the catalogue still validates them
//! through [`IntoRecipe`](crate::recipe::IntoRecipe).

use crate::catalogue::RecipeCatalogue;
use crate::error::Result;
use crate::recipe::{IntoRecipe, RecipeDraft};
use log::debug;

mod batch;
mod prompt;

pub use batch::{BatchCollector, RecipeBatch};
pub use prompt::{PromptCollector, split_ingredients};

/// A source of recipe drafts.
pub trait InputCollector {
    /// Returns the next draft, or `None` once the source is exhausted.
    fn next_recipe(&mut self) -> Result<Option<RecipeDraft>>;
}

/// Drains `collector` into `catalogue`, returning how many recipes were added.
///
/// Stops at the first draft that fails validation. Recipes added before the
/// failure stay in the catalogue.
pub fn collect_into(
    collector: &mut impl InputCollector,
    catalogue: &mut RecipeCatalogue,
) -> Result<usize> {
    let mut added = 0;
    while let Some(draft) = collector.next_recipe()? {
        let recipe = draft.into_recipe()?;
        debug!("Collected recipe '{}'", recipe.name());
        catalogue.add(recipe);
        added += 1;
    }
    Ok(added)
}
