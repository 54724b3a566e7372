use super::InputCollector;
use crate::error::{CatalogueError, Result};
use crate::recipe::RecipeDraft;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A batch of recipe drafts, matching the expected JSON import format.
///
/// ```json
/// { "recipes": [ { "name": "Tea", "cooking_time": 5, "ingredients": ["Tea Leaves", "Water"] } ] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBatch {
    pub recipes: Vec<RecipeDraft>,
}

impl RecipeBatch {
    /// Load a batch from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| CatalogueError::invalid(format!("malformed recipe batch: {}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CatalogueError::Serialization(format!("json: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Hands out the drafts of a [`RecipeBatch`] in order.
pub struct BatchCollector {
    drafts: std::vec::IntoIter<RecipeDraft>,
}

impl BatchCollector {
    pub fn new(batch: RecipeBatch) -> Self {
        Self {
            drafts: batch.recipes.into_iter(),
        }
    }
}

impl InputCollector for BatchCollector {
    fn next_recipe(&mut self) -> Result<Option<RecipeDraft>> {
        Ok(self.drafts.next())
    }
}
