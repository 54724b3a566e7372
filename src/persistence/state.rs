use super::StorageFormat;
use crate::error::{CatalogueError, Result};
use crate::recipe::{Difficulty, Recipe};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// One recipe as it is persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub name: String,
    pub cooking_time: u32,
    pub ingredients: Vec<String>,
    pub difficulty: Difficulty,
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            cooking_time: recipe.cooking_time(),
            ingredients: recipe.ingredients().to_vec(),
            difficulty: recipe.difficulty(),
        }
    }
}

/// The logical, versioned document a catalogue is saved as.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogueState {
    pub version: u32,
    pub recipes: Vec<RecipeRecord>,
    pub all_ingredients: Vec<String>,
}

impl Default for CatalogueState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            recipes: Vec::new(),
            all_ingredients: Vec::new(),
        }
    }
}

impl CatalogueState {
    /// Serializes the state in the given format.
    pub fn encode(&self, format: StorageFormat) -> Result<Vec<u8>> {
        match format {
            StorageFormat::Binary => encode_to_vec(self, standard())
                .map_err(|e| CatalogueError::Serialization(format!("bincode: {}", e))),
            StorageFormat::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| CatalogueError::Serialization(format!("json: {}", e))),
        }
    }

    /// Deserializes a state and rejects schema versions this build does not understand.
    pub fn decode(bytes: &[u8], format: StorageFormat) -> Result<Self> {
        let state: Self = match format {
            StorageFormat::Binary => {
                let (state, read) = decode_from_slice(bytes, standard())
                    .map_err(|e| CatalogueError::Serialization(format!("bincode: {}", e)))?;
                if read != bytes.len() {
                    return Err(CatalogueError::Serialization(format!(
                        "bincode: {} trailing bytes after catalogue",
                        bytes.len() - read
                    )));
                }
                state
            }
            StorageFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| CatalogueError::Serialization(format!("json: {}", e)))?,
        };

        if state.version != SCHEMA_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                found: state.version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(state)
    }
}
