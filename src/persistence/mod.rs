use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

mod file;
mod state;

pub use file::FileStore;
pub use state::{CatalogueState, RecipeRecord, SCHEMA_VERSION};

/// The boundary through which a catalogue is saved and restored.
///
/// Implementations only move [`CatalogueState`] documents. Validation of the
/// recipes inside happens in the catalogue.
pub trait PersistenceAdapter {
    /// Reads the persisted state.
    ///
    /// Must return [`CatalogueError::NotFound`](crate::error::CatalogueError::NotFound)
    /// when nothing has been persisted yet, so callers can start from an empty catalogue.
    fn load(&self) -> Result<CatalogueState>;

    /// Writes `state`, replacing whatever was persisted before.
    fn save(&self, state: &CatalogueState) -> Result<()>;
}

/// The available on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Compact bincode encoding. The default.
    Binary,
    /// Pretty-printed JSON, for inspection and hand edits.
    Json,
}

impl StorageFormat {
    /// `.json` files are JSON; anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StorageFormat::Json,
            _ => StorageFormat::Binary,
        }
    }
}
