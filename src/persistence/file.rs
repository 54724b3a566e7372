use super::{CatalogueState, PersistenceAdapter, StorageFormat};
use crate::error::{CatalogueError, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists a catalogue to a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: StorageFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Creates a store whose format is inferred from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StorageFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }
}

impl PersistenceAdapter for FileStore {
    fn load(&self) -> Result<CatalogueState> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogueError::NotFound(self.path.clone()),
            _ => CatalogueError::io(&self.path, e),
        })?;
        debug!(
            "Read {} bytes from '{}' ({:?})",
            bytes.len(),
            self.path.display(),
            self.format
        );
        CatalogueState::decode(&bytes, self.format)
    }

    fn save(&self, state: &CatalogueState) -> Result<()> {
        let bytes = state.encode(self.format)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CatalogueError::io(parent, e))?;
        }
        fs::write(&self.path, &bytes).map_err(|e| CatalogueError::io(&self.path, e))?;
        info!(
            "Saved {} recipes to '{}'",
            state.recipes.len(),
            self.path.display()
        );
        Ok(())
    }
}
