use crate::error::Result;
use crate::persistence::{FileStore, StorageFormat};
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::PathBuf;

/// Where and how the catalogue is persisted.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogueConfig {
    /// Path of the catalogue file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Encoding override. When unset the format follows the file extension.
    #[serde(default)]
    pub format: Option<StorageFormat>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: None,
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("recipes.bin")
}

impl CatalogueConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CATALOGUE__ prefix
    /// 2. catalogue.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CATALOGUE__DATA_FILE
    pub fn load() -> Result<Self> {
        load_config("catalogue")
    }

    /// The format actually used: the override if set, otherwise inferred from the path.
    pub fn storage_format(&self) -> StorageFormat {
        self.format.unwrap_or_else(|| StorageFormat::from_path(&self.data_file))
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_file.clone(), self.storage_format())
    }
}

/// Load configuration from `<name>.toml` (optional) and `CATALOGUE__*` environment variables.
pub fn load_config(name: &str) -> Result<CatalogueConfig> {
    load_config_with(name, None)
}

/// `env` replaces the process environment when given.
fn load_config_with(name: &str, env: Option<Map<String, String>>) -> Result<CatalogueConfig> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("CATALOGUE")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
