use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::storage::{BackendLocal, StorageManager};

const CONFIG_FILE: &str = "config.yaml";

/// Default catalog file, relative to the base path.
const DEFAULT_CATALOG: &str = "cards.json";
/// Default owned-id list, relative to the base path.
const DEFAULT_OWNED: &str = "owned.txt";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Card catalog JSON (array of cards or `{"data": [...]}`)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Owned card ids, one per line
    #[serde(default = "default_owned_path")]
    pub owned_path: String,

    /// Only list owned cards in search results
    #[serde(default)]
    pub owned_only: bool,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            owned_path: default_owned_path(),
            owned_only: false,
            base_path: PathBuf::new(),
        }
    }
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG.to_string()
}

fn default_owned_path() -> String {
    DEFAULT_OWNED.to_string()
}

impl Config {
    fn validate(&self) -> Result<(), AppError> {
        if self.catalog_path.trim().is_empty() {
            return Err(AppError::Config("catalog_path must not be empty".into()));
        }
        if self.owned_path.trim().is_empty() {
            return Err(AppError::Config("owned_path must not be empty".into()));
        }
        Ok(())
    }

    /// Load `config.yaml` from `base_path`, writing defaults when absent.
    pub fn load_with(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        let store = BackendLocal::new(&base_path)?;

        if !store.exists(CONFIG_FILE) {
            log::info!("writing default config to {}", base_path.join(CONFIG_FILE).display());
            store.write(CONFIG_FILE, serde_yml::to_string(&Self::default())?.as_bytes())?;
        }

        let config_str = String::from_utf8_lossy(&store.read(CONFIG_FILE)?).into_owned();
        let mut config: Self = serde_yml::from_str(&config_str)?;
        config.base_path = base_path;
        config.validate()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), AppError> {
        let store = BackendLocal::new(&self.base_path)?;
        store.write(CONFIG_FILE, serde_yml::to_string(&self)?.as_bytes())?;
        Ok(())
    }

    /// Resolve a configured path against the base path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}
