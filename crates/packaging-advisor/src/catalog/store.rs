use std::fs;
use std::path::{Path, PathBuf};

use super::records::Catalog;

/// Error enumeration for catalog persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    #[error("catalog io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage abstraction so the advisor service can be exercised in isolation.
pub trait CatalogRepository: Send + Sync {
    fn load(&self) -> Result<Catalog, CatalogStoreError>;
    fn save(&self, catalog: &Catalog) -> Result<(), CatalogStoreError>;
}

/// Flat-file JSON store. The document is read wholesale at startup and
/// rewritten wholesale (pretty-printed, atomic rename) after each mutation.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for FileCatalogStore {
    fn load(&self) -> Result<Catalog, CatalogStoreError> {
        if !self.path.exists() {
            return Ok(Catalog::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|source| CatalogStoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogStoreError> {
        let rendered =
            serde_json::to_string_pretty(catalog).map_err(|source| CatalogStoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, rendered)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
