use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::CatalogError,
    model::Edition
};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub editions: Vec<Edition>
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        debug!(path = %path.display(), "loading catalog");
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source
        })?;
        Self::from_json(&json)
    }

    /// Loads `path` when given, the embedded catalog otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn edition(&self, name: &str) -> Result<&Edition, CatalogError> {
        self.editions.iter()
            .find(|e| e.name == name)
            .ok_or_else(|| CatalogError::UnknownEdition(name.to_string()))
    }
}
