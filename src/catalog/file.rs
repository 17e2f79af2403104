use crate::catalog::traits::CatalogSource;
use crate::error::{Error, Result};
use crate::models::{CatalogDocument, Listing};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Catalog stored as a JSON document on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Reading catalog file {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(Error::Io)?;
        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(Error::Serialization)?;
        Ok(document.into_listings())
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
