use crate::error::Result;
use crate::models::Listing;
use async_trait::async_trait;

/// Read-once source of catalog listings.
/// Implemented for local files and HTTP endpoints.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every listing in the catalog
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Human-readable description of where the catalog comes from
    fn source_name(&self) -> String;
}
