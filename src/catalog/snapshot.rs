use crate::catalog::traits::CatalogSource;
use crate::models::{Listing, ListingId};
use crate::search::{self, Criteria, ANY_TYPE};
use tracing::{error, info, warn};

/// The session's in-memory copy of the catalog. Never changes once loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a snapshot from already-loaded listings.
    /// Later listings reusing an id are dropped.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut unique: Vec<Listing> = Vec::with_capacity(listings.len());
        for listing in listings {
            if unique.iter().any(|kept| kept.id == listing.id) {
                warn!("Dropping duplicate catalog listing {}", listing.id);
                continue;
            }
            unique.push(listing);
        }
        Self { listings: unique }
    }

    /// Fetch the catalog once. A failed fetch leaves the catalog empty.
    pub async fn load(source: &dyn CatalogSource) -> Self {
        match source.fetch().await {
            Ok(listings) => {
                let catalog = Self::from_listings(listings);
                info!(
                    "Loaded {} listings from {}",
                    catalog.len(),
                    source.source_name()
                );
                catalog
            }
            Err(e) => {
                error!("Error loading catalog from {}: {}", source.source_name(), e);
                Self::default()
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing; `7` and `"7"` resolve to the same listing.
    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings
            .iter()
            .find(|l| l.id == *id)
            .or_else(|| self.listings.iter().find(|l| l.id.same_as(id)))
    }

    /// Options for the type selector: "any" then each type in first-seen order.
    pub fn property_types(&self) -> Vec<String> {
        let mut types = vec![ANY_TYPE.to_string()];
        for listing in &self.listings {
            if !types.iter().any(|t| *t == listing.kind) {
                types.push(listing.kind.clone());
            }
        }
        types
    }

    pub fn search(&self, criteria: &Criteria) -> Vec<Listing> {
        search::filter(&self.listings, criteria)
    }
}
