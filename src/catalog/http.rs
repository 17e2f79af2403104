use crate::catalog::traits::CatalogSource;
use crate::error::{Error, Result};
use crate::models::{CatalogDocument, Listing};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Catalog served as JSON over HTTP. Fetched once, never retried.
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("property-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            return Err(Error::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let document: CatalogDocument = response.json().await.map_err(Error::Http)?;
        Ok(document.into_listings())
    }

    fn source_name(&self) -> String {
        self.url.clone()
    }
}
