pub mod file;
pub mod http;
pub mod snapshot;
pub mod traits;

pub use file::FileCatalog;
pub use http::HttpCatalog;
pub use snapshot::Catalog;
pub use traits::CatalogSource;

use crate::error::Result;

/// Pick a source for `location`: HTTP for `http(s)://` URLs, a file otherwise.
pub fn open_source(location: &str) -> Result<Box<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCatalog::new(location)?))
    } else {
        Ok(Box::new(FileCatalog::new(location)))
    }
}
