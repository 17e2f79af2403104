use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Slot error: {0}")]
    Slot(String),
}

pub type Result<T> = std::result::Result<T, Error>;
