//! Property search over a static listing catalog, with a locally
//! persisted favourites shortlist.
//!
//! - [`search`]: the filter engine, `filter(listings, criteria)`
//! - [`favourites`]: the favourites store and its persistence slots
//! - [`catalog`]: read-once catalog sources and the session snapshot

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod favourites;
pub mod models;
pub mod search;

pub use error::{Error, Result};
pub use favourites::{FavouritesStore, FileSlot, MemorySlot, PersistenceSlot};
pub use models::{Listing, ListingId};
pub use search::{filter, Criteria};
