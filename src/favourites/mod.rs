//! Locally persisted favourites.

pub mod file_slot;
pub mod mem_slot;
pub mod slot;
pub mod store;

pub use file_slot::FileSlot;
pub use mem_slot::MemorySlot;
pub use slot::{PersistenceSlot, DEFAULT_SLOT_KEY};
pub use store::FavouritesStore;
