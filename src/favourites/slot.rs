use crate::error::Result;

/// Default key the favourites are stored under
pub const DEFAULT_SLOT_KEY: &str = "propertyFavourites";

/// A single named key/value cell that survives between sessions.
///
/// The store only ever reads the whole value once and overwrites the whole
/// value on change, so this is all the interface it needs.
pub trait PersistenceSlot {
    /// Key this slot is stored under.
    fn name(&self) -> &str;

    /// Read the stored value.
    /// Returns Ok(None) when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored value.
    fn write(&self, value: &str) -> Result<()>;
}
