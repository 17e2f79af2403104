use super::slot::PersistenceSlot;
use crate::error::{Error, Result};
use std::cell::RefCell;

/// In-memory slot for tests and for sessions without a writable data dir.
///
/// `RefCell` is enough here since the favourites store is single-threaded.
#[derive(Default)]
pub struct MemorySlot {
    key: String,
    value: RefCell<Option<String>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Slot pre-filled with `value`, as if a previous session wrote it.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new(key);
        *slot.value.borrow_mut() = Some(value.into());
        slot
    }

    /// Current raw content.
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl PersistenceSlot for MemorySlot {
    fn name(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(Error::Slot("Simulated read error".to_string()));
        }
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(Error::Slot("Simulated write error".to_string()));
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
