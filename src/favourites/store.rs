use super::slot::PersistenceSlot;
use crate::models::{Listing, ListingId};
use tracing::{debug, info, warn};

/// The user's shortlist: listings unique by id, kept in insertion order.
///
/// The store reads its slot exactly once, in [`FavouritesStore::load`], and
/// writes the whole set back after every mutation. Slot failures never reach
/// the caller; the store carries on in memory for the rest of the session.
pub struct FavouritesStore<S: PersistenceSlot> {
    slot: S,
    favourites: Vec<Listing>,
}

impl<S: PersistenceSlot> FavouritesStore<S> {
    /// Load favourites from `slot`. Absent, unreadable or corrupt content
    /// yields an empty set.
    pub fn load(slot: S) -> Self {
        let favourites = match slot.read() {
            Ok(Some(content)) => match serde_json::from_str::<Vec<Listing>>(&content) {
                Ok(listings) => dedup_by_id(listings),
                Err(e) => {
                    warn!("Ignoring corrupt favourites in slot '{}': {}", slot.name(), e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("Slot '{}' is empty, starting with no favourites", slot.name());
                Vec::new()
            }
            Err(e) => {
                warn!("Could not read slot '{}': {}", slot.name(), e);
                Vec::new()
            }
        };

        info!("Loaded {} favourites from '{}'", favourites.len(), slot.name());
        Self { slot, favourites }
    }

    /// Append `listing` unless a favourite with the same id exists.
    /// Returns true when it was inserted. An existing record is never replaced.
    pub fn add(&mut self, listing: Listing) -> bool {
        let inserted = if self.contains(&listing.id) {
            debug!("Listing {} is already a favourite", listing.id);
            false
        } else {
            debug!("Adding listing {} to favourites", listing.id);
            self.favourites.push(listing);
            true
        };
        self.persist();
        inserted
    }

    /// Remove the favourite with `id`. Returns true when one was removed.
    pub fn remove(&mut self, id: &ListingId) -> bool {
        let before = self.favourites.len();
        self.favourites.retain(|fav| fav.id != *id);
        let removed = self.favourites.len() != before;
        if removed {
            debug!("Removed listing {} from favourites", id);
        }
        self.persist();
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} favourites", self.favourites.len());
        self.favourites.clear();
        self.persist();
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.favourites.iter().any(|fav| fav.id == *id)
    }

    /// Current favourites in insertion order.
    pub fn all(&self) -> &[Listing] {
        &self.favourites
    }

    pub fn len(&self) -> usize {
        self.favourites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favourites.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    fn persist(&self) {
        let content = match serde_json::to_string(&self.favourites) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not serialize favourites: {}", e);
                return;
            }
        };
        if let Err(e) = self.slot.write(&content) {
            warn!(
                "Could not save favourites to '{}', keeping them in memory only: {}",
                self.slot.name(),
                e
            );
        }
    }
}

fn dedup_by_id(listings: Vec<Listing>) -> Vec<Listing> {
    let mut unique: Vec<Listing> = Vec::with_capacity(listings.len());
    for listing in listings {
        if !unique.iter().any(|kept| kept.id == listing.id) {
            unique.push(listing);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favourites::MemorySlot;
    use chrono::NaiveDate;

    fn listing(id: &str, kind: &str) -> Listing {
        Listing {
            id: ListingId::from(id),
            kind: kind.to_string(),
            price: 100_000,
            bedrooms: 2,
            added: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            postcode: "BR1".to_string(),
            tenure: None,
            description: String::new(),
            location: String::new(),
            picture: None,
            pictures: Vec::new(),
            url: None,
            coordinates: None,
        }
    }

    fn empty_store() -> FavouritesStore<MemorySlot> {
        FavouritesStore::load(MemorySlot::new("propertyFavourites"))
    }

    #[test]
    fn add_twice_keeps_one() {
        let mut store = empty_store();
        assert!(store.add(listing("prop1", "House")));
        assert!(!store.add(listing("prop1", "House")));
        assert_eq!(store.len(), 1);
        assert!(store.contains(&ListingId::from("prop1")));
    }

    #[test]
    fn duplicate_id_keeps_first_record() {
        let mut store = empty_store();
        store.add(listing("prop1", "House"));
        store.add(listing("prop1", "Flat"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].kind, "House");
    }

    #[test]
    fn remove_leaves_the_rest() {
        let mut store = empty_store();
        store.add(listing("a", "House"));
        store.add(listing("b", "Flat"));

        assert!(store.remove(&ListingId::from("a")));
        let ids: Vec<_> = store.all().iter().map(|l| l.id.to_string()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn remove_and_clear_on_empty_are_noops() {
        let mut store = empty_store();
        assert!(!store.remove(&ListingId::from("missing")));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn every_mutation_writes_the_slot() {
        let mut store = empty_store();
        store.add(listing("a", "House"));
        assert_eq!(
            store.slot().value().unwrap(),
            serde_json::to_string(store.all()).unwrap()
        );
        store.clear();
        assert_eq!(store.slot().value().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_slot_starts_empty() {
        let store = FavouritesStore::load(MemorySlot::with_value("k", "{not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn read_failure_starts_empty() {
        let slot = MemorySlot::with_value("k", "[]");
        slot.set_simulate_read_error(true);
        let store = FavouritesStore::load(slot);
        assert!(store.is_empty());
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let mut store = empty_store();
        store.slot().set_simulate_write_error(true);

        assert!(store.add(listing("a", "House")));
        assert!(store.contains(&ListingId::from("a")));
        assert_eq!(store.slot().value(), None);
    }

    #[test]
    fn duplicates_in_slot_are_collapsed() {
        let content = serde_json::to_string(&vec![listing("a", "House"), listing("a", "Flat")]).unwrap();
        let store = FavouritesStore::load(MemorySlot::with_value("k", content));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].kind, "House");
    }
}
