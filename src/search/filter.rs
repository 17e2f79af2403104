use super::criteria::{Criteria, Predicates};
use crate::models::Listing;
use tracing::debug;

/// Narrow `listings` to those satisfying every present clause of `criteria`.
///
/// The input is left untouched and survivors keep their relative order.
/// Empty or malformed fields never exclude anything: they disable their
/// clause. With no active clause the whole input is returned.
pub fn filter(listings: &[Listing], criteria: &Criteria) -> Vec<Listing> {
    let predicates = Predicates::from(criteria);

    if predicates.is_unconstrained() {
        debug!("No active filter clauses, returning all {} listings", listings.len());
        return listings.to_vec();
    }

    let filtered: Vec<Listing> = listings
        .iter()
        .filter(|listing| predicates.matches(listing))
        .cloned()
        .collect();

    debug!(
        "Filter kept {} of {} listings ({:?})",
        filtered.len(),
        listings.len(),
        predicates
    );
    filtered
}
