//! The filter engine: raw search criteria, their coercion into typed
//! predicates, and the order-preserving filter over a listing slice.

pub mod coerce;
pub mod criteria;
pub mod filter;

pub use coerce::{text_to_optional_bound, text_to_optional_date, text_to_optional_term};
pub use criteria::{Criteria, Predicates, Range, ANY_TYPE};
pub use filter::filter;
