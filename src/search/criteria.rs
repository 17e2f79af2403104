use super::coerce::{text_to_optional_bound, text_to_optional_date, text_to_optional_term};
use crate::models::Listing;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type value meaning "any property type"
pub const ANY_TYPE: &str = "any";

/// One search submission, as raw text mirroring the search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl Criteria {
    /// The form's reset state: type "any", every other field empty.
    pub fn any() -> Self {
        Self {
            kind: Some(ANY_TYPE.to_string()),
            ..Self::default()
        }
    }
}

/// Inclusive range with optional ends. A missing end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd> Range<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().map_or(true, |min| min <= value)
            && self.max.as_ref().map_or(true, |max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Coerced criteria, ready to test listings against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicates {
    /// Exact property type; `None` when the field is empty or "any"
    pub kind: Option<String>,
    pub price: Range<i64>,
    pub bedrooms: Range<i64>,
    pub added: Range<NaiveDate>,
    /// Lower-cased postcode fragment
    pub postcode: Option<String>,
}

fn coerce<T>(field: &Option<String>, f: fn(&str) -> Option<T>) -> Option<T> {
    field.as_deref().and_then(f)
}

impl From<&Criteria> for Predicates {
    fn from(criteria: &Criteria) -> Self {
        let kind = coerce(&criteria.kind, text_to_optional_term)
            .filter(|kind| !kind.eq_ignore_ascii_case(ANY_TYPE));

        Self {
            kind,
            price: Range {
                min: coerce(&criteria.min_price, text_to_optional_bound),
                max: coerce(&criteria.max_price, text_to_optional_bound),
            },
            bedrooms: Range {
                min: coerce(&criteria.min_bedrooms, text_to_optional_bound),
                max: coerce(&criteria.max_bedrooms, text_to_optional_bound),
            },
            added: Range {
                min: coerce(&criteria.date_from, text_to_optional_date),
                max: coerce(&criteria.date_to, text_to_optional_date),
            },
            postcode: coerce(&criteria.postcode, text_to_optional_term)
                .map(|term| term.to_lowercase()),
        }
    }
}

impl Predicates {
    /// True when no clause is active and every listing passes.
    pub fn is_unconstrained(&self) -> bool {
        self.kind.is_none()
            && self.price.is_unbounded()
            && self.bedrooms.is_unbounded()
            && self.added.is_unbounded()
            && self.postcode.is_none()
    }

    /// Conjunction of every active clause.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.kind.as_ref().map_or(true, |kind| listing.kind == *kind)
            && self.price.contains(&saturating_i64(listing.price))
            && self.bedrooms.contains(&i64::from(listing.bedrooms))
            && self.added.contains(&listing.added)
            && self
                .postcode
                .as_ref()
                .map_or(true, |term| listing.postcode.to_lowercase().contains(term.as_str()))
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
