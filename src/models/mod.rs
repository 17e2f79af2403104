use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

/// Identity of a listing within a catalog snapshot.
///
/// Catalogs use either text ids (`"prop1"`) or plain numbers; the shape is
/// preserved when a listing is written back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{}", n),
            ListingId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        ListingId::Text(value.to_string())
    }
}

impl From<String> for ListingId {
    fn from(value: String) -> Self {
        ListingId::Text(value)
    }
}

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        ListingId::Number(value)
    }
}

impl ListingId {
    /// Parse an id typed by a user. All-digit input becomes a numeric id.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => ListingId::Number(n),
            Err(_) => ListingId::Text(trimmed.to_string()),
        }
    }

    /// Loose equality used when matching user input against catalog ids:
    /// `7` and `"7"` refer to the same listing.
    pub fn same_as(&self, other: &ListingId) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

/// Map position of a property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One property record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u64,
    pub bedrooms: u32,
    #[serde(deserialize_with = "deserialize_added")]
    pub added: NaiveDate,
    #[serde(default)]
    pub postcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub pictures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Top-level shape of a catalog document: `{ "properties": [...] }`
///
/// Records are kept as raw JSON until [`CatalogDocument::into_listings`] so a
/// single bad record cannot fail the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub properties: Vec<serde_json::Value>,
}

impl CatalogDocument {
    /// Decode each record, skipping the ones that are not valid listings.
    pub fn into_listings(self) -> Vec<Listing> {
        self.properties
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| match serde_json::from_value::<Listing>(record) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!("Skipping catalog record {}: {}", idx, e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AddedRepr {
    Iso(String),
    Parts { month: MonthRepr, day: u32, year: i32 },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MonthRepr {
    Number(u32),
    Name(String),
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn month_number(month: &MonthRepr) -> Option<u32> {
    match month {
        MonthRepr::Number(n) => Some(*n),
        MonthRepr::Name(name) => {
            let name = name.trim().to_lowercase();
            if name.len() < 3 {
                return None;
            }
            MONTHS
                .iter()
                .position(|m| m.starts_with(&name))
                .map(|idx| idx as u32 + 1)
        }
    }
}

/// Accepts `"2023-01-15"` or `{ "month": "January", "day": 15, "year": 2023 }`.
fn deserialize_added<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match AddedRepr::deserialize(deserializer)? {
        AddedRepr::Iso(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("invalid added date {:?}: {}", text, e))),
        AddedRepr::Parts { month, day, year } => {
            let month = month_number(&month)
                .ok_or_else(|| D::Error::custom("invalid month in added date"))?;
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| D::Error::custom("added date out of range"))
        }
    }
}
