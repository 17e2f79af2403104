#![allow(dead_code)]

use chrono::NaiveDate;
use property_search::{Listing, ListingId};

pub fn listing(id: &str) -> Listing {
    Listing {
        id: ListingId::from(id),
        kind: "House".to_string(),
        price: 300_000,
        bedrooms: 3,
        added: date("2023-01-15"),
        postcode: "BR1".to_string(),
        tenure: Some("Freehold".to_string()),
        description: format!("Listing {}", id),
        location: "London".to_string(),
        picture: None,
        pictures: vec![format!("{}.jpg", id)],
        url: None,
        coordinates: None,
    }
}

pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// The three-listing catalog used across the search scenarios.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            kind: "House".to_string(),
            price: 750_000,
            bedrooms: 3,
            added: date("2023-01-15"),
            postcode: "BR1".to_string(),
            ..listing("prop1")
        },
        Listing {
            kind: "Flat".to_string(),
            price: 399_995,
            bedrooms: 2,
            added: date("2023-02-20"),
            postcode: "NW1".to_string(),
            ..listing("prop2")
        },
        Listing {
            kind: "House".to_string(),
            price: 1_200_000,
            bedrooms: 4,
            added: date("2023-03-10"),
            postcode: "WC1".to_string(),
            ..listing("prop3")
        },
    ]
}

pub fn ids(listings: &[Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

pub const CATALOG_JSON: &str = r#"{
  "properties": [
    {
      "id": "prop1",
      "type": "House",
      "bedrooms": 3,
      "price": 750000,
      "description": "Beautiful 3 bedroom house",
      "location": "London BR1",
      "postcode": "BR1",
      "pictures": ["img1.jpg"],
      "added": "2023-01-15",
      "tenure": "Freehold",
      "coordinates": { "lat": 51.5, "lng": -0.1 }
    },
    {
      "id": "prop2",
      "type": "Flat",
      "bedrooms": 2,
      "price": 399995,
      "description": "Modern 2 bedroom flat",
      "location": "London NW1",
      "postcode": "NW1",
      "pictures": ["img2.jpg"],
      "added": { "month": "February", "day": 20, "year": 2023 },
      "tenure": "Leasehold"
    },
    {
      "id": "prop3",
      "type": "House",
      "bedrooms": 4,
      "price": 1200000,
      "location": "London WC1",
      "postcode": "WC1",
      "added": "2023-03-10"
    }
  ]
}"#;
