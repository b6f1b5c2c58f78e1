//! The beer record
//!
//! Field names on the wire are camelCase to match the public API contract.
//! `id`, `version`, `createdDate`, `lastModifiedDate` and `quantityOnHand`
//! are server-managed; clients never set them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::style::BeerStyle;

/// A stored beer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Unique identifier, assigned once at creation and never reused
    pub id: Uuid,

    /// Incremented on every update, starts at 1
    pub version: u64,

    /// Set at creation, immutable thereafter
    pub created_date: DateTime<Utc>,

    /// Bumped on every mutation; always >= `created_date`
    pub last_modified_date: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<BeerStyle>,

    /// Universal product code, required on create
    pub upc: u64,

    /// Unit price, required on create, never negative
    pub price: f64,

    /// Managed by inventory processing, not settable through the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_beer() -> Beer {
        let now = Utc::now();
        Beer {
            id: Uuid::new_v4(),
            version: 1,
            created_date: now,
            last_modified_date: now,
            beer_name: Some("Nice Ale".to_string()),
            beer_style: Some(BeerStyle::Ale),
            upc: 123_123_123_123,
            price: 9.99,
            quantity_on_hand: None,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_beer()).unwrap();
        assert!(json.get("createdDate").is_some());
        assert!(json.get("lastModifiedDate").is_some());
        assert_eq!(json["beerName"], "Nice Ale");
        assert_eq!(json["beerStyle"], "ALE");
        assert_eq!(json["upc"], 123_123_123_123u64);
        assert_eq!(json["price"], 9.99);
    }

    #[test]
    fn test_unset_optionals_are_absent() {
        let json = serde_json::to_value(sample_beer()).unwrap();
        assert!(json.get("quantityOnHand").is_none());
    }
}
