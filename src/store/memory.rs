//! In-memory beer store
//!
//! A single `RwLock` over the record map serializes read-modify-write on
//! the same id. Suitable for tests and single-node deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::Beer;

use super::errors::{StoreError, StoreResult};
use super::{BeerDraft, BeerStore};

/// In-memory implementation of [`BeerStore`]
#[derive(Default)]
pub struct MemoryBeerStore {
    records: RwLock<HashMap<Uuid, Beer>>,
}

impl MemoryBeerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BeerStore for MemoryBeerStore {
    fn get_by_id(&self, id: Uuid) -> StoreResult<Beer> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        records.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn create(&self, draft: BeerDraft) -> StoreResult<Beer> {
        let (upc, price) = draft.validated()?;

        let now = Utc::now();
        let beer = Beer {
            id: Uuid::new_v4(),
            version: 1,
            created_date: now,
            last_modified_date: now,
            beer_name: draft.beer_name,
            beer_style: draft.beer_style,
            upc,
            price,
            quantity_on_hand: None,
        };

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        records.insert(beer.id, beer.clone());
        Ok(beer)
    }

    fn update_by_id(&self, id: Uuid, draft: BeerDraft) -> StoreResult<()> {
        let (upc, price) = draft.validated()?;

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let beer = records.get_mut(&id).ok_or(StoreError::NotFound)?;

        beer.beer_name = draft.beer_name;
        beer.beer_style = draft.beer_style;
        beer.upc = upc;
        beer.price = price;
        beer.version += 1;
        beer.last_modified_date = Utc::now();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BeerStyle;

    fn valid_draft() -> BeerDraft {
        BeerDraft {
            beer_name: Some("Nice Ale".to_string()),
            beer_style: Some(BeerStyle::Ale),
            upc: Some(123_123_123_123),
            price: Some(9.99),
        }
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let store = MemoryBeerStore::new();

        let created = store.create(valid_draft()).unwrap();
        assert_eq!(created.version, 1);
        assert_eq!(created.beer_name.as_deref(), Some("Nice Ale"));
        assert_eq!(created.beer_style, Some(BeerStyle::Ale));
        assert_eq!(created.upc, 123_123_123_123);
        assert_eq!(created.price, 9.99);
        assert_eq!(created.quantity_on_hand, None);
        assert_eq!(created.created_date, created.last_modified_date);

        let fetched = store.get_by_id(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let store = MemoryBeerStore::new();
        let a = store.create(valid_draft()).unwrap();
        let b = store.create(valid_draft()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = MemoryBeerStore::new();
        assert_eq!(store.get_by_id(Uuid::new_v4()), Err(StoreError::NotFound));
    }

    #[test]
    fn test_update_replaces_mutable_fields_only() {
        let store = MemoryBeerStore::new();
        let created = store.create(valid_draft()).unwrap();

        let update = BeerDraft {
            beer_name: Some("Vanilla Porter".to_string()),
            beer_style: Some(BeerStyle::Porter),
            upc: Some(456_456_456_456),
            price: Some(12.50),
        };
        store.update_by_id(created.id, update).unwrap();

        let fetched = store.get_by_id(created.id).unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.created_date, created.created_date);
        assert_eq!(fetched.beer_name.as_deref(), Some("Vanilla Porter"));
        assert_eq!(fetched.beer_style, Some(BeerStyle::Porter));
        assert_eq!(fetched.upc, 456_456_456_456);
        assert_eq!(fetched.price, 12.50);
        assert_eq!(fetched.version, 2);
        assert!(fetched.last_modified_date >= created.last_modified_date);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let store = MemoryBeerStore::new();
        let created = store.create(valid_draft()).unwrap();

        let result = store.update_by_id(Uuid::new_v4(), valid_draft());
        assert_eq!(result, Err(StoreError::NotFound));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(created.id).unwrap(), created);
    }

    #[test]
    fn test_invalid_create_inserts_nothing() {
        let store = MemoryBeerStore::new();

        let missing_upc = BeerDraft {
            price: Some(9.99),
            ..Default::default()
        };
        assert_eq!(
            store.create(missing_upc),
            Err(StoreError::MissingField("upc"))
        );

        let missing_price = BeerDraft {
            upc: Some(123),
            ..Default::default()
        };
        assert_eq!(
            store.create(missing_price),
            Err(StoreError::MissingField("price"))
        );

        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_update_leaves_record_unchanged() {
        let store = MemoryBeerStore::new();
        let created = store.create(valid_draft()).unwrap();

        let missing_price = BeerDraft {
            upc: Some(123),
            ..Default::default()
        };
        assert_eq!(
            store.update_by_id(created.id, missing_price),
            Err(StoreError::MissingField("price"))
        );

        assert_eq!(store.get_by_id(created.id).unwrap(), created);
    }
}
