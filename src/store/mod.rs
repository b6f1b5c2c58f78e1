//! # Beer Store
//!
//! The resource store behind the `/api/v1/beer` endpoints: fetch by id,
//! insert with a server-generated id, update in place. Concrete backing
//! lives behind the [`BeerStore`] trait; [`MemoryBeerStore`] is the
//! in-memory implementation.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryBeerStore;

use uuid::Uuid;

use crate::domain::{Beer, BeerStyle};

/// The client-settable subset of a beer record
///
/// Everything else (`id`, `version`, timestamps, `quantity_on_hand`) is
/// server-managed; client-supplied values for those fields are ignored
/// before a draft is ever built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerDraft {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<u64>,
    pub price: Option<f64>,
}

impl BeerDraft {
    /// Check required fields and return the validated `(upc, price)` pair
    ///
    /// `upc` and `price` are mandatory; `price` must be non-negative. Name
    /// and style stay optional.
    pub fn validated(&self) -> StoreResult<(u64, f64)> {
        let upc = self.upc.ok_or(StoreError::MissingField("upc"))?;
        let price = self.price.ok_or(StoreError::MissingField("price"))?;
        if price < 0.0 {
            return Err(StoreError::NegativePrice(price));
        }
        Ok((upc, price))
    }
}

/// Store trait for beer records
///
/// Operations are synchronous and deterministic given store contents. The
/// implementation serializes concurrent read-modify-write on the same id.
pub trait BeerStore: Send + Sync {
    /// Fetch a record by id
    fn get_by_id(&self, id: Uuid) -> StoreResult<Beer>;

    /// Insert a new record
    ///
    /// Assigns a fresh id, sets `version = 1` and both timestamps to now,
    /// and returns the stored record. A draft that fails validation inserts
    /// nothing.
    fn create(&self, draft: BeerDraft) -> StoreResult<Beer>;

    /// Replace the mutable fields of an existing record
    ///
    /// Bumps `version` and `last_modified_date`; `id` and `created_date`
    /// are untouched. Returns no body on success.
    fn update_by_id(&self, id: Uuid, draft: BeerDraft) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_upc() {
        let draft = BeerDraft {
            price: Some(9.99),
            ..Default::default()
        };
        assert_eq!(draft.validated(), Err(StoreError::MissingField("upc")));
    }

    #[test]
    fn test_draft_requires_price() {
        let draft = BeerDraft {
            upc: Some(123),
            ..Default::default()
        };
        assert_eq!(draft.validated(), Err(StoreError::MissingField("price")));
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let draft = BeerDraft {
            upc: Some(123),
            price: Some(-0.01),
            ..Default::default()
        };
        assert_eq!(draft.validated(), Err(StoreError::NegativePrice(-0.01)));
    }

    #[test]
    fn test_draft_name_and_style_stay_optional() {
        let draft = BeerDraft {
            upc: Some(123_123_123_123),
            price: Some(9.99),
            ..Default::default()
        };
        assert_eq!(draft.validated(), Ok((123_123_123_123, 9.99)));
    }
}
