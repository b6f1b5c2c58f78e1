//! # Request Payloads
//!
//! Wire shape of client-supplied beer data. Server-managed fields have no
//! place here; anything unknown in the body (including a client-supplied
//! `id` or `version`) is dropped during deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::BeerStyle;
use crate::store::BeerDraft;

/// Client payload for create and update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<BeerStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<BeerPayload> for BeerDraft {
    fn from(payload: BeerPayload) -> Self {
        BeerDraft {
            beer_name: payload.beer_name,
            beer_style: payload.beer_style,
            upc: payload.upc,
            price: payload.price,
        }
    }
}
