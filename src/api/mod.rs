//! # Beer API Module
//!
//! HTTP endpoints for the beer resource: get by id, create, update.

mod dto;
mod errors;
mod server;

pub use dto::BeerPayload;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::ApiServer;
