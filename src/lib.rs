//! taproom - A small, self-hostable beer catalog service
//!
//! A typed resource store behind the [`store::BeerStore`] trait, exposed
//! over HTTP at `/api/v1/beer`.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod observability;
pub mod store;
