//! Adapters - Implementations of port interfaces.
//!
//! - `api` - reqwest client for the campaign finance data API
//! - `http` - axum routes for the public pages

pub mod api;
pub mod http;

pub use api::{FecApiClient, FecApiConfig};
pub use http::{pages_router, PagesAppState};
