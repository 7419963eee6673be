//! Data API adapters.

mod fec_api_client;

pub use fec_api_client::{FecApiClient, FecApiConfig};
