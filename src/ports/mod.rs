//! Ports - interfaces the application layer depends on.
//!
//! - `CampaignDataClient` - fetches candidates and committees from the data API

mod campaign_data;

pub use campaign_data::{CampaignDataClient, DataClientError, EntityType, NestedFetch, NestedRequest};
