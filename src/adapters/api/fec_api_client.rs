//! HTTP adapter for the campaign finance data API.
//!
//! Implements [`CampaignDataClient`] with two GETs: one for the entity record,
//! and one for its nested collection filtered to a single cycle.
//!
//! ```text
//! GET {location}/{version}/{entity}/{id}/?api_key=..
//! GET {location}/{version}/{entity}/{id}/{nested}/?api_key=..&{cycle_key}=..&per_page=100
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::ports::{CampaignDataClient, DataClientError, NestedFetch, NestedRequest};

/// Nested collections are small; one page covers them.
const NESTED_PER_PAGE: &str = "100";

/// Configuration for the data API adapter.
#[derive(Debug, Clone)]
pub struct FecApiConfig {
    /// API origin, e.g. `https://api.open.fec.gov`.
    pub location: String,
    /// Version path segment, e.g. `v1`.
    pub version: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl FecApiConfig {
    pub fn new(location: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            location: location.into(),
            version: "v1".to_string(),
            api_key,
            timeout: Duration::from_secs(10),
        }
    }

    /// Builds `{location}/{version}/{segments..}/`.
    ///
    /// Each segment is percent-encoded as a single path segment, so an id can
    /// never reach another endpoint on the API host.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DataClientError> {
        if let Some(segment) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
            return Err(DataClientError::NotFound(format!("'{}'", segment)));
        }

        let mut url = Url::parse(&self.location)
            .map_err(|e| DataClientError::Unavailable(format!("invalid API location: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DataClientError::Unavailable(format!("invalid API location: {}", self.location)))?
            .pop_if_empty()
            .push(self.version.trim_matches('/'))
            .extend(segments)
            .push("");
        Ok(url)
    }
}

impl From<&ApiConfig> for FecApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            location: config.location.clone(),
            version: config.version.clone(),
            api_key: config.key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// `reqwest`-backed data API client.
pub struct FecApiClient {
    config: FecApiConfig,
    http_client: reqwest::Client,
}

impl FecApiClient {
    pub fn new(config: FecApiConfig) -> Result<Self, DataClientError> {
        let http_client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    async fn get_json(&self, url: Url, query: &[(&str, String)]) -> Result<Value, DataClientError> {
        tracing::debug!(url = %url, "Fetching from data API");

        let response = self
            .http_client
            .get(url.clone())
            .query(&[("api_key", self.config.api_key.expose_secret().as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Data API request failed");
                DataClientError::from(e)
            })?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(DataClientError::NotFound(url.to_string())),
            status => {
                tracing::warn!(url = %url, %status, "Data API returned error status");
                Err(DataClientError::Unavailable(format!("status {}", status)))
            }
        }
    }
}

#[async_trait]
impl CampaignDataClient for FecApiClient {
    async fn fetch_with_nested(&self, request: NestedRequest) -> Result<NestedFetch, DataClientError> {
        let entity_path = request.entity_type.path();

        let body = self
            .get_json(self.config.endpoint(&[entity_path, request.id.as_str()])?, &[])
            .await?;
        let entity = results(body)
            .into_iter()
            .next()
            .ok_or_else(|| DataClientError::NotFound(request.id.clone()))?;

        let cycle = match request.cycle {
            Some(cycle) => cycle,
            None => latest_cycle(&entity).ok_or_else(|| {
                DataClientError::InvalidResponse(format!("{} {} lists no cycles", entity_path, request.id))
            })?,
        };

        let mut query = vec![
            (request.cycle_key, cycle.to_string()),
            ("per_page", NESTED_PER_PAGE.to_string()),
        ];
        if let Some(election_full) = request.election_full {
            query.push(("election_full", election_full.to_string()));
        }

        let nested_url = self
            .config
            .endpoint(&[entity_path, request.id.as_str(), request.nested_type])?;
        let nested = results(self.get_json(nested_url, &query).await?);

        Ok(NestedFetch {
            entity,
            nested,
            cycle,
        })
    }
}

/// The `results` array of an API envelope; anything else is empty.
fn results(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// The entity's most recent two-year cycle.
fn latest_cycle(entity: &Value) -> Option<i32> {
    entity
        .get("cycles")?
        .as_array()?
        .iter()
        .filter_map(Value::as_i64)
        .filter_map(|cycle| i32::try_from(cycle).ok())
        .max()
}
