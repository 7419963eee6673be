//! GetCandidatePageHandler - Query handler for the candidate detail page.
//!
//! Fetches the candidate with its committees, then settles which cycle the
//! page shows. Full-election views of off years redirect to the candidate's
//! next election year.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::PageError;
use crate::domain::election::{
    resolve_candidate_cycle, CandidateCycle, CandidateCycleContext, Office, RedirectDecision,
};
use crate::ports::{CampaignDataClient, EntityType, NestedFetch, NestedRequest};

/// Query for a candidate page.
#[derive(Debug, Clone)]
pub struct GetCandidatePageQuery {
    pub candidate_id: String,
    /// Requested cycle; the data API picks one when absent.
    pub cycle: Option<i32>,
    /// Show the whole election period rather than a single two-year cycle.
    pub election_full: bool,
}

/// Canonical candidate page view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePage {
    pub candidate_id: String,
    pub cycle: i32,
    pub election_full: bool,
    pub office: Option<Office>,
    /// Span of years covered, e.g. `2013–2018`.
    pub time_period: Option<String>,
    pub candidate: Value,
    pub committees: Vec<Value>,
}

impl CandidatePage {
    fn new(resolved: CandidateCycle, fetch: NestedFetch) -> Self {
        let office = fetch.text("office").and_then(Office::from_code);
        Self {
            time_period: office.map(|o| o.time_period(resolved.cycle, resolved.election_full)),
            office,
            candidate_id: resolved.candidate_id,
            cycle: resolved.cycle,
            election_full: resolved.election_full,
            candidate: fetch.entity,
            committees: fetch.nested,
        }
    }
}

/// Handler for candidate pages.
pub struct GetCandidatePageHandler {
    client: Arc<dyn CampaignDataClient>,
}

impl GetCandidatePageHandler {
    pub fn new(client: Arc<dyn CampaignDataClient>) -> Self {
        Self { client }
    }

    pub async fn handle(
        &self,
        query: GetCandidatePageQuery,
    ) -> Result<RedirectDecision<CandidatePage>, PageError> {
        let request = NestedRequest::new(EntityType::Candidate, query.candidate_id.clone(), "committees")
            .with_cycle(query.cycle)
            .with_cycle_key("two_year_period")
            .with_election_full(query.election_full);
        let fetch = self.client.fetch_with_nested(request).await?;

        let context = CandidateCycleContext {
            candidate_id: query.candidate_id,
            requested_cycle: query.cycle,
            known_election_years: fetch.years("election_years"),
            election_full: query.election_full,
        };
        let decision = resolve_candidate_cycle(&context, fetch.cycle);

        Ok(decision.map(|resolved| CandidatePage::new(resolved, fetch)))
    }
}
