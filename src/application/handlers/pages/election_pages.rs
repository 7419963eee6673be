//! ElectionPagesHandler - election pages and the legacy election lookup.

use std::sync::Arc;

use crate::domain::election::{
    Cycle, ElectionLookup, ElectionPage, RedirectDecision, RedirectPlanner, ResolutionError,
};

/// Election pages need no data fetch; they are planned from the calendar alone.
pub struct ElectionPagesHandler {
    planner: Arc<RedirectPlanner>,
}

impl ElectionPagesHandler {
    pub fn new(planner: Arc<RedirectPlanner>) -> Self {
        Self { planner }
    }

    /// `/elections/<office>/[<state>/[<district>/]]<cycle>/`
    pub fn election_page(
        &self,
        office: &str,
        state: Option<&str>,
        district: Option<&str>,
        cycle: Cycle,
    ) -> Result<RedirectDecision<ElectionPage>, ResolutionError> {
        self.planner
            .plan_election_page_request(office, state, district, cycle)
            .map(RedirectDecision::Direct)
    }

    /// `/election-page/?state=..&district=..`
    pub fn legacy_lookup(
        &self,
        state: Option<&str>,
        district: Option<&str>,
    ) -> Result<RedirectDecision<ElectionLookup>, ResolutionError> {
        self.planner.plan_legacy_election_lookup(state, district)
    }
}
