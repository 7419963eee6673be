//! GetCommitteePageHandler - Query handler for the committee detail page.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::PageError;
use crate::domain::election::{resolve_committee_cycle, CommitteeCycleContext, RedirectDecision};
use crate::ports::{CampaignDataClient, EntityType, NestedRequest};

/// Query for a committee page.
#[derive(Debug, Clone)]
pub struct GetCommitteePageQuery {
    pub committee_id: String,
    pub cycle: Option<i32>,
}

/// Canonical committee page view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitteePage {
    pub committee_id: String,
    pub cycle: i32,
    pub committee: Value,
    pub candidates: Vec<Value>,
}

/// Handler for committee pages.
///
/// Without an explicit cycle the page lands on the latest cycle the
/// committee reported in.
pub struct GetCommitteePageHandler {
    client: Arc<dyn CampaignDataClient>,
}

impl GetCommitteePageHandler {
    pub fn new(client: Arc<dyn CampaignDataClient>) -> Self {
        Self { client }
    }

    pub async fn handle(
        &self,
        query: GetCommitteePageQuery,
    ) -> Result<RedirectDecision<CommitteePage>, PageError> {
        let request = NestedRequest::new(EntityType::Committee, query.committee_id.clone(), "candidates")
            .with_cycle(query.cycle);
        let fetch = self.client.fetch_with_nested(request).await?;

        let context = CommitteeCycleContext {
            committee_id: query.committee_id,
            requested_cycle: query.cycle,
            resolved_cycle: fetch.cycle,
            cycles_with_reports: fetch.years("cycles_has_financial"),
        };

        Ok(resolve_committee_cycle(&context).map(|resolved| CommitteePage {
            committee_id: resolved.committee_id,
            cycle: resolved.cycle,
            committee: fetch.entity,
            candidates: fetch.nested,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::election::Route;
    use crate::ports::{DataClientError, NestedFetch};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockCampaignDataClient {
        default_cycle: i32,
        cycles_has_financial: Vec<i32>,
    }

    #[async_trait]
    impl CampaignDataClient for MockCampaignDataClient {
        async fn fetch_with_nested(
            &self,
            request: NestedRequest,
        ) -> Result<NestedFetch, DataClientError> {
            assert_eq!(request.entity_type, EntityType::Committee);
            Ok(NestedFetch {
                entity: json!({
                    "committee_id": request.id,
                    "cycles_has_financial": self.cycles_has_financial,
                }),
                nested: vec![],
                cycle: request.cycle.unwrap_or(self.default_cycle),
            })
        }
    }

    fn handler(default_cycle: i32, cycles_has_financial: Vec<i32>) -> GetCommitteePageHandler {
        GetCommitteePageHandler::new(Arc::new(MockCampaignDataClient {
            default_cycle,
            cycles_has_financial,
        }))
    }

    fn query(cycle: Option<i32>) -> GetCommitteePageQuery {
        GetCommitteePageQuery {
            committee_id: "C00431445".to_string(),
            cycle,
        }
    }

    #[tokio::test]
    async fn test_explicit_cycle_renders_directly() {
        let decision = handler(2020, vec![2012]).handle(query(Some(2008))).await.unwrap();
        assert!(matches!(decision, RedirectDecision::Direct(CommitteePage { cycle: 2008, .. })));
    }

    #[tokio::test]
    async fn test_default_cycle_with_reports_renders_directly() {
        let decision = handler(2020, vec![2018, 2020]).handle(query(None)).await.unwrap();
        assert!(matches!(decision, RedirectDecision::Direct(CommitteePage { cycle: 2020, .. })));
    }

    #[tokio::test]
    async fn test_default_cycle_without_reports_redirects_to_previous() {
        let decision = handler(2020, vec![2012, 2014]).handle(query(None)).await.unwrap();
        assert_eq!(
            decision,
            RedirectDecision::Redirect(Route::CommitteePage {
                committee_id: "C00431445".to_string(),
                cycle: 2014,
            })
        );
    }
}
