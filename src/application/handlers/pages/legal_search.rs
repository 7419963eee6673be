//! LegalSearchHandler - legal document search dispatch.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::election::{
    FederatedLegalSearch, LegalDocType, RedirectDecision, RedirectPlanner, ResolutionError,
};

/// A search page for one legal document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalDocSearch {
    pub doc_type: LegalDocType,
    pub query: Option<String>,
    /// Whether the page should query the search API at all.
    pub should_fetch: bool,
}

pub struct LegalSearchHandler {
    planner: Arc<RedirectPlanner>,
}

impl LegalSearchHandler {
    pub fn new(planner: Arc<RedirectPlanner>) -> Self {
        Self { planner }
    }

    /// `/legal/search/?search=..&search_type=..`
    pub fn dispatch(
        &self,
        result_type: &str,
        query: Option<&str>,
    ) -> Result<RedirectDecision<FederatedLegalSearch>, ResolutionError> {
        self.planner.plan_legal_document_dispatch(result_type, query)
    }

    /// `/legal/search/<doc-type>/?search=..`
    pub fn document_search(&self, slug: &str, query: Option<&str>) -> Result<LegalDocSearch, ResolutionError> {
        let doc_type = LegalDocType::from_slug(slug)?;
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        Ok(LegalDocSearch {
            doc_type,
            should_fetch: doc_type.should_fetch(query),
            query: query.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::election::{Cycle, ElectionCalendar};
    use chrono::NaiveDate;

    fn handler() -> LegalSearchHandler {
        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        let calendar = Arc::new(ElectionCalendar::new(today, Cycle::new(1976).unwrap()));
        LegalSearchHandler::new(Arc::new(RedirectPlanner::new(calendar, Cycle::new(2016).unwrap())))
    }

    #[test]
    fn dispatch_to_specific_type_redirects() {
        let decision = handler().dispatch("advisory_opinions", Some("2016-01")).unwrap();
        assert!(decision.is_redirect());
    }

    #[test]
    fn enforcement_search_fetches_without_query() {
        let search = handler().document_search("enforcement", None).unwrap();
        assert_eq!(search.doc_type, LegalDocType::Murs);
        assert!(search.should_fetch);
    }

    #[test]
    fn statute_search_without_query_skips_fetch() {
        let search = handler().document_search("statutes", Some(" ")).unwrap();
        assert_eq!(search.query, None);
        assert!(!search.should_fetch);
    }

    #[test]
    fn unknown_collection_is_not_found() {
        assert!(handler().document_search("briefs", None).is_err());
    }
}
