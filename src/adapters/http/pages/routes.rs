//! HTTP routes for page endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    api, candidate_listing, candidate_page, committee_page, developers, election_lookup,
    election_page, legacy_election_lookup, legal_doc_search, legal_regulations, legal_search,
    raising, report_listing, search, spending, PagesAppState,
};

/// Creates the pages router with all routes.
pub fn pages_router(state: PagesAppState) -> Router {
    Router::new()
        .route("/", get(search))
        // Entity pages
        .route("/candidate/:candidate_id/", get(candidate_page))
        .route("/committee/:committee_id/", get(committee_page))
        // Elections
        .route("/elections/", get(election_lookup))
        .route("/elections/:office/*path", get(election_page))
        .route("/election-page/", get(legacy_election_lookup))
        // Legal resources
        .route("/legal/search/", get(legal_search))
        .route("/legal/search/:doc_type/", get(legal_doc_search))
        .route("/legal/regulations/", get(legal_regulations))
        // Browse
        .route("/raising/", get(raising))
        .route("/spending/", get(spending))
        .route("/reports/:form_type/", get(report_listing))
        .route("/candidates/:office/", get(candidate_listing))
        // Developer hub
        .route("/api/", get(api))
        .route("/developers/", get(developers))
        .with_state(state)
}
