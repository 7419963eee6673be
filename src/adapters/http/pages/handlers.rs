//! HTTP handlers for page endpoints.
//!
//! These handlers connect Axum routes to the page handlers in the application
//! layer. A direct decision is answered with its JSON view model; a redirect
//! with `302 Found`.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use crate::application::handlers::pages::{
    BrowseHandler, ElectionPagesHandler, GetCandidatePageHandler, GetCandidatePageQuery,
    GetCommitteePageHandler, GetCommitteePageQuery, LegalSearchHandler, PageError,
};
use crate::config::ApiConfig;
use crate::domain::election::{
    BreakdownKind, Cycle, ElectionLookup, LegalDocType, RedirectDecision, RedirectPlanner,
    ResolutionError, Route,
};
use crate::domain::foundation::ValidationError;
use crate::ports::{CampaignDataClient, DataClientError};

use super::dto::{
    BreakdownParams, CandidatePageParams, CommitteePageParams, ElectionLookupParams, ErrorResponse,
    LegalDocSearchParams, LegalSearchParams, SearchParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Page API error that implements IntoResponse.
#[derive(Debug)]
pub enum PagesApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
}

impl IntoResponse for PagesApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            PagesApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            PagesApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            PagesApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg)),
        };
        (status, Json(error)).into_response()
    }
}

impl From<ResolutionError> for PagesApiError {
    fn from(error: ResolutionError) -> Self {
        PagesApiError::NotFound(error.to_string())
    }
}

impl From<DataClientError> for PagesApiError {
    fn from(error: DataClientError) -> Self {
        match error {
            DataClientError::NotFound(_) => PagesApiError::NotFound(error.to_string()),
            DataClientError::Unavailable(_) | DataClientError::InvalidResponse(_) => {
                tracing::warn!(error = %error, "Data API request failed");
                PagesApiError::BadGateway(error.to_string())
            }
        }
    }
}

impl From<PageError> for PagesApiError {
    fn from(error: PageError) -> Self {
        match error {
            PageError::Resolution(e) => e.into(),
            PageError::Data(e) => e.into(),
        }
    }
}

impl From<ValidationError> for PagesApiError {
    fn from(error: ValidationError) -> Self {
        PagesApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing page dependencies.
#[derive(Clone)]
pub struct PagesAppState {
    pub planner: Arc<RedirectPlanner>,
    pub data_client: Arc<dyn CampaignDataClient>,
    /// Target of the `/api/` redirect.
    pub api_location: String,
    /// Target of the `/developers/` redirect.
    pub developers_url: String,
}

impl PagesAppState {
    pub fn new(planner: Arc<RedirectPlanner>, data_client: Arc<dyn CampaignDataClient>, api: &ApiConfig) -> Self {
        Self {
            planner,
            data_client,
            api_location: api.location.clone(),
            developers_url: api.developers_url(),
        }
    }

    pub fn candidate_page_handler(&self) -> GetCandidatePageHandler {
        GetCandidatePageHandler::new(self.data_client.clone())
    }

    pub fn committee_page_handler(&self) -> GetCommitteePageHandler {
        GetCommitteePageHandler::new(self.data_client.clone())
    }

    pub fn election_pages_handler(&self) -> ElectionPagesHandler {
        ElectionPagesHandler::new(self.planner.clone())
    }

    pub fn legal_search_handler(&self) -> LegalSearchHandler {
        LegalSearchHandler::new(self.planner.clone())
    }

    pub fn browse_handler(&self) -> BrowseHandler {
        BrowseHandler::new(self.planner.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// `302 Found` to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn respond<T: Serialize>(decision: RedirectDecision<T>) -> Response {
    match decision {
        RedirectDecision::Direct(view) => Json(view).into_response(),
        RedirectDecision::Redirect(route) => redirect_to(&route),
    }
}

fn redirect_to(route: &Route) -> Response {
    let location = route.url();
    tracing::debug!(route = route.name(), location = %location, "Redirecting");
    found(location)
}

// ════════════════════════════════════════════════════════════════════════════════
// Entity Pages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /candidate/:candidate_id/
pub async fn candidate_page(
    State(state): State<PagesAppState>,
    Path(candidate_id): Path<String>,
    Query(params): Query<CandidatePageParams>,
) -> Result<Response, PagesApiError> {
    let query = GetCandidatePageQuery {
        candidate_id,
        cycle: params.cycle,
        election_full: params.election_full,
    };
    let decision = state.candidate_page_handler().handle(query).await?;
    Ok(respond(decision))
}

/// GET /committee/:committee_id/
pub async fn committee_page(
    State(state): State<PagesAppState>,
    Path(committee_id): Path<String>,
    Query(params): Query<CommitteePageParams>,
) -> Result<Response, PagesApiError> {
    let query = GetCommitteePageQuery {
        committee_id,
        cycle: params.cycle,
    };
    let decision = state.committee_page_handler().handle(query).await?;
    Ok(respond(decision))
}

// ════════════════════════════════════════════════════════════════════════════════
// Election Pages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /elections/:office/[:state/[:district/]]:cycle/
///
/// One catch-all route covers the three path shapes.
pub async fn election_page(
    State(state): State<PagesAppState>,
    Path((office, path)): Path<(String, String)>,
) -> Result<Response, PagesApiError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (state_code, district, cycle) = match segments.as_slice() {
        [cycle] => (None, None, *cycle),
        [state_code, cycle] => (Some(*state_code), None, *cycle),
        [state_code, district, cycle] => (Some(*state_code), Some(*district), *cycle),
        _ => return Err(PagesApiError::NotFound(format!("election page '{}'", path))),
    };
    let cycle: i32 = cycle
        .parse()
        .map_err(|_| PagesApiError::BadRequest(format!("Invalid cycle '{}'", cycle)))?;
    let cycle = Cycle::try_from(cycle)?;

    let decision = state
        .election_pages_handler()
        .election_page(&office, state_code, district, cycle)?;
    Ok(respond(decision))
}

/// GET /elections/
///
/// The election lookup form, prefilled from the query.
pub async fn election_lookup(Query(params): Query<ElectionLookupParams>) -> Json<ElectionLookup> {
    let prefill = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    Json(ElectionLookup {
        state: prefill(params.state),
        district: prefill(params.district),
    })
}

/// GET /election-page/
pub async fn legacy_election_lookup(
    State(state): State<PagesAppState>,
    Query(params): Query<ElectionLookupParams>,
) -> Result<Response, PagesApiError> {
    let decision = state
        .election_pages_handler()
        .legacy_lookup(params.state.as_deref(), params.district.as_deref())?;
    Ok(respond(decision))
}

// ════════════════════════════════════════════════════════════════════════════════
// Legal Search
// ════════════════════════════════════════════════════════════════════════════════

/// GET /legal/search/
pub async fn legal_search(
    State(state): State<PagesAppState>,
    Query(params): Query<LegalSearchParams>,
) -> Result<Response, PagesApiError> {
    let decision = state
        .legal_search_handler()
        .dispatch(&params.search_type, params.search.as_deref())?;
    Ok(respond(decision))
}

/// GET /legal/search/:doc_type/
pub async fn legal_doc_search(
    State(state): State<PagesAppState>,
    Path(doc_type): Path<String>,
    Query(params): Query<LegalDocSearchParams>,
) -> Result<Response, PagesApiError> {
    let search = state
        .legal_search_handler()
        .document_search(&doc_type, params.search.as_deref())?;
    Ok(Json(search).into_response())
}

/// GET /legal/regulations/
pub async fn legal_regulations() -> Response {
    redirect_to(&Route::LegalDocSearch {
        doc_type: LegalDocType::Regulations,
        search: None,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Browse Pages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
pub async fn search(State(state): State<PagesAppState>, Query(params): Query<SearchParams>) -> Response {
    respond(state.browse_handler().search(params.search.as_deref()))
}

/// GET /raising/
pub async fn raising(
    State(state): State<PagesAppState>,
    Query(params): Query<BreakdownParams>,
) -> Result<Response, PagesApiError> {
    breakdown(&state, BreakdownKind::Raising, params)
}

/// GET /spending/
pub async fn spending(
    State(state): State<PagesAppState>,
    Query(params): Query<BreakdownParams>,
) -> Result<Response, PagesApiError> {
    breakdown(&state, BreakdownKind::Spending, params)
}

fn breakdown(state: &PagesAppState, kind: BreakdownKind, params: BreakdownParams) -> Result<Response, PagesApiError> {
    let cycle = params.cycle.map(Cycle::try_from).transpose()?;
    let today = chrono::Local::now().date_naive();
    let breakdown = state
        .browse_handler()
        .breakdown(kind, params.top_category.as_deref(), cycle, today)?;
    Ok(Json(breakdown).into_response())
}

/// GET /reports/:form_type/
pub async fn report_listing(
    State(state): State<PagesAppState>,
    Path(form_type): Path<String>,
) -> Result<Response, PagesApiError> {
    let listing = state.browse_handler().report_listing(&form_type)?;
    Ok(Json(listing).into_response())
}

/// GET /candidates/:office/
pub async fn candidate_listing(
    State(state): State<PagesAppState>,
    Path(office): Path<String>,
) -> Result<Response, PagesApiError> {
    let listing = state.browse_handler().candidate_listing(&office)?;
    Ok(Json(listing).into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Developer Hub
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/
pub async fn api(State(state): State<PagesAppState>) -> Redirect {
    Redirect::permanent(&state.api_location)
}

/// GET /developers/
pub async fn developers(State(state): State<PagesAppState>) -> Redirect {
    Redirect::permanent(&state.developers_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_are_not_found() {
        let error: PagesApiError = ResolutionError::UnknownState("ZZ".to_string()).into();
        assert!(matches!(error, PagesApiError::NotFound(_)));
    }

    #[test]
    fn unavailable_data_api_is_bad_gateway() {
        let error: PagesApiError = PageError::Data(DataClientError::Unavailable("timeout".to_string())).into();
        assert!(matches!(error, PagesApiError::BadGateway(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn odd_cycle_is_bad_request() {
        let error: PagesApiError = Cycle::try_from(2015).unwrap_err().into();
        assert!(matches!(error, PagesApiError::BadRequest(_)));
    }

    #[test]
    fn found_sets_location() {
        let response = found("/elections/senate/OH/2024/".to_string());
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/elections/senate/OH/2024/");
    }
}
