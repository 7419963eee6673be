//! Canonical page routes and redirect decisions.

use once_cell::sync::Lazy;
use reqwest::Url;
use serde::Serialize;

use super::{Cycle, LegalDocType, Office, StateCode};

/// External viewer for scanned filing images.
pub const FILING_IMAGE_URL: &str = "http://docquery.fec.gov/cgi-bin/fecimg/";

/// Base that relative route URLs are assembled against.
static BASE_URL: Lazy<Url> = Lazy::new(|| Url::parse("http://localhost/").expect("static base URL is valid"));

/// Outcome of resolving one request: exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum RedirectDecision<T> {
    /// Serve the canonical parameters in place.
    Direct(T),
    /// Send the client to another route.
    Redirect(Route),
}

impl<T> RedirectDecision<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RedirectDecision::Redirect(_))
    }

    /// Transforms the direct payload, leaving redirects untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RedirectDecision<U> {
        match self {
            RedirectDecision::Direct(value) => RedirectDecision::Direct(f(value)),
            RedirectDecision::Redirect(route) => RedirectDecision::Redirect(route),
        }
    }
}

/// A named page route with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    CandidatePage {
        candidate_id: String,
        cycle: i32,
        election_full: bool,
    },
    CommitteePage {
        committee_id: String,
        cycle: i32,
    },
    Elections {
        office: Office,
        state: Option<StateCode>,
        district: Option<String>,
        cycle: Cycle,
    },
    ElectionLookup {
        state: Option<String>,
        district: Option<String>,
    },
    LegalDocSearch {
        doc_type: LegalDocType,
        search: Option<String>,
    },
    FilingImage {
        image_number: String,
    },
}

impl Route {
    /// Stable route name, as used by the router.
    pub fn name(&self) -> &'static str {
        match self {
            Route::CandidatePage { .. } => "candidate_page",
            Route::CommitteePage { .. } => "committee_page",
            Route::Elections { .. } => "elections",
            Route::ElectionLookup { .. } => "election_lookup",
            Route::LegalDocSearch { doc_type, .. } => doc_type.result_type(),
            Route::FilingImage { .. } => "filing_image",
        }
    }

    /// URL of the route. Application routes are relative with a trailing slash.
    pub fn url(&self) -> String {
        match self {
            Route::CandidatePage {
                candidate_id,
                cycle,
                election_full,
            } => relative_url(
                &["candidate", candidate_id.as_str()],
                &[
                    ("cycle", cycle.to_string()),
                    ("election_full", election_full.to_string()),
                ],
            ),
            Route::CommitteePage {
                committee_id,
                cycle,
            } => relative_url(&["committee", committee_id.as_str()], &[("cycle", cycle.to_string())]),
            Route::Elections {
                office,
                state,
                district,
                cycle,
            } => {
                let cycle = cycle.to_string();
                let mut segments = vec!["elections", office.slug()];
                segments.extend(state.as_ref().map(StateCode::code));
                segments.extend(district.as_deref());
                segments.push(&cycle);
                relative_url(&segments, &[])
            }
            Route::ElectionLookup { state, district } => {
                let query: Vec<_> = [("state", state), ("district", district)]
                    .into_iter()
                    .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
                    .collect();
                relative_url(&["elections"], &query)
            }
            Route::LegalDocSearch { doc_type, search } => {
                let mut query = Vec::new();
                if let Some(search) = search {
                    query.push(("search", search.clone()));
                }
                query.push(("search_type", doc_type.result_type().to_string()));
                relative_url(&["legal", "search", doc_type.slug()], &query)
            }
            Route::FilingImage { image_number } => format!("{}?{}", FILING_IMAGE_URL, image_number),
        }
    }
}

/// Builds `/seg/seg/?k=v` with each segment and pair percent-encoded.
fn relative_url(segments: &[&str], query: &[(&str, String)]) -> String {
    let mut url = BASE_URL.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments).push("");
    }
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
