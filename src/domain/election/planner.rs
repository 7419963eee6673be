//! Redirect planner: turns ambiguous or legacy entry points into canonical
//! page requests.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use super::{
    Breakdown, BreakdownKind, Cycle, ElectionCalendar, LegalDocType, Office, RedirectDecision,
    ResolutionError, Route, StateCode, TopCategory, ALL_RESULT_TYPES,
};

/// District code the legacy lookup form sends for a Senate race.
pub const SENATE_DISTRICT_SENTINEL: &str = "S";

/// Minimum run of leading digits that marks a query as a filing image number.
const IMAGE_NUMBER_MIN_DIGITS: usize = 11;

/// Canonical parameters of an election page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionPage {
    pub office: Office,
    pub office_code: char,
    pub cycle: Cycle,
    /// Cycles offered in the cycle selector, in display order.
    pub cycles: Vec<Cycle>,
    pub state: Option<StateCode>,
    pub state_full: Option<&'static str>,
    pub district: Option<String>,
    pub title: String,
}

impl ElectionPage {
    /// The route this page is served at.
    pub fn route(&self) -> Route {
        Route::Elections {
            office: self.office,
            state: self.state,
            district: self.district.clone(),
            cycle: self.cycle,
        }
    }
}

/// The generic election lookup form, prefilled with whatever was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElectionLookup {
    pub state: Option<String>,
    pub district: Option<String>,
}

/// A search across every legal document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FederatedLegalSearch {
    pub query: Option<String>,
    /// False when there is nothing to search for.
    pub should_fetch: bool,
}

/// The top-level data page: landing content or entity search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SearchPage {
    Landing,
    Results { query: String },
}

/// Plans canonical page requests against the shared election calendar.
#[derive(Debug, Clone)]
pub struct RedirectPlanner {
    calendar: Arc<ElectionCalendar>,
    default_time_period: Cycle,
}

impl RedirectPlanner {
    /// `default_time_period` is the cycle legacy House district links and
    /// breakdown pages open on.
    pub fn new(calendar: Arc<ElectionCalendar>, default_time_period: Cycle) -> Self {
        Self {
            calendar,
            default_time_period,
        }
    }

    pub fn calendar(&self) -> &ElectionCalendar {
        &self.calendar
    }

    pub fn default_time_period(&self) -> Cycle {
        self.default_time_period
    }

    /// Validates and completes an election page request.
    ///
    /// Election pages are always served in place. The cycle selector lists
    /// presidential years for President, the state's class schedule for
    /// Senate, and every cycle for House.
    pub fn plan_election_page_request(
        &self,
        office: &str,
        state: Option<&str>,
        district: Option<&str>,
        cycle: Cycle,
    ) -> Result<ElectionPage, ResolutionError> {
        let office: Office = office.parse()?;
        let state = non_empty(state).map(|code| self.calendar.state(code)).transpose()?;

        let cycles = self.calendar.cycles_up_to(cycle);
        let (cycles, district) = match office {
            Office::President => (ElectionCalendar::presidential_cycles(&cycles), None),
            Office::Senate => {
                let state = state.ok_or_else(|| ResolutionError::not_found("senate race without a state"))?;
                (self.calendar.senate_cycles_for_state(state.code())?, None)
            }
            // a district only means something within a state
            Office::House => (cycles, state.and(non_empty(district)).map(str::to_string)),
        };

        Ok(ElectionPage {
            office,
            office_code: office.code(),
            cycle,
            cycles,
            state,
            state_full: state.map(|s| s.name()),
            title: election_title(cycle, office, state, district.as_deref()),
            district,
        })
    }

    /// Routes the legacy `/election-page/?state=..&district=..` form.
    ///
    /// A district of `S` means the state's next Senate race. Any other
    /// district opens the House race at the default time period. Without
    /// both values the lookup form is shown, prefilled.
    pub fn plan_legacy_election_lookup(
        &self,
        state: Option<&str>,
        district: Option<&str>,
    ) -> Result<RedirectDecision<ElectionLookup>, ResolutionError> {
        let (state, district) = match (non_empty(state), non_empty(district)) {
            (Some(state), Some(district)) => (state, district),
            (state, district) => {
                return Ok(RedirectDecision::Direct(ElectionLookup {
                    state: state.map(str::to_string),
                    district: district.map(str::to_string),
                }))
            }
        };

        let page = if district == SENATE_DISTRICT_SENTINEL {
            let cycle = self.calendar.next_senate_cycle(state)?;
            self.plan_election_page_request(Office::Senate.slug(), Some(state), None, cycle)?
        } else {
            self.plan_election_page_request(
                Office::House.slug(),
                Some(state),
                Some(district),
                self.default_time_period,
            )?
        };

        tracing::debug!(state, district, target = %page.route().url(), "Redirecting legacy election lookup");
        Ok(RedirectDecision::Redirect(page.route()))
    }

    /// Dispatches `/legal/search/`: a specific result type goes to its own
    /// search page, tagged with `search_type`; `all` runs a federated search.
    pub fn plan_legal_document_dispatch(
        &self,
        result_type: &str,
        query: Option<&str>,
    ) -> Result<RedirectDecision<FederatedLegalSearch>, ResolutionError> {
        let query = non_empty(query).map(str::to_string);
        if result_type == ALL_RESULT_TYPES {
            return Ok(RedirectDecision::Direct(FederatedLegalSearch {
                should_fetch: query.is_some(),
                query,
            }));
        }

        let doc_type: LegalDocType = result_type.parse()?;
        Ok(RedirectDecision::Redirect(Route::LegalDocSearch {
            doc_type,
            search: query,
        }))
    }

    /// Plans the top-level search box. Filing image numbers open the
    /// external image viewer.
    pub fn plan_search(&self, query: Option<&str>) -> RedirectDecision<SearchPage> {
        match non_empty(query) {
            None => RedirectDecision::Direct(SearchPage::Landing),
            Some(query) if is_image_number(query) => RedirectDecision::Redirect(Route::FilingImage {
                image_number: query.to_string(),
            }),
            Some(query) => RedirectDecision::Direct(SearchPage::Results {
                query: query.to_string(),
            }),
        }
    }

    /// Plans a raising or spending breakdown. The category defaults to
    /// presidential candidates and the cycle to the default time period.
    pub fn plan_breakdown(
        &self,
        kind: BreakdownKind,
        top_category: Option<&str>,
        cycle: Option<Cycle>,
        today: NaiveDate,
    ) -> Result<Breakdown, ResolutionError> {
        let top_category = non_empty(top_category)
            .map(str::parse::<TopCategory>)
            .transpose()?
            .unwrap_or_default();
        let cycle = cycle.unwrap_or(self.default_time_period);
        Ok(Breakdown::new(kind, top_category, cycle, today))
    }
}

/// Human-readable election title, e.g. `2018 Senate race in OH`.
pub fn election_title(
    cycle: Cycle,
    office: Office,
    state: Option<StateCode>,
    district: Option<&str>,
) -> String {
    match (office, state, district) {
        (Office::President, _, _) | (_, None, _) => format!("{} {}", cycle, office.display_name()),
        (_, Some(state), Some(district)) => {
            format!("{} {} race in {} district {}", cycle, office.display_name(), state, district)
        }
        (_, Some(state), None) => format!("{} {} race in {}", cycle, office.display_name(), state),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_image_number(query: &str) -> bool {
    query.chars().take_while(char::is_ascii_digit).count() >= IMAGE_NUMBER_MIN_DIGITS
}
