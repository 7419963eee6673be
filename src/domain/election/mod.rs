//! Election calendar and canonical page resolution.
//!
//! # Module Organization
//!
//! - `calendar` - Which cycles exist, per office and state
//! - `resolver` - Canonical cycle for candidate and committee pages
//! - `planner` - Direct-or-redirect decisions for election, lookup, legal and search pages
//! - `route` - Named routes and the [`RedirectDecision`] result type
//!
//! Everything here is pure and synchronous. The calendar is built once and
//! passed in explicitly.

mod calendar;
mod cycle;
mod errors;
mod legal;
mod listing;
mod office;
mod planner;
mod resolver;
mod route;
mod state;

pub use calendar::ElectionCalendar;
pub use cycle::Cycle;
pub use errors::ResolutionError;
pub use legal::{LegalDocType, ALL_RESULT_TYPES};
pub use listing::{Breakdown, BreakdownKind, ReportFormType, TopCategory};
pub use office::Office;
pub use planner::{
    election_title, ElectionLookup, ElectionPage, FederatedLegalSearch, RedirectPlanner,
    SearchPage, SENATE_DISTRICT_SENTINEL,
};
pub use resolver::{
    apply_special_election_rule, resolve_candidate_cycle, resolve_committee_cycle,
    successor_election_year, CandidateCycle, CandidateCycleContext, CommitteeCycle,
    CommitteeCycleContext,
};
pub use route::{RedirectDecision, Route, FILING_IMAGE_URL};
pub use state::StateCode;
