//! Page request handlers.
//!
//! Each handler receives already-parsed request parameters, fetches from the
//! data API where the page needs an entity, and hands the result to the
//! election resolution core. The output is a [`RedirectDecision`] the HTTP
//! layer turns into a redirect or a rendered view.
//!
//! [`RedirectDecision`]: crate::domain::election::RedirectDecision

mod browse;
mod election_pages;
mod get_candidate_page;
mod get_committee_page;
mod legal_search;

pub use browse::{BrowseHandler, CandidateListing, ReportListing};
pub use election_pages::ElectionPagesHandler;
pub use get_candidate_page::{CandidatePage, GetCandidatePageHandler, GetCandidatePageQuery};
pub use get_committee_page::{CommitteePage, GetCommitteePageHandler, GetCommitteePageQuery};
pub use legal_search::{LegalDocSearch, LegalSearchHandler};

use crate::domain::election::ResolutionError;
use crate::ports::DataClientError;

/// Failures a page handler can surface to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Data(#[from] DataClientError),
}
