//! Application handlers.
//!
//! Query handlers that fetch page data and run it through election resolution.

pub mod pages;

pub use pages::{
    BrowseHandler, CandidateListing, CandidatePage, CommitteePage, ElectionPagesHandler,
    GetCandidatePageHandler, GetCandidatePageQuery, GetCommitteePageHandler, GetCommitteePageQuery,
    LegalDocSearch, LegalSearchHandler, PageError, ReportListing,
};
