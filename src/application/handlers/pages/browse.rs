//! BrowseHandler - search box, breakdowns and listing pages.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::election::{
    Breakdown, BreakdownKind, Cycle, Office, RedirectDecision, RedirectPlanner, ReportFormType,
    ResolutionError, SearchPage,
};

/// `/reports/<form_type>/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportListing {
    pub form_type: ReportFormType,
    pub title: &'static str,
}

/// `/candidates/<office>/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateListing {
    pub office: Office,
    pub title: String,
}

pub struct BrowseHandler {
    planner: Arc<RedirectPlanner>,
}

impl BrowseHandler {
    pub fn new(planner: Arc<RedirectPlanner>) -> Self {
        Self { planner }
    }

    pub fn search(&self, query: Option<&str>) -> RedirectDecision<SearchPage> {
        self.planner.plan_search(query)
    }

    pub fn breakdown(
        &self,
        kind: BreakdownKind,
        top_category: Option<&str>,
        cycle: Option<Cycle>,
        today: NaiveDate,
    ) -> Result<Breakdown, ResolutionError> {
        self.planner.plan_breakdown(kind, top_category, cycle, today)
    }

    pub fn report_listing(&self, form_type: &str) -> Result<ReportListing, ResolutionError> {
        let form_type: ReportFormType = form_type.parse()?;
        Ok(ReportListing {
            form_type,
            title: form_type.title(),
        })
    }

    pub fn candidate_listing(&self, office: &str) -> Result<CandidateListing, ResolutionError> {
        let office: Office = office.parse()?;
        Ok(CandidateListing {
            office,
            title: format!("candidates for {}", office.slug()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::election::{ElectionCalendar, Route, TopCategory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn handler() -> BrowseHandler {
        let calendar = Arc::new(ElectionCalendar::new(date(2023, 3, 1), Cycle::new(1976).unwrap()));
        BrowseHandler::new(Arc::new(RedirectPlanner::new(calendar, Cycle::new(2016).unwrap())))
    }

    #[test]
    fn image_number_search_leaves_the_site() {
        let decision = handler().search(Some("201601159000000000"));
        let RedirectDecision::Redirect(route) = decision else {
            panic!("expected redirect");
        };
        assert!(matches!(route, Route::FilingImage { .. }));
    }

    #[test]
    fn breakdown_defaults() {
        let breakdown = handler()
            .breakdown(BreakdownKind::Spending, None, None, date(2023, 3, 1))
            .unwrap();
        assert_eq!(breakdown.top_category, TopCategory::Candidates(Office::President));
        assert_eq!(breakdown.cycle, Cycle::new(2016).unwrap());
        assert_eq!(breakdown.sort, "-disbursements");
        assert_eq!(breakdown.coverage_end_date, date(2016, 12, 31));
    }

    #[test]
    fn report_listing_titles() {
        let listing = handler().report_listing("ie-only").unwrap();
        assert_eq!(listing.form_type, ReportFormType::IeOnly);
        assert!(handler().report_listing("monthly").is_err());
    }

    #[test]
    fn candidate_listing_validates_office() {
        let listing = handler().candidate_listing("house").unwrap();
        assert_eq!(listing.title, "candidates for house");
        assert!(matches!(
            handler().candidate_listing("governor"),
            Err(ResolutionError::NotFound(_))
        ));
    }
}
