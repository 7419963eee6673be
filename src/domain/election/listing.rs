//! Browse pages outside the election calendar: report listings and
//! raising/spending breakdowns.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

use super::{Cycle, Office, ResolutionError};

/// Committee report collections under `/reports/<form_type>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormType {
    Presidential,
    HouseSenate,
    PacParty,
    IeOnly,
}

impl ReportFormType {
    pub fn title(&self) -> &'static str {
        match self {
            ReportFormType::Presidential => "Presidential committee reports",
            ReportFormType::HouseSenate => "House and Senate committee reports",
            ReportFormType::PacParty => "PAC and party committee reports",
            ReportFormType::IeOnly => "Independent expenditure only committee reports",
        }
    }
}

impl FromStr for ReportFormType {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "presidential" => Ok(ReportFormType::Presidential),
            "house-senate" => Ok(ReportFormType::HouseSenate),
            "pac-party" => Ok(ReportFormType::PacParty),
            "ie-only" => Ok(ReportFormType::IeOnly),
            _ => Err(ResolutionError::not_found(format!("report type '{}'", s))),
        }
    }
}

/// Whether a breakdown ranks by money raised or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownKind {
    Raising,
    Spending,
}

impl BreakdownKind {
    /// Sort key passed to the data API, largest first.
    pub fn sort(&self) -> &'static str {
        match self {
            BreakdownKind::Raising => "-receipts",
            BreakdownKind::Spending => "-disbursements",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BreakdownKind::Raising => "Raising breakdown",
            BreakdownKind::Spending => "Spending breakdown",
        }
    }
}

/// Group of filers ranked on a breakdown page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopCategory {
    Candidates(Office),
    Pac,
    Party,
}

impl Default for TopCategory {
    fn default() -> Self {
        TopCategory::Candidates(Office::President)
    }
}

impl FromStr for TopCategory {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pac" => Ok(TopCategory::Pac),
            "party" => Ok(TopCategory::Party),
            code => Office::from_code(code)
                .map(TopCategory::Candidates)
                .ok_or_else(|| ResolutionError::not_found(format!("category '{}'", s))),
        }
    }
}

/// Canonical parameters of a raising or spending breakdown page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub kind: BreakdownKind,
    pub title: &'static str,
    pub top_category: TopCategory,
    pub cycle: Cycle,
    pub sort: &'static str,
    pub coverage_start_date: NaiveDate,
    pub coverage_end_date: NaiveDate,
}

impl Breakdown {
    /// Coverage opens on January 1 of the cycle's first year. It closes today
    /// while the election year is still in progress, else on December 31.
    pub fn new(kind: BreakdownKind, top_category: TopCategory, cycle: Cycle, today: NaiveDate) -> Self {
        let coverage_end_date = if cycle.year() == today.year() {
            today
        } else {
            cycle.last_day()
        };
        Self {
            kind,
            title: kind.title(),
            top_category,
            cycle,
            sort: kind.sort(),
            coverage_start_date: cycle.first_day(),
            coverage_end_date,
        }
    }
}
