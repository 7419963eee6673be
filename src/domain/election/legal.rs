//! Legal document search types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ResolutionError;

/// `search_type` value meaning "search every document type at once".
pub const ALL_RESULT_TYPES: &str = "all";

/// A searchable legal document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalDocType {
    AdvisoryOpinions,
    Statutes,
    Murs,
    Regulations,
}

impl LegalDocType {
    pub fn all() -> &'static [LegalDocType] {
        &[
            LegalDocType::AdvisoryOpinions,
            LegalDocType::Statutes,
            LegalDocType::Murs,
            LegalDocType::Regulations,
        ]
    }

    /// Value of the `search_type` parameter and name of the search route.
    pub fn result_type(&self) -> &'static str {
        match self {
            LegalDocType::AdvisoryOpinions => "advisory_opinions",
            LegalDocType::Statutes => "statutes",
            LegalDocType::Murs => "murs",
            LegalDocType::Regulations => "regulations",
        }
    }

    /// Path segment under `/legal/search/`.
    pub fn slug(&self) -> &'static str {
        match self {
            LegalDocType::AdvisoryOpinions => "advisory-opinions",
            LegalDocType::Statutes => "statutes",
            LegalDocType::Murs => "enforcement",
            LegalDocType::Regulations => "regulations",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, ResolutionError> {
        Self::all()
            .iter()
            .copied()
            .find(|doc_type| doc_type.slug() == slug)
            .ok_or_else(|| ResolutionError::not_found(format!("legal search '{}'", slug)))
    }

    /// Whether a search page should query the data API.
    ///
    /// Advisory opinions and enforcement matters list recent documents even
    /// without a query; the other collections need one.
    pub fn should_fetch(&self, query: Option<&str>) -> bool {
        let has_query = query.map_or(false, |q| !q.trim().is_empty());
        has_query || matches!(self, LegalDocType::AdvisoryOpinions | LegalDocType::Murs)
    }
}

impl fmt::Display for LegalDocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result_type())
    }
}

impl FromStr for LegalDocType {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|doc_type| doc_type.result_type() == s)
            .ok_or_else(|| ResolutionError::not_found(format!("search type '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_result_type_names() {
        assert_eq!("murs".parse::<LegalDocType>().unwrap(), LegalDocType::Murs);
        assert!("all".parse::<LegalDocType>().is_err());
        assert!("briefs".parse::<LegalDocType>().is_err());
    }

    #[test]
    fn enforcement_slug_maps_to_murs() {
        assert_eq!(LegalDocType::from_slug("enforcement").unwrap(), LegalDocType::Murs);
        assert!(LegalDocType::from_slug("murs").is_err());
    }

    #[test]
    fn statutes_need_a_query_to_fetch() {
        assert!(!LegalDocType::Statutes.should_fetch(None));
        assert!(!LegalDocType::Statutes.should_fetch(Some("  ")));
        assert!(LegalDocType::Statutes.should_fetch(Some("contribution limits")));
    }

    #[test]
    fn opinions_and_murs_always_fetch() {
        assert!(LegalDocType::AdvisoryOpinions.should_fetch(None));
        assert!(LegalDocType::Murs.should_fetch(None));
    }
}
