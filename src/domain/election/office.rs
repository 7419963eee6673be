//! Federal office a race is held for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ResolutionError;

/// The three federal offices with campaign finance pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Office {
    President,
    Senate,
    House,
}

impl Office {
    /// Returns all offices in display order.
    pub fn all() -> &'static [Office] {
        &[Office::President, Office::Senate, Office::House]
    }

    /// URL path segment, e.g. `senate`.
    pub fn slug(&self) -> &'static str {
        match self {
            Office::President => "president",
            Office::Senate => "senate",
            Office::House => "house",
        }
    }

    /// One-letter office code used by the data API (`P`, `S`, `H`).
    pub fn code(&self) -> char {
        match self {
            Office::President => 'P',
            Office::Senate => 'S',
            Office::House => 'H',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Office::President => "President",
            Office::Senate => "Senate",
            Office::House => "House",
        }
    }

    /// Looks up an office by its one-letter API code.
    pub fn from_code(code: &str) -> Option<Office> {
        let mut chars = code.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        Self::all().iter().copied().find(|office| office.code() == letter)
    }

    /// Years preceding the election year that belong to the election period.
    pub fn election_duration(&self) -> i32 {
        match self {
            Office::President => 3,
            Office::Senate => 5,
            Office::House => 1,
        }
    }

    /// Label for the span of years a page covers.
    ///
    /// A full election period runs back [`election_duration`](Self::election_duration)
    /// years from the election year. A single cycle covers its two calendar years.
    pub fn time_period(&self, cycle: i32, election_full: bool) -> String {
        let start = if election_full {
            cycle - self.election_duration()
        } else {
            cycle - 1
        };
        format!("{}–{}", start, cycle)
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Office {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|office| s.eq_ignore_ascii_case(office.slug()))
            .ok_or_else(|| ResolutionError::not_found(format!("office '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs_case_insensitively() {
        assert_eq!("President".parse::<Office>().unwrap(), Office::President);
        assert_eq!("SENATE".parse::<Office>().unwrap(), Office::Senate);
        assert_eq!("house".parse::<Office>().unwrap(), Office::House);
    }

    #[test]
    fn unknown_office_is_not_found() {
        let err = "governor".parse::<Office>().unwrap_err();
        assert!(matches!(err, ResolutionError::NotFound(_)));
    }

    #[test]
    fn code_is_first_letter_upper_case() {
        for office in Office::all() {
            let first = office.slug().chars().next().unwrap().to_ascii_uppercase();
            assert_eq!(office.code(), first);
        }
    }

    #[test]
    fn from_code_round_trips_codes() {
        assert_eq!(Office::from_code("S"), Some(Office::Senate));
        assert_eq!(Office::from_code("h"), Some(Office::House));
        assert_eq!(Office::from_code("X"), None);
    }

    #[test]
    fn full_senate_period_spans_six_years() {
        assert_eq!(Office::Senate.time_period(2018, true), "2013–2018");
        assert_eq!(Office::President.time_period(2016, true), "2013–2016");
        assert_eq!(Office::House.time_period(2018, true), "2017–2018");
    }

    #[test]
    fn single_cycle_period_spans_two_years() {
        assert_eq!(Office::Senate.time_period(2016, false), "2015–2016");
    }
}
