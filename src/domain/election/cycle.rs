//! Cycle value object: a two-year federal election period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A two-year election period labelled by its even (general election) year.
///
/// `Cycle(2016)` covers January 2015 through December 2016. Raw election
/// years reported for candidates may be odd (special elections) and are kept
/// as plain `i32` years rather than cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Cycle(i32);

impl Cycle {
    pub const MIN_YEAR: i32 = 2;
    pub const MAX_YEAR: i32 = 9998;

    /// Creates a cycle, rejecting odd years and years outside the calendar range.
    pub fn new(year: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "cycle",
                Self::MIN_YEAR,
                Self::MAX_YEAR,
                year,
            ));
        }
        if year % 2 != 0 {
            return Err(ValidationError::invalid_format(
                "cycle",
                format!("{} is not an even year", year),
            ));
        }
        Ok(Self(year))
    }

    /// The cycle a calendar year belongs to: odd years round up.
    pub fn containing(year: i32) -> Self {
        let year = year.clamp(Self::MIN_YEAR - 1, Self::MAX_YEAR);
        Self(year + year.rem_euclid(2))
    }

    pub fn year(&self) -> i32 {
        self.0
    }

    /// Presidential elections fall on years divisible by four.
    pub fn is_presidential(&self) -> bool {
        self.0 % 4 == 0
    }

    /// January 1 of the odd year opening the cycle.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0 - 1, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// December 31 of the election year closing the cycle.
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 12, 31).unwrap_or(NaiveDate::MAX)
    }
}

impl TryFrom<i32> for Cycle {
    type Error = ValidationError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<Cycle> for i32 {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_odd_years() {
        assert!(matches!(
            Cycle::new(2015),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_years_out_of_range() {
        assert!(matches!(
            Cycle::new(10_000),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Cycle::new(0).is_err());
    }

    #[test]
    fn containing_rounds_odd_years_up() {
        assert_eq!(Cycle::containing(2015).year(), 2016);
        assert_eq!(Cycle::containing(2016).year(), 2016);
    }

    #[test]
    fn presidential_years_divide_by_four() {
        assert!(Cycle::new(2016).unwrap().is_presidential());
        assert!(!Cycle::new(2018).unwrap().is_presidential());
    }

    #[test]
    fn cycle_spans_two_calendar_years() {
        let cycle = Cycle::new(2016).unwrap();
        assert_eq!(cycle.first_day(), NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(cycle.last_day(), NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());
    }

    #[test]
    fn deserializes_only_even_years() {
        let cycle: Cycle = serde_json::from_str("2020").unwrap();
        assert_eq!(cycle.year(), 2020);
        assert!(serde_json::from_str::<Cycle>("2021").is_err());
    }
}
