//! Two-letter state codes and the Senate class rotation.

use serde::Serialize;
use std::fmt;

/// Recognized postal codes with display names.
pub(super) const STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District Of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// A Senate class: one regular election year it held, and its member states.
///
/// Each class repeats every six years from its anchor.
pub(super) struct SenateClass {
    pub anchor_year: i32,
    pub states: &'static [&'static str],
}

pub(super) const SENATE_CLASSES: [SenateClass; 3] = [
    SenateClass {
        anchor_year: 2018,
        states: &[
            "AZ", "CA", "CT", "DE", "FL", "HI", "IN", "ME", "MD", "MA", "MI", "MN", "MS", "MO",
            "MT", "NE", "NV", "NJ", "NM", "NY", "ND", "OH", "PA", "RI", "TN", "TX", "UT", "VT",
            "VA", "WA", "WV", "WI", "WY",
        ],
    },
    SenateClass {
        anchor_year: 2020,
        states: &[
            "AL", "AK", "AR", "CO", "DE", "GA", "ID", "IL", "IA", "KS", "KY", "LA", "ME", "MA",
            "MI", "MN", "MS", "MT", "NE", "NH", "NJ", "NM", "NC", "OK", "OR", "RI", "SC", "SD",
            "TN", "TX", "VA", "WV", "WY",
        ],
    },
    SenateClass {
        anchor_year: 2016,
        states: &[
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
            "KS", "KY", "LA", "MD", "MO", "NV", "NH", "NY", "NC", "ND", "OH", "OK", "OR", "PA",
            "SC", "SD", "UT", "VT", "WA", "WI",
        ],
    },
];

/// A validated, upper-case state code.
///
/// Only the election calendar hands these out, so holding one means the code
/// is in the recognized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StateCode {
    code: &'static str,
    #[serde(skip)]
    name: &'static str,
}

impl StateCode {
    pub(super) fn lookup(code: &str) -> Option<Self> {
        STATES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|&(code, name)| Self { code, name })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full display name, e.g. `Ohio`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES_WITH_SENATORS: usize = 50;

    #[test]
    fn lookup_normalizes_case() {
        let ohio = StateCode::lookup("oh").unwrap();
        assert_eq!(ohio.code(), "OH");
        assert_eq!(ohio.name(), "Ohio");
    }

    #[test]
    fn lookup_rejects_unknown_codes() {
        assert!(StateCode::lookup("ZZ").is_none());
        assert!(StateCode::lookup("").is_none());
    }

    #[test]
    fn every_senate_state_sits_in_exactly_two_classes() {
        let senate_states: Vec<&str> = STATES
            .iter()
            .map(|(code, _)| *code)
            .filter(|code| SENATE_CLASSES.iter().any(|c| c.states.contains(code)))
            .collect();
        assert_eq!(senate_states.len(), STATES_WITH_SENATORS);

        for code in senate_states {
            let classes = SENATE_CLASSES
                .iter()
                .filter(|c| c.states.contains(&code))
                .count();
            assert_eq!(classes, 2, "{} is in {} classes", code, classes);
        }
    }

    #[test]
    fn class_members_are_recognized_states() {
        for class in &SENATE_CLASSES {
            for code in class.states {
                assert!(StateCode::lookup(code).is_some(), "{} unknown", code);
            }
        }
    }

    #[test]
    fn territories_and_dc_have_no_senate_class() {
        for code in ["DC", "PR", "GU", "VI", "AS", "MP"] {
            assert!(SENATE_CLASSES.iter().all(|c| !c.states.contains(&code)));
        }
    }

    #[test]
    fn serializes_as_bare_code() {
        let ohio = StateCode::lookup("OH").unwrap();
        assert_eq!(serde_json::to_string(&ohio).unwrap(), "\"OH\"");
    }
}
