//! Election calendar: which cycles exist and which are valid per office/state.
//!
//! The calendar is reference data built once at startup from today's date and
//! shared read-only by every request. It performs no I/O.

use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;

use super::state::{StateCode, SENATE_CLASSES, STATES};
use super::{Cycle, ResolutionError};

/// Cycles after the current one that the Senate schedule lists.
///
/// The three classes occupy three consecutive cycles, so looking two cycles
/// ahead always reaches every class's next regular election.
const SENATE_LOOKAHEAD_YEARS: i32 = 4;

/// Immutable calendar reference data.
#[derive(Debug, Clone)]
pub struct ElectionCalendar {
    current_cycle: Cycle,
    earliest_cycle: Cycle,
    senate_cycles: HashMap<&'static str, Vec<Cycle>>,
}

impl ElectionCalendar {
    /// Builds the calendar as of `today`.
    pub fn new(today: NaiveDate, earliest_cycle: Cycle) -> Self {
        let current_cycle = Self::current_cycle_for(today);
        let ceiling = current_cycle.year() + SENATE_LOOKAHEAD_YEARS;

        let senate_cycles = STATES
            .iter()
            .map(|&(code, _)| {
                let mut cycles: Vec<Cycle> = SENATE_CLASSES
                    .iter()
                    .filter(|class| class.states.contains(&code))
                    .flat_map(|class| class_cycles(class.anchor_year, earliest_cycle, ceiling))
                    .collect();
                cycles.sort();
                (code, cycles)
            })
            .collect();

        Self {
            current_cycle,
            earliest_cycle,
            senate_cycles,
        }
    }

    /// Builds the calendar from the local clock.
    pub fn starting_today(earliest_cycle: Cycle) -> Self {
        Self::new(Local::now().date_naive(), earliest_cycle)
    }

    /// The cycle in progress on `date`. During an odd year the upcoming
    /// cycle is the relevant one.
    pub fn current_cycle_for(date: NaiveDate) -> Cycle {
        Cycle::containing(date.year())
    }

    pub fn current_cycle(&self) -> Cycle {
        self.current_cycle
    }

    pub fn earliest_cycle(&self) -> Cycle {
        self.earliest_cycle
    }

    /// Every cycle from the earliest supported one up to
    /// `max(max_cycle, current_cycle)`, most recent first.
    ///
    /// A future `max_cycle` extends the list so a deep-linked cycle still
    /// appears in cycle selectors.
    pub fn cycles_up_to(&self, max_cycle: Cycle) -> Vec<Cycle> {
        let ceiling = max_cycle.max(self.current_cycle);
        (self.earliest_cycle.year()..=ceiling.year())
            .rev()
            .step_by(2)
            .map(Cycle::containing)
            .collect()
    }

    /// Keeps the presidential election years.
    pub fn presidential_cycles(cycles: &[Cycle]) -> Vec<Cycle> {
        cycles.iter().copied().filter(Cycle::is_presidential).collect()
    }

    /// Regular Senate election cycles for `state`, ascending.
    ///
    /// DC and the territories are recognized but have no Senate seats, so
    /// their list is empty.
    pub fn senate_cycles_for_state(&self, state: &str) -> Result<Vec<Cycle>, ResolutionError> {
        let state = StateCode::lookup(state)
            .ok_or_else(|| ResolutionError::UnknownState(state.to_string()))?;
        Ok(self
            .senate_cycles
            .get(state.code())
            .cloned()
            .unwrap_or_default())
    }

    /// The state's next regular Senate election: the first cycle at or after
    /// the current one, else the first listed.
    pub fn next_senate_cycle(&self, state: &str) -> Result<Cycle, ResolutionError> {
        let cycles = self.senate_cycles_for_state(state)?;
        cycles
            .iter()
            .find(|cycle| **cycle >= self.current_cycle)
            .or_else(|| cycles.first())
            .copied()
            .ok_or_else(|| ResolutionError::not_found(format!("senate race in {}", state)))
    }

    /// Validates a state code against the recognized set.
    pub fn state(&self, code: &str) -> Result<StateCode, ResolutionError> {
        StateCode::lookup(code).ok_or_else(|| ResolutionError::not_found(format!("state '{}'", code)))
    }

    pub fn is_valid_state(&self, code: &str) -> bool {
        StateCode::lookup(code).is_some()
    }
}

/// Cycles of one Senate class within `[earliest, ceiling]`.
fn class_cycles(anchor_year: i32, earliest: Cycle, ceiling: i32) -> impl Iterator<Item = Cycle> {
    let first = earliest.year() + (anchor_year - earliest.year()).rem_euclid(6);
    (first..=ceiling).step_by(6).map(Cycle::containing)
}
