//! Election calendar constants

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::election::Cycle;

/// Fixed cycles the calendar and the redirect planner are built from
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Oldest cycle offered in cycle selectors
    #[serde(default = "default_earliest_cycle")]
    pub earliest_cycle: Cycle,

    /// Cycle legacy House district links and breakdown pages open on
    #[serde(default = "default_time_period")]
    pub default_time_period: Cycle,
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_time_period < self.earliest_cycle {
            return Err(ValidationError::DefaultBeforeEarliestCycle {
                default: self.default_time_period.year(),
                earliest: self.earliest_cycle.year(),
            });
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            earliest_cycle: default_earliest_cycle(),
            default_time_period: default_time_period(),
        }
    }
}

fn default_earliest_cycle() -> Cycle {
    Cycle::containing(1976)
}

fn default_time_period() -> Cycle {
    Cycle::containing(2016)
}
