//! Cycle resolution for candidate and committee pages.
//!
//! A candidate page asked for a "full election" view of a year the candidate
//! did not run in is moved to the candidate's next election year. Special
//! elections held in odd years are the exception. They cannot anchor a full
//! election period, so the page falls back to the single requested cycle.

use serde::Serialize;
use std::collections::BTreeSet;

use super::{RedirectDecision, Route};

/// Request-scoped inputs for resolving a candidate page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCycleContext {
    pub candidate_id: String,
    pub requested_cycle: Option<i32>,
    /// Election years reported by the data API. May contain odd years.
    pub known_election_years: BTreeSet<i32>,
    pub election_full: bool,
}

/// Canonical cycle selection for a candidate page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCycle {
    pub candidate_id: String,
    pub cycle: i32,
    pub election_full: bool,
}

/// Decides the cycle a candidate page renders.
///
/// `default_cycle` is used when the request names no cycle.
pub fn resolve_candidate_cycle(
    context: &CandidateCycleContext,
    default_cycle: i32,
) -> RedirectDecision<CandidateCycle> {
    let direct = |cycle: i32, election_full: bool| {
        RedirectDecision::Direct(CandidateCycle {
            candidate_id: context.candidate_id.clone(),
            cycle,
            election_full,
        })
    };

    let requested = match context.requested_cycle {
        Some(requested)
            if context.election_full && !context.known_election_years.contains(&requested) =>
        {
            requested
        }
        requested => return direct(requested.unwrap_or(default_cycle), context.election_full),
    };

    let Some(next) = successor_election_year(&context.known_election_years, requested) else {
        return direct(requested, context.election_full);
    };
    let (cycle, election_full) = apply_special_election_rule(next, requested, context.election_full);

    if cycle == requested && election_full == context.election_full {
        return direct(cycle, election_full);
    }

    tracing::debug!(
        candidate_id = %context.candidate_id,
        requested,
        cycle,
        election_full,
        "Redirecting candidate page to election year"
    );
    RedirectDecision::Redirect(Route::CandidatePage {
        candidate_id: context.candidate_id.clone(),
        cycle,
        election_full,
    })
}

/// The smallest known election year after `requested`, else the latest known
/// year. `None` only when no election years are known.
pub fn successor_election_year(known: &BTreeSet<i32>, requested: i32) -> Option<i32> {
    known
        .range(requested.saturating_add(1)..)
        .next()
        .or_else(|| known.iter().next_back())
        .copied()
}

/// An odd successor is a special election. Keep the requested cycle and drop
/// the full-election view instead.
pub fn apply_special_election_rule(next: i32, requested: i32, election_full: bool) -> (i32, bool) {
    if next % 2 != 0 {
        (requested, false)
    } else {
        (next, election_full)
    }
}

/// Request-scoped inputs for resolving a committee page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeCycleContext {
    pub committee_id: String,
    pub requested_cycle: Option<i32>,
    /// Cycle the data API chose when none was requested.
    pub resolved_cycle: i32,
    /// Cycles in which the committee filed financial reports.
    pub cycles_with_reports: BTreeSet<i32>,
}

/// Canonical cycle selection for a committee page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitteeCycle {
    pub committee_id: String,
    pub cycle: i32,
}

/// Decides the cycle a committee page renders.
///
/// An explicit cycle is always honoured. Without one, a resolved cycle that
/// has no reports moves to the latest earlier cycle with reports, else the
/// latest cycle with reports.
pub fn resolve_committee_cycle(context: &CommitteeCycleContext) -> RedirectDecision<CommitteeCycle> {
    let direct = |cycle: i32| {
        RedirectDecision::Direct(CommitteeCycle {
            committee_id: context.committee_id.clone(),
            cycle,
        })
    };

    if let Some(requested) = context.requested_cycle {
        return direct(requested);
    }

    let reports = &context.cycles_with_reports;
    if reports.is_empty() || reports.contains(&context.resolved_cycle) {
        return direct(context.resolved_cycle);
    }

    let fallback = reports
        .range(..context.resolved_cycle)
        .next_back()
        .or_else(|| reports.iter().next_back())
        .copied()
        .unwrap_or(context.resolved_cycle);

    tracing::debug!(
        committee_id = %context.committee_id,
        resolved = context.resolved_cycle,
        cycle = fallback,
        "Redirecting committee page to last cycle with reports"
    );
    RedirectDecision::Redirect(Route::CommitteePage {
        committee_id: context.committee_id.clone(),
        cycle: fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn years(values: &[i32]) -> BTreeSet<i32> {
        values.iter().copied().collect()
    }

    fn candidate(requested: Option<i32>, known: &[i32], election_full: bool) -> CandidateCycleContext {
        CandidateCycleContext {
            candidate_id: "H8OH01043".to_string(),
            requested_cycle: requested,
            known_election_years: years(known),
            election_full,
        }
    }

    /// Follows a redirect by feeding its target back into the resolver.
    fn follow(context: &CandidateCycleContext, route: &Route) -> CandidateCycleContext {
        match route {
            Route::CandidatePage {
                cycle,
                election_full,
                ..
            } => CandidateCycleContext {
                requested_cycle: Some(*cycle),
                election_full: *election_full,
                ..context.clone()
            },
            other => panic!("unexpected route {:?}", other),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Successor search and parity correction
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn successor_is_smallest_later_year() {
        assert_eq!(successor_election_year(&years(&[2014, 2016, 2018]), 2015), Some(2016));
    }

    #[test]
    fn successor_falls_back_to_latest_year() {
        assert_eq!(successor_election_year(&years(&[2010, 2012]), 2020), Some(2012));
    }

    #[test]
    fn successor_of_empty_set_is_none() {
        assert_eq!(successor_election_year(&BTreeSet::new(), 2020), None);
    }

    #[test]
    fn odd_successor_keeps_requested_cycle_and_drops_full_view() {
        assert_eq!(apply_special_election_rule(2017, 2015, true), (2015, false));
    }

    #[test]
    fn even_successor_passes_through() {
        assert_eq!(apply_special_election_rule(2016, 2015, true), (2016, true));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Candidate resolution
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn known_election_year_is_served_directly() {
        let decision = resolve_candidate_cycle(&candidate(Some(2016), &[2014, 2016], true), 2018);
        assert_eq!(
            decision,
            RedirectDecision::Direct(CandidateCycle {
                candidate_id: "H8OH01043".to_string(),
                cycle: 2016,
                election_full: true,
            })
        );
    }

    #[test]
    fn missing_cycle_uses_default() {
        let decision = resolve_candidate_cycle(&candidate(None, &[2014, 2016], true), 2016);
        assert!(matches!(
            decision,
            RedirectDecision::Direct(CandidateCycle { cycle: 2016, election_full: true, .. })
        ));
    }

    #[test]
    fn single_cycle_view_is_never_redirected() {
        let decision = resolve_candidate_cycle(&candidate(Some(2015), &[2014, 2016], false), 2016);
        assert!(matches!(
            decision,
            RedirectDecision::Direct(CandidateCycle { cycle: 2015, election_full: false, .. })
        ));
    }

    #[test]
    fn off_year_cascades_to_next_election() {
        let decision = resolve_candidate_cycle(&candidate(Some(2015), &[2014, 2016, 2018], true), 2018);
        assert_eq!(
            decision,
            RedirectDecision::Redirect(Route::CandidatePage {
                candidate_id: "H8OH01043".to_string(),
                cycle: 2016,
                election_full: true,
            })
        );
    }

    #[test]
    fn special_election_degrades_to_requested_cycle() {
        let decision = resolve_candidate_cycle(&candidate(Some(2015), &[2014, 2017], true), 2018);
        assert_eq!(
            decision,
            RedirectDecision::Redirect(Route::CandidatePage {
                candidate_id: "H8OH01043".to_string(),
                cycle: 2015,
                election_full: false,
            })
        );
    }

    #[test]
    fn cycle_past_last_election_moves_back_to_it() {
        let decision = resolve_candidate_cycle(&candidate(Some(2024), &[2014, 2016], true), 2024);
        assert!(matches!(
            decision,
            RedirectDecision::Redirect(Route::CandidatePage { cycle: 2016, election_full: true, .. })
        ));
    }

    #[test]
    fn no_known_years_is_served_directly() {
        let decision = resolve_candidate_cycle(&candidate(Some(2020), &[], true), 2020);
        assert!(!decision.is_redirect());
    }

    #[test]
    fn redirect_target_resolves_directly() {
        for (requested, known) in [(2015, vec![2014, 2016, 2018]), (2015, vec![2014, 2017])] {
            let context = candidate(Some(requested), &known, true);
            let RedirectDecision::Redirect(route) = resolve_candidate_cycle(&context, 2018) else {
                panic!("expected a redirect for {}", requested);
            };
            let second = resolve_candidate_cycle(&follow(&context, &route), 2018);
            assert!(!second.is_redirect(), "redirect loop from {:?}", route);
        }
    }

    proptest! {
        #[test]
        fn resolving_a_redirect_target_never_redirects(
            known in proptest::collection::btree_set(1976i32..2040, 0..8),
            requested in 1970i32..2046,
            election_full in any::<bool>(),
        ) {
            let context = CandidateCycleContext {
                candidate_id: "P00000001".to_string(),
                requested_cycle: Some(requested),
                known_election_years: known,
                election_full,
            };
            if let RedirectDecision::Redirect(route) = resolve_candidate_cycle(&context, 2020) {
                let second = resolve_candidate_cycle(&follow(&context, &route), 2020);
                prop_assert!(!second.is_redirect());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Committee resolution
    // ─────────────────────────────────────────────────────────────────────

    fn committee(requested: Option<i32>, resolved: i32, reports: &[i32]) -> CommitteeCycleContext {
        CommitteeCycleContext {
            committee_id: "C00431445".to_string(),
            requested_cycle: requested,
            resolved_cycle: resolved,
            cycles_with_reports: years(reports),
        }
    }

    #[test]
    fn explicit_committee_cycle_is_honoured() {
        let decision = resolve_committee_cycle(&committee(Some(2010), 2018, &[2016]));
        assert!(matches!(
            decision,
            RedirectDecision::Direct(CommitteeCycle { cycle: 2010, .. })
        ));
    }

    #[test]
    fn resolved_cycle_with_reports_is_served() {
        let decision = resolve_committee_cycle(&committee(None, 2018, &[2016, 2018]));
        assert!(matches!(
            decision,
            RedirectDecision::Direct(CommitteeCycle { cycle: 2018, .. })
        ));
    }

    #[test]
    fn resolved_cycle_without_reports_moves_to_last_reported() {
        let decision = resolve_committee_cycle(&committee(None, 2020, &[2012, 2016]));
        assert_eq!(
            decision,
            RedirectDecision::Redirect(Route::CommitteePage {
                committee_id: "C00431445".to_string(),
                cycle: 2016,
            })
        );
    }

    #[test]
    fn committee_redirect_target_is_explicit() {
        let decision = resolve_committee_cycle(&committee(None, 2020, &[2022]));
        let RedirectDecision::Redirect(Route::CommitteePage { cycle, .. }) = decision else {
            panic!("expected redirect");
        };
        assert_eq!(cycle, 2022);
        let again = resolve_committee_cycle(&committee(Some(cycle), 2020, &[2022]));
        assert!(!again.is_redirect());
    }
}
