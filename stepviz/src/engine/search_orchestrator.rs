// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The session boundary used by a presentation layer. See [`SearchOrchestrator`].

use std::sync::Arc;

use rand::{Rng, rngs::StdRng};
use strum_macros::Display;

use crate::{Array, ArrayGenerator, RunSteps, SessionSlot, StepVizError, StepVizResult,
            Value, run, sort_only};

/// Parses user input into a search target. Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`StepVizError::InvalidTarget`] if `input` is not a whole number that fits in a
/// [`Value`].
pub fn parse_target(input: &str) -> StepVizResult<Value> {
    input.trim().parse::<Value>().map_err(|_| {
        // % is Display, ? is Debug.
        tracing::warn!(message = "Rejected target", input = ?input);
        StepVizError::InvalidTarget {
            input: input.to_string(),
        }
    })
}

/// What the next run of a [`SearchOrchestrator`] will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OrchestratorState {
    /// The array is not known to be sorted; a run starts with the counting sort.
    NeedsSort,
    /// The array is sorted; a run goes straight to the binary search.
    ReadyToSearch,
    /// A run is in flight; new requests are rejected.
    Busy,
}

/// Holds the current array of a session and hands out step streams for it.
///
/// This replaces loose `sorting` / `searching` / `is_sorted` flags with one place that
/// owns them:
/// - The sorted flag lives on the [`Array`] itself.
/// - "A run is in flight" is a [`RunLease`] carried by the returned [`RunSteps`]. While
///   it is alive, [`request_new_array()`], [`load_array()`], [`request_run()`] and
///   [`request_sort()`] fail with [`StepVizError::ConcurrentRun`].
///
/// A run that sorts writes the sorted array back into the session when it produces
/// [`StepEvent::SortComplete`]. A run dropped before that point leaves the session's
/// array exactly as it was, still flagged as unsorted.
///
/// [`RunLease`]: crate::RunLease
/// [`StepEvent::SortComplete`]: crate::StepEvent::SortComplete
/// [`load_array()`]: Self::load_array
/// [`request_new_array()`]: Self::request_new_array
/// [`request_run()`]: Self::request_run
/// [`request_sort()`]: Self::request_sort
#[derive(Debug)]
pub struct SearchOrchestrator<R: Rng = StdRng> {
    generator: ArrayGenerator<R>,
    slot: Arc<SessionSlot>,
}

impl SearchOrchestrator<StdRng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self { Self::new(ArrayGenerator::from_seed(seed)) }

    #[must_use]
    pub fn from_entropy() -> Self { Self::new(ArrayGenerator::from_entropy()) }
}

impl<R: Rng> SearchOrchestrator<R> {
    /// Starts with an empty array. Call [`Self::request_new_array()`] or
    /// [`Self::load_array()`] before running.
    pub fn new(generator: ArrayGenerator<R>) -> Self {
        Self {
            generator,
            slot: Arc::new(SessionSlot::default()),
        }
    }

    /// A copy of the current array.
    #[must_use]
    pub fn array(&self) -> Array { self.slot.array() }

    #[must_use]
    pub fn state(&self) -> OrchestratorState {
        if self.slot.is_in_flight() {
            OrchestratorState::Busy
        } else if self.slot.array().is_sorted() {
            OrchestratorState::ReadyToSearch
        } else {
            OrchestratorState::NeedsSort
        }
    }

    /// Replaces the current array with a freshly generated, unsorted one.
    ///
    /// # Errors
    ///
    /// - [`StepVizError::ConcurrentRun`] while a run is in flight.
    /// - [`StepVizError::InvalidSize`] from [`ArrayGenerator::generate()`].
    ///
    /// The current array is untouched on error.
    pub fn request_new_array(&mut self, size: usize) -> StepVizResult<Array> {
        let lease = self.slot.try_acquire()?;
        let array = self.generator.generate(size)?;
        lease.replace_array(array.clone());
        Ok(array)
    }

    /// Replaces the current array with one supplied by the caller.
    ///
    /// # Errors
    ///
    /// [`StepVizError::ConcurrentRun`] while a run is in flight.
    pub fn load_array(&mut self, array: Array) -> StepVizResult<()> {
        self.slot.try_acquire()?.replace_array(array);
        Ok(())
    }

    /// Starts a search for `target`, sorting first if the array needs it.
    ///
    /// # Errors
    ///
    /// - [`StepVizError::InvalidTarget`] if `target` is not an integer. Checked first,
    ///   nothing else happens in that case.
    /// - [`StepVizError::ConcurrentRun`] while another run is in flight.
    /// - Anything [`run()`] reports for the current array.
    pub fn request_run(&self, target: &str) -> StepVizResult<RunSteps> {
        let target = parse_target(target)?;
        let lease = self.slot.try_acquire()?;
        let steps = run(self.slot.array(), target)?;
        Ok(steps.with_lease(lease))
    }

    /// Starts a counting sort of the current array without a search afterwards.
    ///
    /// # Errors
    ///
    /// - [`StepVizError::ConcurrentRun`] while another run is in flight.
    /// - [`StepVizError::AlreadySorted`] if there is nothing to demonstrate.
    /// - Anything [`sort_only()`] reports for the current array.
    pub fn request_sort(&self) -> StepVizResult<RunSteps> {
        let lease = self.slot.try_acquire()?;
        let steps = sort_only(self.slot.array())?;
        Ok(steps.with_lease(lease))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, StepEvent};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn orchestrator_with(values: Vec<Value>) -> SearchOrchestrator {
        let mut it = SearchOrchestrator::from_seed(3);
        it.load_array(Array::from(values)).unwrap();
        it
    }

    #[test_case("42", Ok(42))]
    #[test_case("  -7 ", Ok(-7))]
    #[test_case("4.5", Err(StepVizError::InvalidTarget { input: "4.5".into() }))]
    #[test_case("", Err(StepVizError::InvalidTarget { input: String::new() }))]
    #[test_case("abc", Err(StepVizError::InvalidTarget { input: "abc".into() }))]
    fn parses_targets(input: &str, expected: StepVizResult<Value>) {
        assert_eq!(parse_target(input), expected);
    }

    #[test]
    fn invalid_target_leaves_state_alone() {
        let orchestrator = orchestrator_with(vec![3, 1, 2]);
        assert!(matches!(
            orchestrator.request_run("x"),
            Err(StepVizError::InvalidTarget { .. })
        ));
        assert_eq!(orchestrator.state(), OrchestratorState::NeedsSort);
        assert_eq!(orchestrator.array(), Array::from(vec![3, 1, 2]));
    }

    #[test]
    fn first_run_sorts_second_run_does_not() {
        let orchestrator = orchestrator_with(vec![5, 3, 1, 4, 2]);
        assert_eq!(orchestrator.state(), OrchestratorState::NeedsSort);

        let first: Vec<StepEvent> = orchestrator.request_run("4").unwrap().collect();
        assert_eq!(first.iter().filter(|it| it.phase().is_sort_phase()).count(), 11);
        assert_eq!(orchestrator.state(), OrchestratorState::ReadyToSearch);
        assert_eq!(orchestrator.array(), Array::new_sorted(vec![1, 2, 3, 4, 5]));

        let second: Vec<StepEvent> = orchestrator.request_run("4").unwrap().collect();
        assert!(second.iter().all(|it| it.phase().is_search_phase()));
        assert_eq!(second.last().map(StepEvent::phase), Some(Phase::Found));
    }

    #[test]
    fn requests_are_rejected_while_a_run_is_in_flight() {
        let mut orchestrator = orchestrator_with(vec![2, 1]);
        let mut steps = orchestrator.request_run("1").unwrap();
        steps.next();
        assert_eq!(orchestrator.state(), OrchestratorState::Busy);

        assert_eq!(
            orchestrator.request_run("1").unwrap_err(),
            StepVizError::ConcurrentRun
        );
        assert_eq!(
            orchestrator.request_sort().unwrap_err(),
            StepVizError::ConcurrentRun
        );
        assert_eq!(
            orchestrator.request_new_array(10).unwrap_err(),
            StepVizError::ConcurrentRun
        );

        // The rejected requests did not disturb the run in flight.
        steps.by_ref().for_each(drop);
        assert_eq!(steps.search_outcome().and_then(|it| it.index), Some(0));
        assert_ne!(orchestrator.state(), OrchestratorState::Busy);
        assert!(orchestrator.request_new_array(10).is_ok());
    }

    #[test]
    fn lease_is_released_with_the_terminal_event() {
        let orchestrator = orchestrator_with(vec![1]);
        let mut steps = orchestrator.request_run("1").unwrap();
        // counting, rebuilding, sort-complete, probe.
        steps.by_ref().take(4).for_each(drop);
        assert_eq!(orchestrator.state(), OrchestratorState::Busy);

        assert_eq!(steps.next().map(|it| it.phase()), Some(Phase::Found));
        assert_eq!(orchestrator.state(), OrchestratorState::ReadyToSearch);
    }

    #[test]
    fn abandoned_sort_does_not_mark_array_sorted() {
        let orchestrator = orchestrator_with(vec![3, 1, 2]);
        let mut steps = orchestrator.request_run("2").unwrap();
        steps.by_ref().take(5).for_each(drop);
        drop(steps);

        assert_eq!(orchestrator.state(), OrchestratorState::NeedsSort);
        assert_eq!(orchestrator.array(), Array::from(vec![3, 1, 2]));
    }

    #[test]
    fn request_sort_then_already_sorted() {
        let orchestrator = orchestrator_with(vec![9, 4, 7]);
        let events: Vec<StepEvent> = orchestrator.request_sort().unwrap().collect();
        assert_eq!(events.len(), 7);
        assert_eq!(orchestrator.state(), OrchestratorState::ReadyToSearch);

        assert_eq!(
            orchestrator.request_sort().unwrap_err(),
            StepVizError::AlreadySorted
        );
        // The failed request released its lease.
        assert_ne!(orchestrator.state(), OrchestratorState::Busy);
    }

    #[test]
    fn new_array_resets_sorted_flag() {
        let mut orchestrator = orchestrator_with(vec![2, 1]);
        orchestrator.request_run("2").unwrap().for_each(drop);
        assert_eq!(orchestrator.state(), OrchestratorState::ReadyToSearch);

        let array = orchestrator.request_new_array(20).unwrap();
        assert_eq!(array.len(), 20);
        assert_eq!(orchestrator.state(), OrchestratorState::NeedsSort);
    }

    #[test]
    fn invalid_size_keeps_current_array() {
        let mut orchestrator = orchestrator_with(vec![2, 1]);
        assert!(matches!(
            orchestrator.request_new_array(0),
            Err(StepVizError::InvalidSize { .. })
        ));
        assert_eq!(orchestrator.array(), Array::from(vec![2, 1]));
        assert_ne!(orchestrator.state(), OrchestratorState::Busy);
    }

    #[test]
    fn empty_session_reports_empty_input() {
        let orchestrator = SearchOrchestrator::from_seed(1);
        assert_eq!(
            orchestrator.request_run("3").unwrap_err(),
            StepVizError::EmptyInput {
                operation: "search"
            }
        );
        assert_eq!(orchestrator.state(), OrchestratorState::NeedsSort);
    }
}
