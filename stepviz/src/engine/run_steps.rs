// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sort-if-needed then search, as one combined step stream. See [`run()`].

use std::{iter::FusedIterator, mem};

use crate::{Array, BinarySearchSteps, CountingSortSteps, DEBUG_STEPVIZ_ENGINE, RunLease,
            SearchOutcome, StepEvent, StepVizError, StepVizResult, Value, binary_search,
            counting_sort};

/// Where a run currently is. This is the orchestrator state machine:
///
/// ```text
/// ┌───────────┐  2N sort events + sort-complete  ┌───────────────┐  found / not-found  ┌──────┐
/// │ NeedsSort ├─────────────────────────────────►│ ReadyToSearch ├────────────────────►│ Done │
/// └───────────┘                                  └───────────────┘                     └──────┘
/// ```
#[derive(Debug, Clone)]
enum Stage {
    Sorting(CountingSortSteps),
    Searching(BinarySearchSteps),
    Done,
}

/// Starts a run over `array`.
///
/// - If `array` is not flagged as sorted, the stream starts with the full counting sort
///   (`2N` events) followed by [`StepEvent::SortComplete`]. The search then runs over
///   the sorted result.
/// - If it is flagged as sorted, the stream only contains search events.
///
/// # Errors
///
/// Everything is validated before the first event:
/// - [`StepVizError::EmptyInput`] if `array` is empty.
/// - [`StepVizError::Domain`] / [`StepVizError::KeyTooLarge`] if the array needs
///   sorting and holds values counting sort can't handle.
pub fn run(array: Array, target: Value) -> StepVizResult<RunSteps> {
    RunSteps::try_new(array, Some(target))
}

/// Like [`run()`], but stops after [`StepEvent::SortComplete`].
///
/// # Errors
///
/// [`StepVizError::AlreadySorted`] if `array` is already flagged as sorted, otherwise
/// the same as [`run()`].
pub fn sort_only(array: Array) -> StepVizResult<RunSteps> {
    if array.is_sorted() {
        return Err(StepVizError::AlreadySorted);
    }
    RunSteps::try_new(array, None)
}

/// The combined step stream of one run, produced by [`run()`] or [`sort_only()`].
///
/// Sort events always come before search events. The final results are available
/// through [`RunSteps::sorted_array()`] and [`RunSteps::search_outcome()`] once the
/// stream has ended.
///
/// When the run was started by a [`SearchOrchestrator`], this also holds the
/// [`RunLease`] of the session: the sorted array is written back to the session right
/// before [`StepEvent::SortComplete`] is handed out, and the lease is released with the
/// terminal event (or when this is dropped early).
///
/// [`SearchOrchestrator`]: crate::SearchOrchestrator
#[derive(Debug)]
pub struct RunSteps {
    stage: Stage,
    target: Option<Value>,
    sorted: Option<Array>,
    outcome: Option<SearchOutcome>,
    lease: Option<RunLease>,
    is_finished: bool,
}

impl RunSteps {
    fn try_new(array: Array, target: Option<Value>) -> StepVizResult<Self> {
        if array.is_empty() {
            return Err(StepVizError::EmptyInput {
                operation: if target.is_some() { "search" } else { "sort" },
            });
        }

        DEBUG_STEPVIZ_ENGINE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Starting run",
                len = %array.len(),
                is_sorted = %array.is_sorted(),
                target = ?target
            );
        });

        let (stage, sorted) = if array.is_sorted() {
            match target {
                Some(target) => {
                    let steps = binary_search(&array, target)?;
                    (Stage::Searching(steps), Some(array))
                }
                None => (Stage::Done, Some(array)),
            }
        } else {
            (Stage::Sorting(counting_sort(&array)?), None)
        };

        Ok(Self {
            stage,
            target,
            sorted,
            outcome: None,
            lease: None,
            is_finished: false,
        })
    }

    pub(crate) fn with_lease(mut self, lease: RunLease) -> Self {
        self.lease = Some(lease);
        self
    }

    #[must_use]
    pub fn target(&self) -> Option<Value> { self.target }

    /// The sorted array, once the sort phase is over (or right away if the array was
    /// already sorted).
    #[must_use]
    pub fn sorted_array(&self) -> Option<&Array> { self.sorted.as_ref() }

    /// [None] until the search produced its terminal event.
    #[must_use]
    pub fn search_outcome(&self) -> Option<SearchOutcome> { self.outcome }

    #[must_use]
    pub fn is_sorting(&self) -> bool { matches!(self.stage, Stage::Sorting(_)) }

    #[must_use]
    pub fn is_done(&self) -> bool { matches!(self.stage, Stage::Done) }

    /// The counting sort in progress, so a renderer can show its table.
    #[must_use]
    pub fn sort_progress(&self) -> Option<&CountingSortSteps> {
        match &self.stage {
            Stage::Sorting(steps) => Some(steps),
            _ => None,
        }
    }

    /// The array as a renderer should draw it right now.
    #[must_use]
    pub fn current_view(&self) -> Vec<Value> {
        match (&self.stage, &self.sorted) {
            (Stage::Sorting(steps), _) => steps.snapshot(),
            (_, Some(sorted)) => sorted.to_vec(),
            (_, None) => vec![],
        }
    }

    fn on_sort_complete(&mut self, sorted: Array) -> StepEvent {
        let len = sorted.len();

        if let Some(lease) = &self.lease {
            lease.replace_array(sorted.clone());
        }

        DEBUG_STEPVIZ_ENGINE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Counting sort complete", sorted = %sorted);
        });

        match self.target.map(|target| binary_search(&sorted, target)) {
            Some(Ok(steps)) => self.stage = Stage::Searching(steps),
            // A sorted array is never empty here, so this only covers sort only runs.
            Some(Err(_)) | None => self.finish(),
        }
        self.sorted = Some(sorted);

        StepEvent::SortComplete { len }
    }

    /// Only the first call does anything, the stream is fused.
    fn finish(&mut self) {
        self.stage = Stage::Done;
        if self.is_finished {
            return;
        }
        self.is_finished = true;
        drop(self.lease.take());

        DEBUG_STEPVIZ_ENGINE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Run finished", outcome = ?self.outcome);
        });
    }
}

impl Iterator for RunSteps {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.stage, Stage::Done) {
            Stage::Sorting(mut steps) => match steps.next() {
                Some(event) => {
                    self.stage = Stage::Sorting(steps);
                    Some(event)
                }
                None => {
                    let sorted = steps.run_to_completion();
                    Some(self.on_sort_complete(sorted))
                }
            },
            Stage::Searching(mut steps) => {
                let maybe_event = steps.next();
                match maybe_event {
                    Some(event) if !event.is_terminal() => {
                        self.stage = Stage::Searching(steps);
                    }
                    _ => {
                        self.outcome = steps.outcome();
                        self.finish();
                    }
                }
                maybe_event
            }
            Stage::Done => {
                self.finish();
                None
            }
        }
    }
}

impl FusedIterator for RunSteps {}
