// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Iterative binary search as a lazy stream of [`StepEvent`]s. See [`binary_search()`].

use std::{cmp::Ordering, collections::VecDeque, iter::FusedIterator};

use serde::Serialize;

use crate::{StepEvent, StepVizError, StepVizResult, Value};

/// Final result of a search, available once the step stream has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Where the target was found, [None] if it is not in the array.
    pub index: Option<usize>,
    /// Number of midpoint probes performed.
    pub step_count: usize,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool { self.index.is_some() }
}

/// Returns an iterator that searches `sorted` for `target` one probe at a time.
///
/// The caller guarantees that `sorted` is in ascending order; it is not re-verified.
/// Each loop iteration produces two events: a [`StepEvent::Probe`] followed by one of
/// [`StepEvent::MoveRight`], [`StepEvent::MoveLeft`] or [`StepEvent::Found`]. If the
/// window becomes empty, a final [`StepEvent::NotFound`] is produced.
///
/// The same `(sorted, target)` always produces the same events.
///
/// # Errors
///
/// [`StepVizError::EmptyInput`] if `sorted` is empty. No event is produced.
pub fn binary_search(
    sorted: &[Value],
    target: Value,
) -> StepVizResult<BinarySearchSteps> {
    if sorted.is_empty() {
        return Err(StepVizError::EmptyInput {
            operation: "search",
        });
    }

    Ok(BinarySearchSteps {
        array: sorted.to_vec(),
        target,
        left: 0,
        end: sorted.len(),
        step_count: 0,
        pending: VecDeque::with_capacity(2),
        outcome: None,
    })
}

/// The search state of one binary search run. Produced by [`binary_search()`].
///
/// The window is held as the half open range `[left, end)`, so `right = end - 1` never
/// underflows when the target is smaller than every element. This keeps the invariant
/// `0 <= left <= right + 1 <= N` without signed indices.
#[derive(Debug, Clone)]
pub struct BinarySearchSteps {
    array: Vec<Value>,
    target: Value,
    left: usize,
    end: usize,
    step_count: usize,
    /// Events of the current loop iteration that were computed but not yet handed out.
    pending: VecDeque<StepEvent>,
    outcome: Option<SearchOutcome>,
}

impl BinarySearchSteps {
    #[must_use]
    pub fn target(&self) -> Value { self.target }

    /// Current `[left, right]` window, or [None] once it is empty.
    #[must_use]
    pub fn window(&self) -> Option<(usize, usize)> {
        (self.left < self.end).then(|| (self.left, self.end - 1))
    }

    /// [None] until the terminal event was produced.
    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> { self.outcome }

    /// Drains any remaining events and returns the outcome.
    #[must_use]
    pub fn run_to_completion(mut self) -> SearchOutcome {
        self.by_ref().for_each(drop);
        self.outcome.unwrap_or(SearchOutcome {
            index: None,
            step_count: self.step_count,
        })
    }

    /// Runs one loop iteration, queueing its events.
    fn advance(&mut self) {
        if self.left >= self.end {
            self.pending.push_back(StepEvent::NotFound {
                target: self.target,
                step_count: self.step_count,
            });
            self.outcome = Some(SearchOutcome {
                index: None,
                step_count: self.step_count,
            });
            return;
        }

        self.step_count += 1;
        let right = self.end - 1;
        let mid = (self.left + right) / 2;
        let value = self.array[mid];

        self.pending.push_back(StepEvent::Probe {
            left: self.left,
            right,
            mid,
            value,
            target: self.target,
            step_count: self.step_count,
        });

        match value.cmp(&self.target) {
            Ordering::Equal => {
                self.pending.push_back(StepEvent::Found {
                    index: mid,
                    value,
                    step_count: self.step_count,
                });
                self.outcome = Some(SearchOutcome {
                    index: Some(mid),
                    step_count: self.step_count,
                });
            }
            Ordering::Less => {
                self.left = mid + 1;
                self.pending.push_back(StepEvent::MoveRight {
                    mid,
                    value,
                    target: self.target,
                    remaining: self.end - self.left,
                    step_count: self.step_count,
                });
            }
            Ordering::Greater => {
                self.end = mid;
                self.pending.push_back(StepEvent::MoveLeft {
                    mid,
                    value,
                    target: self.target,
                    remaining: self.end - self.left,
                    step_count: self.step_count,
                });
            }
        }
    }
}

impl Iterator for BinarySearchSteps {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && self.outcome.is_none() {
            self.advance();
        }
        self.pending.pop_front()
    }
}

impl FusedIterator for BinarySearchSteps {}
