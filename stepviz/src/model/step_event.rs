// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The records exchanged with the presentation layer. See [`StepEvent`].

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumCount, EnumIter};

use crate::Value;

/// Tag of a [`StepEvent`]. Displays in kebab-case (`move-left`, `sort-complete`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumCount, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Counting,
    Rebuilding,
    SortComplete,
    Probe,
    MoveLeft,
    MoveRight,
    Found,
    NotFound,
}

impl Phase {
    #[must_use]
    pub fn is_sort_phase(self) -> bool {
        matches!(self, Phase::Counting | Phase::Rebuilding | Phase::SortComplete)
    }

    #[must_use]
    pub fn is_search_phase(self) -> bool { !self.is_sort_phase() }
}

/// One observable moment of a counting sort or binary search run.
///
/// Events are plain values: once an engine hands one out, it is never touched again.
/// The [`Display`] impl produces the narration line for the event, and the
/// [`Serialize`] impl produces a flat JSON object tagged by `phase`.
///
/// ```text
/// counting     (index, value, count)     N events, input order
/// rebuilding   (position, value)         N events, sorted order
/// sort-complete (len)                    1 event
/// probe        (left, right, mid, ...)   1 per loop iteration
/// move-left / move-right / found         1 per loop iteration
/// not-found    (step_count)              at most 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum StepEvent {
    /// `value` (at `index` of the input) was counted, its tally is now `count`.
    Counting {
        index: usize,
        value: Value,
        count: usize,
    },
    /// `value` was written to `position` of the output.
    Rebuilding { position: usize, value: Value },
    /// Every element was written back, the output is now sorted.
    SortComplete { len: usize },
    /// The midpoint of the `[left, right]` window is being compared with the target.
    Probe {
        left: usize,
        right: usize,
        mid: usize,
        value: Value,
        target: Value,
        step_count: usize,
    },
    /// `value` at `mid` is greater than the target, the right half is discarded.
    MoveLeft {
        mid: usize,
        value: Value,
        target: Value,
        remaining: usize,
        step_count: usize,
    },
    /// `value` at `mid` is less than the target, the left half is discarded.
    MoveRight {
        mid: usize,
        value: Value,
        target: Value,
        remaining: usize,
        step_count: usize,
    },
    Found {
        index: usize,
        value: Value,
        step_count: usize,
    },
    NotFound { target: Value, step_count: usize },
}

impl StepEvent {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            StepEvent::Counting { .. } => Phase::Counting,
            StepEvent::Rebuilding { .. } => Phase::Rebuilding,
            StepEvent::SortComplete { .. } => Phase::SortComplete,
            StepEvent::Probe { .. } => Phase::Probe,
            StepEvent::MoveLeft { .. } => Phase::MoveLeft,
            StepEvent::MoveRight { .. } => Phase::MoveRight,
            StepEvent::Found { .. } => Phase::Found,
            StepEvent::NotFound { .. } => Phase::NotFound,
        }
    }

    /// The search step counter carried by this event, if it is a search event.
    #[must_use]
    pub fn step_count(&self) -> Option<usize> {
        match self {
            StepEvent::Probe { step_count, .. }
            | StepEvent::MoveLeft { step_count, .. }
            | StepEvent::MoveRight { step_count, .. }
            | StepEvent::Found { step_count, .. }
            | StepEvent::NotFound { step_count, .. } => Some(*step_count),
            StepEvent::Counting { .. }
            | StepEvent::Rebuilding { .. }
            | StepEvent::SortComplete { .. } => None,
        }
    }

    /// Whether the run that produced this event is over once it has been emitted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepEvent::Found { .. } | StepEvent::NotFound { .. })
    }
}

impl Display for StepEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            StepEvent::Counting {
                index,
                value,
                count,
            } => write!(
                f,
                "Counting element [index {index}] = {value}: its counter is now {count}"
            ),
            StepEvent::Rebuilding { position, value } => {
                write!(f, "Writing {value} back into position {position}")
            }
            StepEvent::SortComplete { len } => {
                write!(f, "Counting sort complete: {len} elements in ascending order")
            }
            StepEvent::Probe {
                left,
                right,
                mid,
                value,
                target,
                step_count,
            } => write!(
                f,
                "Step {step_count}: looking for {target} in [{left}, {right}], \
                 middle element [index {mid}] = {value}"
            ),
            StepEvent::MoveLeft {
                value,
                target,
                remaining,
                ..
            } => write!(
                f,
                "Middle value {value} is greater than {target}: discard the right half \
                 and search left ({remaining} remaining)"
            ),
            StepEvent::MoveRight {
                value,
                target,
                remaining,
                ..
            } => write!(
                f,
                "Middle value {value} is less than {target}: discard the left half \
                 and search right ({remaining} remaining)"
            ),
            StepEvent::Found {
                index,
                value,
                step_count,
            } => write!(
                f,
                "Found {value} at index {index} after {step_count} step(s)"
            ),
            StepEvent::NotFound { target, step_count } => write!(
                f,
                "{target} is not in the array (search window empty after {step_count} step(s))"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn phase_displays_kebab_case() {
        let phases: Vec<String> = Phase::iter().map(|it| it.to_string()).collect();
        assert_eq!(
            phases,
            vec![
                "counting",
                "rebuilding",
                "sort-complete",
                "probe",
                "move-left",
                "move-right",
                "found",
                "not-found",
            ]
        );
        assert_eq!(Phase::COUNT, 8);
    }

    #[test]
    fn sort_and_search_phases_partition() {
        let sort_count = Phase::iter().filter(|it| it.is_sort_phase()).count();
        let search_count = Phase::iter().filter(|it| it.is_search_phase()).count();
        assert_eq!(sort_count, 3);
        assert_eq!(search_count, 5);
    }

    #[test]
    fn serializes_flat_with_phase_tag() {
        let event = StepEvent::MoveRight {
            mid: 2,
            value: 3,
            target: 4,
            remaining: 2,
            step_count: 1,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phase": "move-right",
                "mid": 2,
                "value": 3,
                "target": 4,
                "remaining": 2,
                "step_count": 1,
            })
        );
    }

    #[test]
    fn narration_mentions_the_numbers() {
        let event = StepEvent::Found {
            index: 3,
            value: 4,
            step_count: 2,
        };
        assert_eq!(event.to_string(), "Found 4 at index 3 after 2 step(s)");
        assert!(event.is_terminal());
        assert_eq!(event.step_count(), Some(2));

        let event = StepEvent::Counting {
            index: 0,
            value: 5,
            count: 1,
        };
        assert!(event.to_string().contains("[index 0] = 5"));
        assert_eq!(event.step_count(), None);
    }
}
