// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Counting sort as a lazy stream of [`StepEvent`]s. See [`counting_sort()`].

use std::iter::FusedIterator;

use crate::{Array, StepEvent, StepVizError, StepVizResult, Value};

/// Largest value accepted by [`counting_sort()`]. The counting table has one slot per
/// value in `[0, max]`, so this caps its allocation.
pub const MAX_COUNTING_KEY: Value = 1 << 24;

/// Validates `values` and returns an iterator that performs the sort one step at a
/// time.
///
/// The iterator yields exactly `2 * values.len()` events:
/// 1. One [`StepEvent::Counting`] per input element, in input order.
/// 2. One [`StepEvent::Rebuilding`] per output element, in sorted order.
///
/// There is no short-circuit for input that is already in order; the whole algorithm is
/// always demonstrated. Once the iterator is exhausted,
/// [`CountingSortSteps::into_sorted()`] returns the result.
///
/// # Errors
///
/// Validation happens up front, so an error means no event is ever produced:
/// - [`StepVizError::EmptyInput`] if `values` is empty.
/// - [`StepVizError::Domain`] for the first negative value.
/// - [`StepVizError::KeyTooLarge`] for the first value above [`MAX_COUNTING_KEY`].
pub fn counting_sort(values: &[Value]) -> StepVizResult<CountingSortSteps> {
    if values.is_empty() {
        return Err(StepVizError::EmptyInput { operation: "sort" });
    }

    for (index, &value) in values.iter().enumerate() {
        if value < 0 {
            return Err(StepVizError::Domain { index, value });
        }
        if value > MAX_COUNTING_KEY {
            return Err(StepVizError::KeyTooLarge {
                index,
                value,
                max_key: MAX_COUNTING_KEY,
            });
        }
    }

    // Non-empty and validated above.
    let max_value = values.iter().copied().max().unwrap_or_default();
    let table_len = usize::try_from(max_value).map_err(|_| StepVizError::KeyTooLarge {
        index: 0,
        value: max_value,
        max_key: MAX_COUNTING_KEY,
    })? + 1;

    Ok(CountingSortSteps {
        input: values.to_vec(),
        counts: vec![0; table_len],
        output: Vec::with_capacity(values.len()),
        cursor: Cursor::Counting { next_index: 0 },
        emitted: 0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Counting { next_index: usize },
    Rebuilding { key: usize, written_for_key: usize },
    Done,
}

/// The sort state of one counting sort run: the counting table and the partially
/// rebuilt output. Produced by [`counting_sort()`].
///
/// Dropping this before it is exhausted abandons the run; nothing outside of it has
/// been modified.
#[derive(Debug, Clone)]
pub struct CountingSortSteps {
    input: Vec<Value>,
    counts: Vec<usize>,
    output: Vec<Value>,
    cursor: Cursor,
    emitted: usize,
}

impl CountingSortSteps {
    /// Total number of events this run produces, `2N`.
    #[must_use]
    pub fn total_steps(&self) -> usize { self.input.len() * 2 }

    /// The counting table. Slot `v` holds how many times `v` has been counted so far.
    #[must_use]
    pub fn counts(&self) -> &[usize] { &self.counts }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.cursor == Cursor::Done }

    /// The array as it would look if the output were written over the input in place:
    /// the rebuilt prefix followed by the not yet overwritten tail of the input.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Value> {
        let mut it = self.output.clone();
        it.extend_from_slice(&self.input[self.output.len()..]);
        it
    }

    /// The sorted array, flagged as sorted. [None] until the last event was produced.
    #[must_use]
    pub fn into_sorted(self) -> Option<Array> {
        self.is_complete().then(|| Array::new_sorted(self.output))
    }

    /// Drains any remaining events and returns the sorted array.
    #[must_use]
    pub fn run_to_completion(mut self) -> Array {
        self.by_ref().for_each(drop);
        Array::new_sorted(self.output)
    }

    fn next_counting(&mut self, index: usize) -> Option<StepEvent> {
        let value = self.input[index];
        // Keys were validated as non-negative and within the table.
        let slot = self.counts.get_mut(usize::try_from(value).ok()?)?;
        *slot += 1;
        Some(StepEvent::Counting {
            index,
            value,
            count: *slot,
        })
    }

    fn next_rebuilding(
        &mut self,
        mut key: usize,
        mut written_for_key: usize,
    ) -> Option<StepEvent> {
        while key < self.counts.len() {
            if written_for_key < self.counts[key] {
                let value = Value::try_from(key).ok()?;
                self.output.push(value);
                self.cursor = Cursor::Rebuilding {
                    key,
                    written_for_key: written_for_key + 1,
                };
                return Some(StepEvent::Rebuilding {
                    position: self.output.len() - 1,
                    value,
                });
            }
            key += 1;
            written_for_key = 0;
        }
        self.cursor = Cursor::Done;
        None
    }
}

impl Iterator for CountingSortSteps {
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let event = match self.cursor {
            Cursor::Counting { next_index } if next_index < self.input.len() => {
                self.cursor = Cursor::Counting {
                    next_index: next_index + 1,
                };
                self.next_counting(next_index)
            }
            Cursor::Counting { .. } => self.next_rebuilding(0, 0),
            Cursor::Rebuilding {
                key,
                written_for_key,
            } => self.next_rebuilding(key, written_for_key),
            Cursor::Done => None,
        };

        if event.is_some() {
            self.emitted += 1;
        } else {
            self.cursor = Cursor::Done;
        }
        event
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_steps() - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountingSortSteps {}

impl FusedIterator for CountingSortSteps {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn is_permutation_of(lhs: &[Value], rhs: &[Value]) -> bool {
        let mut lhs = lhs.to_vec();
        let mut rhs = rhs.to_vec();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }

    #[test]
    fn emits_counting_then_rebuilding_events() {
        let events: Vec<StepEvent> = counting_sort(&[5, 3, 1, 4, 2]).unwrap().collect();

        assert_eq!(
            events,
            vec![
                StepEvent::Counting { index: 0, value: 5, count: 1 },
                StepEvent::Counting { index: 1, value: 3, count: 1 },
                StepEvent::Counting { index: 2, value: 1, count: 1 },
                StepEvent::Counting { index: 3, value: 4, count: 1 },
                StepEvent::Counting { index: 4, value: 2, count: 1 },
                StepEvent::Rebuilding { position: 0, value: 1 },
                StepEvent::Rebuilding { position: 1, value: 2 },
                StepEvent::Rebuilding { position: 2, value: 3 },
                StepEvent::Rebuilding { position: 3, value: 4 },
                StepEvent::Rebuilding { position: 4, value: 5 },
            ]
        );
    }

    #[test]
    fn duplicates_accumulate_counts() {
        let mut steps = counting_sort(&[2, 0, 2, 2]).unwrap();
        let counting: Vec<usize> = steps
            .by_ref()
            .take(4)
            .filter_map(|it| match it {
                StepEvent::Counting { count, .. } => Some(count),
                _ => None,
            })
            .collect();
        assert_eq!(counting, vec![1, 1, 2, 3]);
        assert_eq!(steps.counts(), &[1, 0, 3]);

        let sorted = steps.run_to_completion();
        assert_eq!(sorted.as_slice(), &[0, 2, 2, 2]);
        assert!(sorted.is_sorted());
    }

    #[test]
    fn singleton() {
        let steps = counting_sort(&[7]).unwrap();
        assert_eq!(steps.len(), 2);
        let sorted = steps.run_to_completion();
        assert_eq!(sorted.as_slice(), &[7]);
    }

    #[test]
    fn already_sorted_input_is_not_short_circuited() {
        let input = [10, 20, 30, 40, 50];
        let events: Vec<StepEvent> = counting_sort(&input).unwrap().collect();
        assert_eq!(events.len(), 10);
        assert_eq!(
            events.iter().filter(|it| it.phase() == Phase::Counting).count(),
            5
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            counting_sort(&[]).unwrap_err(),
            StepVizError::EmptyInput { operation: "sort" }
        );
    }

    #[test]
    fn negative_value_is_rejected_before_any_output() {
        assert_eq!(
            counting_sort(&[3, 1, -2, 5]).unwrap_err(),
            StepVizError::Domain { index: 2, value: -2 }
        );
    }

    #[test]
    fn huge_value_is_rejected() {
        assert!(matches!(
            counting_sort(&[1, MAX_COUNTING_KEY + 1]),
            Err(StepVizError::KeyTooLarge { index: 1, .. })
        ));
    }

    #[test]
    fn into_sorted_is_none_until_exhausted() {
        let mut steps = counting_sort(&[3, 1, 2]).unwrap();
        steps.next();
        assert!(steps.clone().into_sorted().is_none());

        steps.by_ref().for_each(drop);
        assert_eq!(steps.into_sorted(), Some(Array::new_sorted(vec![1, 2, 3])));
    }

    #[test]
    fn snapshot_overlays_rebuilt_prefix_on_input() {
        let mut steps = counting_sort(&[3, 1, 2]).unwrap();
        // Counting phase leaves the input untouched.
        steps.by_ref().take(3).for_each(drop);
        assert_eq!(steps.snapshot(), vec![3, 1, 2]);

        // First rebuild writes 1 over position 0.
        steps.next();
        assert_eq!(steps.snapshot(), vec![1, 1, 2]);

        steps.next();
        assert_eq!(steps.snapshot(), vec![1, 2, 2]);
    }

    #[test]
    fn size_hint_counts_down_to_zero() {
        let mut steps = counting_sort(&[4, 2, 9]).unwrap();
        assert_eq!(steps.size_hint(), (6, Some(6)));
        steps.next();
        steps.next();
        assert_eq!(steps.len(), 4);
        steps.by_ref().for_each(drop);
        assert_eq!(steps.len(), 0);
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn random_inputs_sort_into_permutation_with_2n_steps() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..200 {
            let len = rng.random_range(1..60);
            let input: Vec<Value> = (0..len).map(|_| rng.random_range(0..=80)).collect();

            let steps = counting_sort(&input).unwrap();
            let events: Vec<StepEvent> = steps.clone().collect();
            assert_eq!(events.len(), 2 * input.len());

            let sorted = steps.run_to_completion();
            assert_eq!(sorted.len(), input.len());
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            assert!(is_permutation_of(&sorted, &input));
        }
    }

    #[test]
    fn reverse_sorted_spanning_zero_to_max() {
        let input: Vec<Value> = (0..=30).rev().collect();
        let sorted = counting_sort(&input).unwrap().run_to_completion();
        assert_eq!(sorted.into_values(), (0..=30).collect::<Vec<_>>());
    }
}
