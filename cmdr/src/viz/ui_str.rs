// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use stepviz::{Array, SearchOutcome, Value};

#[must_use]
pub fn run_header(array: &Array, maybe_target: Option<Value>) -> String {
    match maybe_target {
        Some(target) => format!(
            "Searching for {target} in {len} elements: {array}",
            len = array.len()
        ),
        None => format!("Sorting {len} elements: {array}", len = array.len()),
    }
}

#[must_use]
pub fn sort_needed_first() -> &'static str {
    "The array is not sorted yet, running counting sort first."
}

#[must_use]
pub fn already_sorted() -> &'static str {
    "The array is already sorted, you can search it right away with --target."
}

/// Non-empty slots of the counting table as `value:count`, plus the table size.
#[must_use]
pub fn counting_table(counts: &[usize]) -> String {
    let entries: Vec<String> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(value, count)| format!("{value}:{count}"))
        .collect();
    format!("{} ({} slots)", entries.join(" "), counts.len())
}

#[must_use]
pub fn sorted_result(sorted: &Array) -> String { format!("Sorted: {sorted}") }

#[must_use]
pub fn search_result(target: Value, outcome: SearchOutcome) -> String {
    match outcome.index {
        Some(index) => format!(
            "{target} found at index {index} in {steps} step(s).",
            steps = outcome.step_count
        ),
        None => format!(
            "{target} not found after {steps} step(s).",
            steps = outcome.step_count
        ),
    }
}
