// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;
use serde::Serialize;
use stepviz::{Array, RunSteps, SearchOutcome, StepEvent, Value};

use crate::{OutputFormat, cursor, dim, emphasis, error, normal, ui_str};

/// Turns step events into output lines, either for a terminal or as JSON lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRenderer {
    format: OutputFormat,
    colored: bool,
}

/// How a single array cell is drawn for the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// The element the algorithm is looking at.
    Cursor,
    /// Sorted result or the element that was found.
    Hit,
    /// Still relevant: counted input, rebuilt prefix, the search window.
    Active,
    /// Out of the picture: stale input, discarded halves.
    Inactive,
}

#[derive(Debug, Serialize)]
struct RunHeader<'a> {
    array: &'a [Value],
    sorted: bool,
    target: Option<Value>,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    sorted: Option<&'a [Value]>,
    outcome: Option<SearchOutcome>,
}

#[derive(Debug, Serialize)]
struct Notice<'a> {
    notice: &'a str,
}

impl StepRenderer {
    #[must_use]
    pub fn new(format: OutputFormat, colored: bool) -> Self { Self { format, colored } }

    /// Describes the run about to start.
    ///
    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn header(
        &self,
        out: &mut impl Write,
        array: &Array,
        maybe_target: Option<Value>,
    ) -> miette::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_line(
                out,
                &RunHeader {
                    array,
                    sorted: array.is_sorted(),
                    target: maybe_target,
                },
            ),
            OutputFormat::Text => {
                let text = ui_str::run_header(array, maybe_target);
                writeln!(out, "{}", self.paint(normal, text)).into_diagnostic()?;
                if maybe_target.is_some() && !array.is_sorted() {
                    writeln!(out, "{}", self.paint(dim, ui_str::sort_needed_first()))
                        .into_diagnostic()?;
                }
                Ok(())
            }
        }
    }

    /// Draws one event. `view` is the array as it looks right after the event, and
    /// `maybe_counts` is the counting table while a sort is running. The table is only
    /// drawn for counting events.
    ///
    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn step(
        &self,
        out: &mut impl Write,
        event: &StepEvent,
        view: &[Value],
        maybe_counts: Option<&[usize]>,
    ) -> miette::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_line(out, event),
            OutputFormat::Text => {
                writeln!(out, "{}", self.array_row(event, view)).into_diagnostic()?;
                let is_counting = matches!(event, StepEvent::Counting { .. });
                if let Some(counts) = maybe_counts.filter(|_| is_counting) {
                    writeln!(out, "{}", self.counts_row(counts)).into_diagnostic()?;
                }
                writeln!(out, "{}", self.narration(event)).into_diagnostic()
            }
        }
    }

    /// Final results, once the stream has ended.
    ///
    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn summary(&self, out: &mut impl Write, steps: &RunSteps) -> miette::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_line(
                out,
                &RunSummary {
                    sorted: steps.sorted_array().map(Array::as_slice),
                    outcome: steps.search_outcome(),
                },
            ),
            OutputFormat::Text => {
                if let Some(sorted) = steps.sorted_array() {
                    writeln!(out, "{}", self.paint(normal, ui_str::sorted_result(sorted)))
                        .into_diagnostic()?;
                }
                let maybe_result = steps.target().zip(steps.search_outcome());
                if let Some((target, outcome)) = maybe_result {
                    let text = ui_str::search_result(target, outcome);
                    let text = if outcome.is_found() {
                        self.paint(emphasis, text)
                    } else {
                        self.paint(error, text)
                    };
                    writeln!(out, "{text}").into_diagnostic()?;
                }
                Ok(())
            }
        }
    }

    /// A message that is neither a step nor a result.
    ///
    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn notice(&self, out: &mut impl Write, text: &str) -> miette::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_line(out, &Notice { notice: text }),
            OutputFormat::Text => {
                writeln!(out, "{}", self.paint(dim, text)).into_diagnostic()
            }
        }
    }

    fn paint(&self, style: fn(String) -> String, text: impl Into<String>) -> String {
        let text = text.into();
        if self.colored { style(text) } else { text }
    }

    fn narration(&self, event: &StepEvent) -> String {
        let text = event.to_string();
        let text = match event {
            StepEvent::Found { .. } | StepEvent::SortComplete { .. } => {
                self.paint(emphasis, text)
            }
            StepEvent::NotFound { .. } => self.paint(error, text),
            _ => self.paint(normal, text),
        };
        format!("{} {text}", self.paint(dim, label(event.phase())))
    }

    fn counts_row(&self, counts: &[usize]) -> String {
        format!(
            "{} {}",
            self.paint(dim, label("table")),
            self.paint(dim, ui_str::counting_table(counts))
        )
    }

    fn array_row(&self, event: &StepEvent, view: &[Value]) -> String {
        let width = view
            .iter()
            .map(|it| it.to_string().len())
            .max()
            .unwrap_or_default();

        let mut row = String::from("  ");
        for (index, value) in view.iter().enumerate() {
            let cell = format!("{value:>width$}");
            row.push_str(&self.cell(mark_for(event, index), &cell, width));
        }
        row.trim_end().to_string()
    }

    fn cell(&self, mark: Mark, cell: &str, width: usize) -> String {
        if self.colored {
            let padded = format!(" {cell} ");
            match mark {
                Mark::Cursor => cursor(padded),
                Mark::Hit => emphasis(padded),
                Mark::Active => normal(padded),
                Mark::Inactive => dim(padded),
            }
        } else {
            match mark {
                Mark::Cursor => format!("[{cell}]"),
                Mark::Hit => format!("({cell})"),
                Mark::Active => format!(" {cell} "),
                Mark::Inactive => format!(" {} ", ".".repeat(width)),
            }
        }
    }
}

fn mark_for(event: &StepEvent, index: usize) -> Mark {
    match *event {
        StepEvent::Counting { index: at, .. } => {
            if index == at { Mark::Cursor } else { Mark::Active }
        }
        StepEvent::Rebuilding { position, .. } => match index.cmp(&position) {
            std::cmp::Ordering::Less => Mark::Active,
            std::cmp::Ordering::Equal => Mark::Cursor,
            std::cmp::Ordering::Greater => Mark::Inactive,
        },
        StepEvent::SortComplete { .. } => Mark::Hit,
        StepEvent::Probe {
            left, right, mid, ..
        } => {
            if index == mid {
                Mark::Cursor
            } else if (left..=right).contains(&index) {
                Mark::Active
            } else {
                Mark::Inactive
            }
        }
        StepEvent::MoveLeft { mid, remaining, .. } => {
            if index < mid && index + remaining >= mid {
                Mark::Active
            } else {
                Mark::Inactive
            }
        }
        StepEvent::MoveRight { mid, remaining, .. } => {
            if index > mid && index <= mid + remaining {
                Mark::Active
            } else {
                Mark::Inactive
            }
        }
        StepEvent::Found { index: at, .. } => {
            if index == at { Mark::Hit } else { Mark::Inactive }
        }
        StepEvent::NotFound { .. } => Mark::Inactive,
    }
}

/// Left column of a text line, padded so the narration lines up.
fn label(text: impl std::fmt::Display) -> String { format!("  {:<13}", text.to_string()) }

fn write_json_line(out: &mut impl Write, value: &impl Serialize) -> miette::Result<()> {
    serde_json::to_writer(&mut *out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()
}
