// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single error type of the engine. See [`StepVizError`].

/// Result alias used by every fallible operation in this crate.
pub type StepVizResult<T> = Result<T, StepVizError>;

/// Everything that can go wrong when generating arrays or starting a run.
///
/// All variants are reported synchronously by the operation that was called, before
/// any [`StepEvent`] is produced. None of them are retried, since the algorithms are
/// pure and would fail the same way again.
///
/// | Variant            | Raised by                                              |
/// | :----------------- | :----------------------------------------------------- |
/// | [`InvalidSize`]    | [`ArrayGenerator::generate()`]                         |
/// | [`InvalidTarget`]  | [`parse_target()`], [`SearchOrchestrator::request_run()`] |
/// | [`Domain`]         | [`counting_sort()`]                                    |
/// | [`KeyTooLarge`]    | [`counting_sort()`]                                    |
/// | [`EmptyInput`]     | [`counting_sort()`], [`binary_search()`], [`run()`]    |
/// | [`ConcurrentRun`]  | [`SearchOrchestrator`] request methods                 |
/// | [`AlreadySorted`]  | [`SearchOrchestrator::request_sort()`]                 |
///
/// [`AlreadySorted`]: Self::AlreadySorted
/// [`ArrayGenerator::generate()`]: crate::ArrayGenerator::generate
/// [`ConcurrentRun`]: Self::ConcurrentRun
/// [`Domain`]: Self::Domain
/// [`EmptyInput`]: Self::EmptyInput
/// [`InvalidSize`]: Self::InvalidSize
/// [`KeyTooLarge`]: Self::KeyTooLarge
/// [`InvalidTarget`]: Self::InvalidTarget
/// [`SearchOrchestrator::request_run()`]: crate::SearchOrchestrator::request_run
/// [`SearchOrchestrator::request_sort()`]: crate::SearchOrchestrator::request_sort
/// [`SearchOrchestrator`]: crate::SearchOrchestrator
/// [`StepEvent`]: crate::StepEvent
/// [`binary_search()`]: crate::binary_search
/// [`counting_sort()`]: crate::counting_sort
/// [`parse_target()`]: crate::parse_target
/// [`run()`]: crate::run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StepVizError {
    #[error("Array size {size} is not supported (expected 1..={max_size})")]
    #[diagnostic(
        code(stepviz::generator::invalid_size),
        help("Pick a positive size that fits in the value range of the generator.")
    )]
    InvalidSize { size: usize, max_size: usize },

    #[error("Target {input:?} is not a valid integer")]
    #[diagnostic(
        code(stepviz::orchestrator::invalid_target),
        help("Enter a whole number, for example `42`.")
    )]
    InvalidTarget { input: String },

    /// Counting sort only works on non-negative keys.
    #[error("Counting sort can't handle the negative value {value} at index {index}")]
    #[diagnostic(
        code(stepviz::counting_sort::domain),
        help("Counting sort indexes its table by value, so every value must be >= 0.")
    )]
    Domain { index: usize, value: i64 },

    /// The counting table would need more than `max_key + 1` slots.
    #[error("Value {value} at index {index} is larger than the counting table allows ({max_key})")]
    #[diagnostic(
        code(stepviz::counting_sort::key_too_large),
        help("Counting sort allocates one counter per possible value, keep values small.")
    )]
    KeyTooLarge { index: usize, value: i64, max_key: i64 },

    #[error("The array is empty, there is nothing to {operation}")]
    #[diagnostic(
        code(stepviz::engine::empty_input),
        help("Generate a new array with at least one element.")
    )]
    EmptyInput { operation: &'static str },

    #[error("Another run is still in progress")]
    #[diagnostic(
        code(stepviz::orchestrator::concurrent_run),
        help("Finish consuming (or drop) the current step stream before starting a new one.")
    )]
    ConcurrentRun,

    #[error("The array is already sorted")]
    #[diagnostic(
        code(stepviz::orchestrator::already_sorted),
        help("You can go ahead and run the binary search.")
    )]
    AlreadySorted,
}
