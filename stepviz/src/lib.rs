// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # stepviz
//!
//! A narration engine for two classical array algorithms: counting sort and binary
//! search. Instead of sorting or searching in one shot, every algorithm in this crate
//! is exposed as a lazy [`Iterator`] of [`StepEvent`]s. Each event describes one
//! observable moment of the run (an element being counted, a value being written back,
//! a midpoint being probed) and carries enough state for a presentation layer to render
//! it.
//!
//! The engine never sleeps and never touches a terminal. Pacing and rendering belong to
//! whoever pulls the events, for example the `stepviz` binary in the `stepviz-cmdr`
//! crate.
//!
//! ## Pieces
//!
//! | Piece                  | What it does                                                  |
//! | :--------------------- | :------------------------------------------------------------ |
//! | [`ArrayGenerator`]     | Fresh, duplicate-free random arrays (seedable)                |
//! | [`counting_sort`]      | Counting then rebuilding phases, exactly `2N` events          |
//! | [`binary_search`]      | Probe + move/found events, at most `floor(log2 N) + 1` probes |
//! | [`run`]                | Sort-if-needed then search, as one combined stream            |
//! | [`SearchOrchestrator`] | The session boundary, rejects overlapping runs                |
//!
//! ## Example
//!
//! ```
//! use stepviz::{Array, Phase, run};
//!
//! let array = Array::from(vec![5, 3, 1, 4, 2]);
//! let mut steps = run(array, 4).unwrap();
//!
//! let phases: Vec<Phase> = steps.by_ref().map(|it| it.phase()).collect();
//! assert_eq!(phases.iter().filter(|it| **it == Phase::Counting).count(), 5);
//! assert_eq!(phases.last(), Some(&Phase::Found));
//!
//! let outcome = steps.search_outcome().unwrap();
//! assert_eq!(outcome.index, Some(3));
//! assert_eq!(outcome.step_count, 2);
//! ```

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod model;
pub mod engine;
pub mod log;

// Re-export.
pub use model::*;
pub use engine::*;
pub use log::*;
