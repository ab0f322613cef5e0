// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # stepviz-cmdr
//!
//! The terminal front end of [`stepviz`]. The `stepviz` binary builds an array (random
//! or from `--values`), asks a [`stepviz::SearchOrchestrator`] for a run, and then
//! pulls the step events one at a time:
//!
//! - [`PacingConfig`] decides how long each event stays on screen, based on the array
//!   size and the phase of the event.
//! - [`StepRenderer`] draws the array with the current index or search window
//!   highlighted, followed by the narration line of the event. With `--format json`
//!   it prints one JSON object per line instead.
//!
//! ```text
//! stepviz --size 20 --target 42
//! stepviz --values 5,3,1,4,2 --target 4 --speed 2
//! stepviz --sort-only --seed 7 --no-delay --format json
//! ```

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod common;
pub mod viz;

// Re-export.
pub use common::*;
pub use viz::*;
