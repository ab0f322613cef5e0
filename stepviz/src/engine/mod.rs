// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod binary_search;
pub mod counting_sort;
pub mod run_lease;
pub mod run_steps;
pub mod search_orchestrator;

// Re-export.
pub use binary_search::*;
pub use counting_sort::*;
pub use run_lease::*;
pub use run_steps::*;
pub use search_orchestrator::*;

/// Gates the per-run `tracing::debug!` output of the engine.
pub const DEBUG_STEPVIZ_ENGINE: bool = true;
