// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod array;
pub mod array_generator;
pub mod step_event;
pub mod stepviz_error;

// Re-export.
pub use array::*;
pub use array_generator::*;
pub use step_event::*;
pub use stepviz_error::*;
