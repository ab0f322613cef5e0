// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod clap_config;
pub mod launcher;
pub mod pacing;
pub mod render;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use launcher::*;
pub use pacing::*;
pub use render::*;
