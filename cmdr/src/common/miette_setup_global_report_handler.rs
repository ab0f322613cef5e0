// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Installs the graphical [miette](https://docs.rs/miette/latest/miette/index.html)
//! report handler used when `main() -> miette::Result<_>` returns an error.
//!
//! The hook is lazy: it is only run when a report is actually displayed, so the
//! terminal width is measured right before the error is printed, and never if no error
//! occurs.

use miette::MietteHandlerOpts;

const DEFAULT_TERMINAL_WIDTH: u16 = 80;

pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            tracing::debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .rgb_colors(miette::RgbColors::Always)
                .unicode(true)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
