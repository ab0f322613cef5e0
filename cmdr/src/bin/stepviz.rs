// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use crossterm::tty::IsTty;
use stepviz::try_initialize_logging_global;
use stepviz_cmdr::{CLIArg, OutputFormat, run_session,
                   setup_default_miette_global_report_handler};

const ERROR_FOOTER: &str =
    "Run again with --enable-logging and check log.txt for details.";

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ERROR_FOOTER);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if let Some(tracing_config) = cli_arg.global_options.tracing_config() {
        try_initialize_logging_global(tracing_config).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut stdout = std::io::stdout();
    let colored = cli_arg.format == OutputFormat::Text && stdout.is_tty();
    let result = run_session(&cli_arg, &mut stdout, colored).await;

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not run stepviz", error = ?error);
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
