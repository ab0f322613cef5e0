// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use stepviz::{Array, CountingSortSteps, RunSteps, SearchOrchestrator, StepVizError};

use crate::{CLIArg, PacingConfig, StepRenderer, ui_str};

/// Runs one session as described by `cli_arg`, writing everything to `out`.
///
/// # Errors
///
/// Any [`StepVizError`] the engine reports (bad size, bad target, values counting sort
/// can't handle, ...), or a failure to write to `out`.
pub async fn run_session(
    cli_arg: &CLIArg,
    out: &mut impl Write,
    colored: bool,
) -> miette::Result<()> {
    let mut orchestrator = match cli_arg.seed {
        Some(seed) => SearchOrchestrator::from_seed(seed),
        None => SearchOrchestrator::from_entropy(),
    };

    let array = match &cli_arg.values {
        Some(values) => {
            orchestrator.load_array(Array::from(values.clone()))?;
            orchestrator.array()
        }
        None => orchestrator.request_new_array(cli_arg.size)?,
    };

    let renderer = StepRenderer::new(cli_arg.format, colored);
    let pacing = if cli_arg.no_delay {
        PacingConfig::disabled()
    } else {
        PacingConfig::for_size(array.len()).with_speed(cli_arg.speed)
    };

    let steps = match (&cli_arg.target, cli_arg.sort_only) {
        (Some(target), false) => orchestrator.request_run(target)?,
        _ => match orchestrator.request_sort() {
            Ok(it) => it,
            Err(StepVizError::AlreadySorted) => {
                return renderer.notice(out, ui_str::already_sorted());
            }
            Err(error) => return Err(error.into()),
        },
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "Session started",
        array = %array,
        target = ?steps.target(),
        state = %orchestrator.state()
    );

    renderer.header(out, &array, steps.target())?;
    play(&renderer, &pacing, steps, out).await
}

/// Pulls every event out of `steps`, draws it, and waits as long as `pacing` says.
///
/// # Errors
///
/// If `out` can't be written to.
pub async fn play(
    renderer: &StepRenderer,
    pacing: &PacingConfig,
    mut steps: RunSteps,
    out: &mut impl Write,
) -> miette::Result<()> {
    while let Some(event) = steps.next() {
        let maybe_counts = steps.sort_progress().map(CountingSortSteps::counts);
        renderer.step(out, &event, &steps.current_view(), maybe_counts)?;

        let delay = pacing.delay_for(&event);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    renderer.summary(out, &steps)
}
